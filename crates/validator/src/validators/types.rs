//! JSON type validators

crate::primitive! {
    /// Validates that a value is a JSON string.
    pub StringType;
    rule(input) { input.is_string() }
    expect "string";
    fn string();
}

crate::primitive! {
    /// Validates that a value is a JSON number.
    pub NumberType;
    rule(input) { input.is_number() }
    expect "number";
    fn number();
}

crate::primitive! {
    /// Validates that a value is a JSON boolean.
    pub BooleanType;
    rule(input) { input.is_boolean() }
    expect "boolean";
    fn boolean();
}

crate::primitive! {
    /// Validates that a value is a JSON array.
    pub PlainArray;
    rule(input) { input.is_array() }
    expect "array";
    fn plain_array();
}

crate::primitive! {
    /// Validates that a value is a JSON object (a plain key/value mapping).
    pub PlainObject;
    rule(input) { input.is_object() }
    expect "object";
    fn plain_object();
}
