//! Sharing validators and assertions across threads.

use std::sync::Arc;
use std::thread;

use atlas_validator::prelude::*;
use serde_json::json;

fn schema() -> Validator {
    shape! {
        "id" => required(string()),
        "zoom" => range(0, 22),
        "center" => coordinates(),
        "layers" => array_of(shape! { "id" => required(string()), "visible" => boolean() }),
    }
}

#[test]
fn cloned_assertions_agree_across_threads() {
    let assertion = assert(schema(), AssertOptions::default().with_api_name("Styles.updateStyle"));
    let value = json!({ "id": "s", "zoom": 30, "layers": [{ "id": "water" }] });
    let expected = assertion.check(&value).unwrap_err();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let assertion = assertion.clone();
            let value = value.clone();
            thread::spawn(move || assertion.check(&value).unwrap_err())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(
        expected.message(),
        "Styles.updateStyle: zoom must be a number between 0 & 22 (inclusive)."
    );
}

#[test]
fn shared_validator_in_arc() {
    let validator = Arc::new(schema());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let value = json!({ "id": format!("style-{i}"), "zoom": i, "center": [i, i] });
                validate(&validator, Some(&value)).is_ok()
            })
        })
        .collect();

    assert!(handles.into_iter().all(|handle| handle.join().unwrap()));
}

#[test]
fn aggregate_failures_render_the_same_on_any_thread() {
    let assertion = assert(schema(), AssertOptions::default());
    let value = json!({ "zoom": "high", "center": [0, 100] });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let assertion = assertion.clone();
            let value = value.clone();
            thread::spawn(move || assertion.check(&value).unwrap_err().to_string())
        })
        .collect();
    let messages: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(messages.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(
        messages[0],
        "The following keys of value did not pass validation:\n  \
         >id: id is required.\n  \
         >zoom: zoom must be a number between 0 & 22 (inclusive).\n  \
         >center: center must be an array of [longitude, latitude]."
    );
}
