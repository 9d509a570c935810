//! Basic usage example for atlas-validator

use atlas_validator::prelude::*;
use serde_json::json;

fn main() {
    let directions = assert(
        shape! {
            "profile" => required(one_of!["driving", "walking", "cycling"]),
            "waypoints" => required(array_of(coordinates())),
            "departAt" => date(),
        },
        AssertOptions::default().with_api_name("Directions.getDirections"),
    );

    let requests = [
        json!({ "profile": "walking", "waypoints": [[-122.42, 37.78], [-122.45, 37.91]] }),
        json!({ "profile": "flying", "waypoints": [[-122.42, 37.78]] }),
        json!({ "waypoints": [[-122.42, 37.78], [0, 91]], "departAt": "soon" }),
    ];

    for request in &requests {
        match directions.check(request) {
            Ok(()) => println!("✓ {request}"),
            Err(e) => println!("✗ {request}\n{e}\n"),
        }
    }
}
