mod client;
mod config;
mod endpoint;
mod models;
mod operations;
mod planner;

use serde_json::{Map, Value};

// Unwraps a `json!` object literal into a wire map.
pub(crate) fn wire(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
