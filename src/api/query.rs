use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const API_VERSION: &str = "2015-01-09";
pub const FORMAT: &str = "JSON";

/// Flattens a wire map into RPC query parameters.
///
/// Nested maps join keys with `.`, list items are numbered from 1
/// (`Tag.1.Key`), `null` values are dropped.
pub fn flatten(map: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for (key, value) in map {
        flatten_into(&mut params, key.clone(), value);
    }
    params
}

fn flatten_into(params: &mut BTreeMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            params.insert(prefix, b.to_string());
        }
        Value::Number(n) => {
            params.insert(prefix, n.to_string());
        }
        Value::String(s) => {
            params.insert(prefix, s.clone());
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(params, format!("{}.{}", prefix, i + 1), item);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(params, format!("{}.{}", prefix, key), item);
            }
        }
    }
}

/// Query parameters of an RPC call: the flattened request plus `Action`,
/// `Version` and `Format`.
pub fn rpc_query(action: &str, params: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut query = flatten(params);
    query.insert("Action".to_string(), action.to_string());
    query.insert("Version".to_string(), API_VERSION.to_string());
    query.insert("Format".to_string(), FORMAT.to_string());
    query
}
