use anyhow::{anyhow, Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Conversion between a typed message and its wire map.
///
/// `validate` comes from [`Validate`]: a no-op for flat messages, recursive
/// for messages holding nested ones.
pub trait Model: Serialize + DeserializeOwned + Validate {
    /// Serializes into a wire map. Unset fields produce no key.
    fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self).context("Failed to serialize model")? {
            Value::Object(map) => Ok(map),
            other => Err(anyhow!("Model serialized to a non-object value: {}", other)),
        }
    }

    /// Deserializes from a wire map. Absent or `null` keys leave scalars unset
    /// and lists empty. Unknown keys are ignored.
    fn from_map(map: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(strip_nulls(Value::Object(map)))
            .context("Failed to deserialize model")
    }
}

impl<T> Model for T where T: Serialize + DeserializeOwned + Validate {}

// `null` members decode like absent keys.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Full response of an API call: transport headers, HTTP status and the
/// decoded body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<B> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<B>,
}

impl<B> ApiResponse<B> {
    pub fn new(headers: HashMap<String, String>, status_code: i32, body: B) -> Self {
        Self {
            headers: Some(headers),
            status_code: Some(status_code),
            body: Some(body),
        }
    }
}

// All three parts are required, unlike the optional fields of body messages.
impl<B: Validate> Validate for ApiResponse<B> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.headers.is_none() {
            errors.add("headers", ValidationError::new("required"));
        }
        if self.status_code.is_none() {
            errors.add("statusCode", ValidationError::new("required"));
        }
        if self.body.is_none() {
            errors.add("body", ValidationError::new("required"));
        }

        let result = if errors.is_empty() { Ok(()) } else { Err(errors) };
        match &self.body {
            Some(body) => ValidationErrors::merge(result, "body", body.validate()),
            None => result,
        }
    }
}
