use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointType {
    #[default]
    Central,
    Regional,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    #[validate(length(min = 1, message = "Region ID cannot be empty"))]
    pub region_id: String,

    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub endpoint_type: EndpointType,

    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlannedRequest {
    #[validate(length(min = 1, message = "Action cannot be empty"))]
    pub action: String,

    #[serde(default)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Plan {
    #[validate(nested)]
    pub client: ClientConfig,

    #[validate(length(min = 1, message = "At least one request is required"), nested)]
    pub requests: Vec<PlannedRequest>,
}
