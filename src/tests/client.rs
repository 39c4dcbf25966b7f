use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use validator::Validate;

use crate::api::{ApiResponse, DnsApiClient, Model, Operation};
use crate::models::*;

// Serves canned responses keyed by action and records every call.
struct FixtureClient {
    responses: HashMap<&'static str, Value>,
    calls: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl FixtureClient {
    fn new(responses: Vec<(&'static str, Value)>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DnsApiClient for FixtureClient {
    async fn call<O>(&self, request: &O) -> Result<ApiResponse<O::ResponseBody>>
    where
        O: Operation,
    {
        let params = request.to_map()?;
        self.calls
            .lock()
            .unwrap()
            .push((O::ACTION.to_string(), params));

        let fixture = self
            .responses
            .get(O::ACTION)
            .cloned()
            .ok_or_else(|| anyhow!("No fixture for {}", O::ACTION))?;
        let map = match fixture {
            Value::Object(map) => map,
            other => bail!("Fixture for {} is not an object: {}", O::ACTION, other),
        };

        let response = ApiResponse::<O::ResponseBody>::from_map(map)?;
        response.validate()?;
        Ok(response)
    }
}

#[tokio::test]
async fn test_call_decodes_typed_body() {
    let client = FixtureClient::new(vec![(
        "DescribeSubDomainRecords",
        json!({
            "headers": {"x-acs-request-id": "A1"},
            "statusCode": 200,
            "body": {
                "RequestId": "A1",
                "TotalCount": 1,
                "DomainRecords": {"Record": [{"RecordId": "42", "RR": "api", "Type": "CNAME"}]}
            }
        }),
    )]);

    let request = DescribeSubDomainRecordsRequest {
        sub_domain: Some("api.example.com".to_string()),
        ..Default::default()
    };
    let response = client.call(&request).await.unwrap();

    let body = response.body.unwrap();
    let records = body.domain_records.unwrap().record;
    assert_eq!(records[0].record_id.as_deref(), Some("42"));
    assert_eq!(records[0].rr.as_deref(), Some("api"));

    let calls = client.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "DescribeSubDomainRecords");
    assert_eq!(calls[0].1["SubDomain"], "api.example.com");
}

#[tokio::test]
async fn test_call_without_fixture() {
    let client = FixtureClient::new(vec![]);
    let result = client.call(&DeleteDomainRequest::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_call_rejects_incomplete_envelope() {
    let client = FixtureClient::new(vec![(
        "ExecuteGtmRecoveryPlan",
        json!({"headers": {}, "body": {"RequestId": "B2"}}),
    )]);

    let request = ExecuteGtmRecoveryPlanRequest {
        recovery_plan_id: Some(10),
        ..Default::default()
    };
    assert!(client.call(&request).await.is_err());
}
