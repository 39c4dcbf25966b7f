use std::fs;
use tempfile::NamedTempFile;

use crate::config::{load_plan, EndpointType, Plan};

const PLAN: &str = r#"
client:
  region_id: "cn-hangzhou"
  endpoint_type: regional
  network: vpc
requests:
  - action: "AddDomainRecord"
    params:
      DomainName: "example.com"
      RR: "www"
      Type: "A"
      Value: "192.0.2.1"
      TTL: 600
  - action: "DescribeDomains"
"#;

// Helper function to write a plan file
fn write_plan(contents: &str) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, contents).unwrap();
    temp_file
}

#[test]
fn test_plan_deserialization() {
    let plan: Plan = serde_yaml::from_str(PLAN).unwrap();

    assert_eq!(plan.client.region_id, "cn-hangzhou");
    assert_eq!(plan.client.endpoint_type, EndpointType::Regional);
    assert_eq!(plan.client.network.as_deref(), Some("vpc"));
    assert_eq!(plan.client.endpoint, None);
    assert_eq!(plan.requests.len(), 2);
    assert_eq!(plan.requests[0].action, "AddDomainRecord");
    assert_eq!(plan.requests[0].params["TTL"], 600);
    assert!(plan.requests[1].params.is_empty());
}

#[test]
fn test_load_plan() {
    let file = write_plan(PLAN);
    let plan = load_plan(file.path().to_str().unwrap()).unwrap();
    assert_eq!(plan.requests.len(), 2);
}

#[test]
fn test_endpoint_type_defaults_to_central() {
    let plan: Plan = serde_yaml::from_str(
        r#"
client:
  region_id: "cn-shanghai"
requests:
  - action: "DescribeDomains"
"#,
    )
    .unwrap();
    assert_eq!(plan.client.endpoint_type, EndpointType::Central);
}

#[test]
fn test_invalid_plans() {
    let missing_client = write_plan(
        r#"
requests:
  - action: "DescribeDomains"
"#,
    );
    assert!(load_plan(missing_client.path().to_str().unwrap()).is_err());

    let no_requests = write_plan(
        r#"
client:
  region_id: "cn-hangzhou"
requests: []
"#,
    );
    assert!(load_plan(no_requests.path().to_str().unwrap()).is_err());

    let empty_region = write_plan(
        r#"
client:
  region_id: ""
requests:
  - action: "DescribeDomains"
"#,
    );
    assert!(load_plan(empty_region.path().to_str().unwrap()).is_err());

    let empty_action = write_plan(
        r#"
client:
  region_id: "cn-hangzhou"
requests:
  - action: ""
"#,
    );
    assert!(load_plan(empty_action.path().to_str().unwrap()).is_err());
}

#[test]
fn test_missing_plan_file() {
    assert!(load_plan("/nonexistent/plan.yaml").is_err());
}
