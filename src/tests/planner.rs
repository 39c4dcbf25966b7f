use std::fs;
use tempfile::NamedTempFile;

use crate::planner::Planner;

const PLAN: &str = r#"
client:
  region_id: "cn-hangzhou"
requests:
  - action: "AddDomainRecord"
    params:
      DomainName: "example.com"
      RR: "www"
      Type: "A"
      Value: "192.0.2.1"
      TTL: 600
  - action: "TagResources"
    params:
      ResourceType: "DOMAIN"
      ResourceId: ["example.com"]
      Tag:
        - Key: "env"
          Value: "prod"
"#;

fn planner_from(contents: &str) -> Planner {
    let plan = serde_yaml::from_str(contents).unwrap();
    Planner::from_plan(plan).unwrap()
}

#[test]
fn test_render_all() {
    let rendered = planner_from(PLAN).render_all().unwrap();
    assert_eq!(rendered.len(), 2);

    let record = &rendered[0];
    assert_eq!(record.action, "AddDomainRecord");
    assert_eq!(record.method, "POST");
    assert_eq!(record.endpoint, "alidns.aliyuncs.com");
    assert_eq!(record.params.get("Action").unwrap(), "AddDomainRecord");
    assert_eq!(record.params.get("Version").unwrap(), "2015-01-09");
    assert_eq!(record.params.get("RR").unwrap(), "www");
    assert_eq!(record.params.get("TTL").unwrap(), "600");

    let tags = &rendered[1];
    assert_eq!(tags.params.get("ResourceId.1").unwrap(), "example.com");
    assert_eq!(tags.params.get("Tag.1.Key").unwrap(), "env");
    assert_eq!(tags.params.get("Tag.1.Value").unwrap(), "prod");
}

#[test]
fn test_planner_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, PLAN).unwrap();

    let planner = Planner::new(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(planner.render_all().unwrap().len(), 2);
}

#[test]
fn test_rendered_request_display() {
    let rendered = planner_from(PLAN).render_all().unwrap();
    let text = rendered[0].to_string();

    assert!(text.starts_with("POST https://alidns.aliyuncs.com/\n"));
    assert!(text.contains("  Action=AddDomainRecord\n"));
    assert!(text.contains("  DomainName=example.com\n"));
}

#[test]
fn test_render_stops_at_unknown_action() {
    let planner = planner_from(
        r#"
client:
  region_id: "cn-hangzhou"
requests:
  - action: "DescribeDomains"
  - action: "PurgeEverything"
"#,
    );
    let err = planner.render_all().unwrap_err();
    assert!(err.to_string().contains("PurgeEverything"));
}
