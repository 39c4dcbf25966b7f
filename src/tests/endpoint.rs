use crate::api::endpoint;
use crate::config::{ClientConfig, EndpointType};

fn client_config(region_id: &str) -> ClientConfig {
    ClientConfig {
        region_id: region_id.to_string(),
        endpoint: None,
        endpoint_type: EndpointType::Central,
        network: None,
        suffix: None,
    }
}

#[test]
fn test_central_endpoint() {
    let config = client_config("cn-hangzhou");
    assert_eq!(endpoint::resolve(&config).unwrap(), "alidns.aliyuncs.com");
}

#[test]
fn test_regional_endpoint() {
    let mut config = client_config("cn-hangzhou");
    config.endpoint_type = EndpointType::Regional;
    assert_eq!(
        endpoint::resolve(&config).unwrap(),
        "alidns.cn-hangzhou.aliyuncs.com"
    );

    config.network = Some("vpc".to_string());
    assert_eq!(
        endpoint::resolve(&config).unwrap(),
        "alidns-vpc.cn-hangzhou.aliyuncs.com"
    );

    config.network = Some("public".to_string());
    assert_eq!(
        endpoint::resolve(&config).unwrap(),
        "alidns.cn-hangzhou.aliyuncs.com"
    );
}

#[test]
fn test_suffix_endpoint() {
    let mut config = client_config("cn-hangzhou");
    config.suffix = Some("share".to_string());
    assert_eq!(endpoint::resolve(&config).unwrap(), "alidns-share.aliyuncs.com");
}

#[test]
fn test_explicit_and_mapped_endpoints() {
    let mut config = client_config("cn-hangzhou-finance");
    config.endpoint_type = EndpointType::Regional;
    assert_eq!(endpoint::resolve(&config).unwrap(), "alidns.aliyuncs.com");

    config.endpoint = Some("dns.internal.example".to_string());
    assert_eq!(endpoint::resolve(&config).unwrap(), "dns.internal.example");
}

#[test]
fn test_regional_endpoint_requires_region() {
    let mut config = client_config("");
    config.endpoint_type = EndpointType::Regional;
    assert!(endpoint::resolve(&config).is_err());

    config.endpoint_type = EndpointType::Central;
    assert!(endpoint::resolve(&config).is_ok());
}
