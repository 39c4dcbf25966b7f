use serde_json::json;
use std::collections::HashSet;

use super::wire;
use crate::api::operations::{self, ACTIONS};
use crate::api::query::{self, API_VERSION};
use crate::api::Operation;
use crate::models::*;

#[test]
fn test_flatten_nested_values() {
    let params = query::flatten(&wire(json!({
        "ResourceType": "DOMAIN",
        "ResourceId": ["example.com", "example.org"],
        "Tag": [{"Key": "env", "Value": "prod"}, {"Key": "team"}],
        "All": true,
        "PageSize": 20,
        "Remark": null,
        "Config": {"Ttl": 60}
    })));

    assert_eq!(params.get("ResourceType").unwrap(), "DOMAIN");
    assert_eq!(params.get("ResourceId.1").unwrap(), "example.com");
    assert_eq!(params.get("ResourceId.2").unwrap(), "example.org");
    assert_eq!(params.get("Tag.1.Key").unwrap(), "env");
    assert_eq!(params.get("Tag.1.Value").unwrap(), "prod");
    assert_eq!(params.get("Tag.2.Key").unwrap(), "team");
    assert!(!params.contains_key("Tag.2.Value"));
    assert_eq!(params.get("All").unwrap(), "true");
    assert_eq!(params.get("PageSize").unwrap(), "20");
    assert_eq!(params.get("Config.Ttl").unwrap(), "60");
    assert!(!params.contains_key("Remark"));
    assert_eq!(params.len(), 9);
}

#[test]
fn test_flatten_empty_list_produces_nothing() {
    let params = query::flatten(&wire(json!({"Tag": []})));
    assert!(params.is_empty());
}

#[test]
fn test_rpc_query_common_parameters() {
    let params = query::rpc_query("DescribeDomains", &wire(json!({"PageNumber": 1})));

    assert_eq!(params.get("Action").unwrap(), "DescribeDomains");
    assert_eq!(params.get("Version").unwrap(), API_VERSION);
    assert_eq!(params.get("Format").unwrap(), "JSON");
    assert_eq!(params.get("PageNumber").unwrap(), "1");
}

#[test]
fn test_catalog_actions_are_unique() {
    let unique: HashSet<_> = ACTIONS.iter().collect();
    assert_eq!(unique.len(), ACTIONS.len());
    assert_eq!(ACTIONS.len(), 96);

    assert!(ACTIONS.contains(&"AddDomainRecord"));
    assert!(ACTIONS.contains(&"ExecuteGtmRecoveryPlan"));
    assert!(ACTIONS.contains(&"DescribeDnsGtmAccessStrategyAvailableConfig"));
    assert!(ACTIONS.contains(&"DescribeGtmAccessStrategyAvailableConfig"));
    assert!(ACTIONS.contains(&"DescribeDnsGtmInstanceSystemCname"));
}

#[test]
fn test_operation_binding() {
    assert_eq!(AddDomainRecordRequest::ACTION, "AddDomainRecord");
    assert_eq!(OperateBatchDomainRequest::ACTION, "OperateBatchDomain");
    assert_eq!(AddDnsGtmAddressPoolRequest::ACTION, "AddDnsGtmAddressPool");
    assert_eq!(SetDnsSlbStatusRequest::ACTION, "SetDNSSLBStatus");
    assert_eq!(UpdateDnsSlbWeightRequest::ACTION, "UpdateDNSSLBWeight");
}

#[test]
fn test_prepare_weighted_round_robin() {
    let prepared = operations::prepare(
        "SetDNSSLBStatus",
        wire(json!({"DomainName": "example.com", "SubDomain": "www.example.com", "Open": true})),
    )
    .unwrap();
    let params = query::rpc_query("SetDNSSLBStatus", &prepared);

    assert_eq!(params.get("Action").unwrap(), "SetDNSSLBStatus");
    assert_eq!(params.get("SubDomain").unwrap(), "www.example.com");
    assert_eq!(params.get("Open").unwrap(), "true");
}

#[test]
fn test_prepare_empty_lists_add_no_parameters() {
    let prepared = operations::prepare("DescribeDomains", wire(json!({"Tag": null}))).unwrap();
    assert_eq!(prepared.get("Tag"), Some(&json!([])));

    let params = query::rpc_query("DescribeDomains", &prepared);
    assert_eq!(params.len(), 3);
}

#[test]
fn test_prepare_normalizes_parameters() {
    let prepared = operations::prepare(
        "AddDomainRecord",
        wire(json!({
            "DomainName": "example.com",
            "RR": "www",
            "Type": "A",
            "Value": "192.0.2.1",
            "TTL": 600,
            "Line": null,
            "NotAParameter": "dropped"
        })),
    )
    .unwrap();

    assert_eq!(
        serde_json::Value::Object(prepared),
        json!({
            "DomainName": "example.com",
            "RR": "www",
            "Type": "A",
            "Value": "192.0.2.1",
            "TTL": 600
        })
    );
}

#[test]
fn test_prepare_nested_request() {
    let prepared = operations::prepare(
        "AddDnsGtmAddressPool",
        wire(json!({
            "InstanceId": "gtm-cn-xxx",
            "Name": "east",
            "Type": "IPV4",
            "LbaStrategy": "RATIO",
            "Addr": [
                {"Addr": "192.0.2.1", "LbaWeight": 3, "Mode": "SMART"},
                {"Addr": "192.0.2.2", "LbaWeight": 1, "Mode": "ONLINE"}
            ],
            "IspCityNode": [{"CityCode": "503", "IspCode": "465"}]
        })),
    )
    .unwrap();
    let params = query::flatten(&prepared);

    assert_eq!(params.get("Addr.1.LbaWeight").unwrap(), "3");
    assert_eq!(params.get("Addr.2.Mode").unwrap(), "ONLINE");
    assert_eq!(params.get("IspCityNode.1.CityCode").unwrap(), "503");
}

#[test]
fn test_prepare_rejects_bad_input() {
    assert!(operations::prepare("AddDnsRecord", wire(json!({}))).is_err());

    let wrong_type = operations::prepare(
        "AddDomainRecord",
        wire(json!({"DomainName": "example.com", "TTL": "ten minutes"})),
    );
    assert!(wrong_type.is_err());
}
