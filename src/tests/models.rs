use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::fmt::Debug;
use validator::{Validate, ValidationErrorsKind};

use super::wire;
use crate::api::operations::{visit_catalog, AddDomainRecordResponse, CatalogVisitor, ACTIONS};
use crate::api::{ApiResponse, Model, Operation};
use crate::models::*;

fn assert_round_trip<M: Model + PartialEq + Debug>(message: &M) {
    let again = M::from_map(message.to_map().unwrap()).unwrap();
    assert_eq!(&again, message);
}

// Decodes a populated fixture and checks it survives another pass through the wire.
fn decode<M: Model + PartialEq + Debug>(fixture: Value) -> M {
    let message = M::from_map(wire(fixture)).unwrap();
    assert_round_trip(&message);
    assert!(message.validate().is_ok());
    message
}

fn describe_records_fixture() -> Value {
    json!({
        "RequestId": "536E9CAD-DB30-4647-AC87-AA5CC38C5382",
        "TotalCount": 2,
        "PageNumber": 1,
        "PageSize": 20,
        "DomainRecords": {
            "Record": [
                {
                    "RecordId": "9999985",
                    "DomainName": "example.com",
                    "RR": "www",
                    "Type": "A",
                    "Value": "192.0.2.1",
                    "TTL": 600,
                    "Line": "default",
                    "Status": "ENABLE",
                    "Locked": false,
                    "Weight": 1
                },
                {
                    "RecordId": "9999986",
                    "DomainName": "example.com",
                    "RR": "@",
                    "Type": "MX",
                    "Value": "mx1.example.com",
                    "TTL": 600,
                    "Priority": 10
                }
            ]
        }
    })
}

#[test]
fn test_describe_domain_records_from_map() {
    let body =
        DescribeDomainRecordsResponseBody::from_map(wire(describe_records_fixture())).unwrap();

    assert_eq!(body.total_count, Some(2));
    let records = body.domain_records.unwrap().record;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rr.as_deref(), Some("www"));
    assert_eq!(records[0].r#type.as_deref(), Some("A"));
    assert_eq!(records[0].ttl, Some(600));
    assert_eq!(records[0].locked, Some(false));
    assert_eq!(records[0].priority, None);
    assert_eq!(records[1].priority, Some(10));
}

#[test]
fn test_describe_domain_records_round_trip() {
    let fixture = describe_records_fixture();
    let body = DescribeDomainRecordsResponseBody::from_map(wire(fixture.clone())).unwrap();

    assert_eq!(Value::Object(body.to_map().unwrap()), fixture);

    let again = DescribeDomainRecordsResponseBody::from_map(body.to_map().unwrap()).unwrap();
    assert_eq!(again, body);
}

#[test]
fn test_unset_fields_are_omitted() {
    let request = AddDomainRecordRequest {
        domain_name: Some("example.com".to_string()),
        rr: Some("www".to_string()),
        r#type: Some("A".to_string()),
        value: Some("192.0.2.1".to_string()),
        ttl: Some(600),
        ..Default::default()
    };

    let map = request.to_map().unwrap();
    assert_eq!(
        Value::Object(map),
        json!({
            "DomainName": "example.com",
            "RR": "www",
            "Type": "A",
            "Value": "192.0.2.1",
            "TTL": 600
        })
    );

    assert!(AddDomainRecordRequest::default().to_map().unwrap().is_empty());
}

#[test]
fn test_lists_are_always_collections() {
    let empty =
        DescribeDomainRecordsResponseBody::from_map(wire(json!({"DomainRecords": {"Record": []}})))
            .unwrap();
    let absent =
        DescribeDomainRecordsResponseBody::from_map(wire(json!({"DomainRecords": {}}))).unwrap();
    let null =
        DescribeDomainRecordsResponseBody::from_map(wire(json!({"DomainRecords": {"Record": null}})))
            .unwrap();

    assert!(absent.domain_records.as_ref().unwrap().record.is_empty());
    assert_eq!(absent, empty);
    assert_eq!(null, empty);
    assert_eq!(
        Value::Object(absent.to_map().unwrap()),
        json!({"DomainRecords": {"Record": []}})
    );

    let request = TagResourcesRequest::from_map(wire(json!({"ResourceType": "DOMAIN"}))).unwrap();
    assert!(request.resource_id.is_empty());
    assert!(request.tag.is_empty());
    assert_eq!(
        Value::Object(request.to_map().unwrap()),
        json!({"ResourceType": "DOMAIN", "ResourceId": [], "Tag": []})
    );
}

#[test]
fn test_null_and_unknown_keys() {
    let body = DescribeDomainRecordInfoResponseBody::from_map(wire(json!({
        "RecordId": "9999985",
        "Remark": null,
        "SomethingNew": {"Nested": true}
    })))
    .unwrap();

    assert_eq!(body.record_id.as_deref(), Some("9999985"));
    assert_eq!(body.remark, None);
    assert_eq!(
        Value::Object(body.to_map().unwrap()),
        json!({"RecordId": "9999985"})
    );
}

#[test]
fn test_irregular_wire_keys() {
    let product = DnsProduct::from_map(wire(json!({
        "InstanceId": "dns-cn-7mz2kpd1001",
        "TTLMinValue": 1,
        "DnsSLBCount": 60,
        "URLForwardCount": 5,
        "DDosDefendFlow": 20,
        "OverseaDDosDefendFlow": 10,
        "ISPLines": true,
        "ISPRegionLines": false
    })))
    .unwrap();

    assert_eq!(product.ttl_min_value, Some(1));
    assert_eq!(product.dns_slb_count, Some(60));
    assert_eq!(product.url_forward_count, Some(5));
    assert_eq!(product.ddos_defend_flow, Some(20));
    assert_eq!(product.oversea_ddos_defend_flow, Some(10));
    assert_eq!(product.isp_lines, Some(true));
    assert_eq!(product.isp_region_lines, Some(false));

    let logs = DescribeDomainLogsRequest {
        start_date: Some("2024-01-01".to_string()),
        end_date: Some("2024-01-31".to_string()),
        ..Default::default()
    };
    assert_eq!(
        Value::Object(logs.to_map().unwrap()),
        json!({"StartDate": "2024-01-01", "endDate": "2024-01-31"})
    );

    let search = DescribeDomainRecordsRequest {
        rr_key_word: Some("www".to_string()),
        ..Default::default()
    };
    assert!(search.to_map().unwrap().contains_key("RRKeyWord"));
}

#[test]
fn test_batch_api_spells_rr_and_ttl_differently() {
    let info = BatchDomainRecordInfo {
        domain: Some("example.com".to_string()),
        rr: Some("www".to_string()),
        ttl: Some(600),
        ..Default::default()
    };
    let record = DomainRecord {
        rr: Some("www".to_string()),
        ttl: Some(600),
        ..Default::default()
    };

    let info_map = info.to_map().unwrap();
    assert!(info_map.contains_key("Rr"));
    assert!(info_map.contains_key("Ttl"));

    let record_map = record.to_map().unwrap();
    assert!(record_map.contains_key("RR"));
    assert!(record_map.contains_key("TTL"));
}

#[test]
fn test_recovery_plan_round_trip() {
    let fixture = json!({
        "RequestId": "6AEC7A64-3CB1-4C49-8B35-0B901F1E26BF",
        "RecoveryPlanId": 10,
        "Name": "switch-to-backup",
        "Status": "UNEXECUTED",
        "FaultAddrPoolNum": 1,
        "FaultAddrPools": {
            "FaultAddrPool": [
                {
                    "AddrPoolId": "hrb4",
                    "AddrPoolName": "primary",
                    "InstanceId": "instance-zwy38wbl05",
                    "Addrs": {
                        "Addr": [
                            {"Id": 739, "Value": "192.0.2.10", "Mode": "SMART"},
                            {"Id": 740, "Value": "192.0.2.11", "Mode": "OFFLINE"}
                        ]
                    }
                }
            ]
        }
    });

    let body = DescribeGtmRecoveryPlanResponseBody::from_map(wire(fixture.clone())).unwrap();
    let pools = &body.fault_addr_pools.as_ref().unwrap().fault_addr_pool;
    let addrs = &pools[0].addrs.as_ref().unwrap().addr;
    assert_eq!(addrs[1].mode.as_deref(), Some("OFFLINE"));
    assert_eq!(addrs[1].id, Some(740));

    assert!(body.validate().is_ok());
    assert_eq!(Value::Object(body.to_map().unwrap()), fixture);
}

#[test]
fn test_fault_addr_pool_helpers() {
    let mut request = AddGtmRecoveryPlanRequest {
        name: Some("switch-to-backup".to_string()),
        ..Default::default()
    };
    assert!(request.fault_addr_pools().unwrap().is_empty());

    request.set_fault_addr_pools(&["hrb4", "hraa"]).unwrap();
    assert_eq!(request.fault_addr_pool.as_deref(), Some(r#"["hrb4","hraa"]"#));
    assert_eq!(request.fault_addr_pools().unwrap(), vec!["hrb4", "hraa"]);

    let update = UpdateGtmRecoveryPlanRequest {
        fault_addr_pool: Some("not json".to_string()),
        ..Default::default()
    };
    assert!(update.fault_addr_pools().is_err());
}

#[test]
fn test_dns_gtm_access_strategy_weights() {
    let body = DescribeDnsGtmAccessStrategyResponseBody::from_map(wire(json!({
        "StrategyId": "strategy-xx",
        "StrategyMode": "GEO",
        "DefaultAddrPoolType": "IPV4",
        "DefaultLbaStrategy": "RATIO",
        "DefaultAddrPools": {
            "DefaultAddrPool": [
                {"Id": "pool1", "Name": "east", "AddrCount": 2, "LbaWeight": 3},
                {"Id": "pool2", "Name": "west", "AddrCount": 1, "LbaWeight": 1}
            ]
        },
        "Lines": {
            "Line": [{"LineCode": "default", "LineName": "Default", "GroupCode": "DEFAULT"}]
        }
    })))
    .unwrap();

    let pools = body.default_addr_pools.unwrap().default_addr_pool;
    let weights: Vec<_> = pools.iter().map(|p| p.lba_weight).collect();
    assert_eq!(weights, vec![Some(3), Some(1)]);
    assert_eq!(body.failover_addr_pools, None);
}

#[test]
fn test_dns_gtm_instances_list_and_detail_shapes() {
    // Lists embed alert settings as a bare array, detail wraps them.
    let list = DescribeDnsGtmInstancesResponseBody::from_map(wire(json!({
        "TotalItems": 1,
        "GtmInstances": [{
            "InstanceId": "gtm-cn-xxx",
            "Config": {"InstanceName": "web", "AlertConfig": [{"NoticeType": "ADDR_ALERT", "SmsNotice": true}]}
        }]
    })))
    .unwrap();
    let detail = DescribeDnsGtmInstanceResponseBody::from_map(wire(json!({
        "InstanceId": "gtm-cn-xxx",
        "Config": {"InstanceName": "web", "AlertConfig": {"AlertConfig": [{"NoticeType": "ADDR_ALERT", "SmsNotice": true}]}}
    })))
    .unwrap();

    let listed = &list.gtm_instances[0];
    let listed_alerts = &listed.config.as_ref().unwrap().alert_config;
    let detail_alerts = detail.config.unwrap().alert_config.unwrap().alert_config;
    assert_eq!(listed_alerts, &detail_alerts);
    assert_eq!(detail_alerts[0].sms_notice, Some(true));
}

#[test]
fn test_api_response_envelope() {
    let fixture = json!({
        "headers": {"x-acs-request-id": "536E9CAD"},
        "statusCode": 200,
        "body": {"RequestId": "536E9CAD", "RecordId": "9999985"}
    });

    let response = AddDomainRecordResponse::from_map(wire(fixture.clone())).unwrap();
    assert_eq!(response.status_code, Some(200));
    assert_eq!(
        response.body.as_ref().unwrap().record_id.as_deref(),
        Some("9999985")
    );
    assert!(response.validate().is_ok());
    assert_eq!(Value::Object(response.to_map().unwrap()), fixture);

    let built = ApiResponse::new(
        HashMap::new(),
        200,
        AddDomainRecordResponseBody::default(),
    );
    assert!(built.validate().is_ok());
}

#[test]
fn test_api_response_requires_all_parts() {
    let response = AddDomainRecordResponse::from_map(wire(json!({
        "headers": {},
        "body": {"RecordId": "9999985"}
    })))
    .unwrap();

    let errors = response.validate().unwrap_err();
    assert!(errors.errors().contains_key("statusCode"));
    assert!(!errors.errors().contains_key("headers"));

    let empty = AddDomainRecordResponse::default();
    let errors = empty.validate().unwrap_err();
    assert_eq!(errors.errors().len(), 3);
}

#[test]
fn test_tag_requests_carry_plain_lists() {
    let request = UntagResourcesRequest {
        resource_type: Some("DOMAIN".to_string()),
        resource_id: vec!["example.com".to_string(), "example.org".to_string()],
        all: Some(true),
        ..Default::default()
    };

    assert_eq!(
        Value::Object(request.to_map().unwrap()),
        json!({
            "ResourceType": "DOMAIN",
            "ResourceId": ["example.com", "example.org"],
            "TagKey": [],
            "All": true
        })
    );
}

#[test]
fn test_api_response_nests_body_errors() {
    #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize, Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    let response = ApiResponse::new(HashMap::new(), 200, Named::default());
    let errors = response.validate().unwrap_err();
    match errors.errors().get("body") {
        Some(ValidationErrorsKind::Struct(body)) => {
            assert!(body.field_errors().contains_key("name"))
        }
        other => panic!("expected nested body errors, got {:?}", other),
    }

    let mut partial = ApiResponse::new(HashMap::new(), 200, Named::default());
    partial.status_code = None;
    let errors = partial.validate().unwrap_err();
    assert!(errors.errors().contains_key("statusCode"));
    assert!(errors.errors().contains_key("body"));
}

struct RoundTrip {
    checked: usize,
}

impl CatalogVisitor for RoundTrip {
    fn visit<R: Operation>(&mut self) {
        assert_round_trip(&R::default());
        assert_eq!(R::from_map(Map::new()).unwrap(), R::default(), "{}", R::ACTION);

        let body = R::ResponseBody::default();
        assert_round_trip(&body);
        assert_eq!(R::ResponseBody::from_map(Map::new()).unwrap(), body, "{}", R::ACTION);

        assert_round_trip(&ApiResponse::new(HashMap::new(), 200, body));
        self.checked += 1;
    }
}

#[test]
fn test_every_catalog_message_round_trips() {
    let mut visitor = RoundTrip { checked: 0 };
    visit_catalog(&mut visitor);
    assert_eq!(visitor.checked, ACTIONS.len());
}

#[test]
fn test_domains_and_groups_fixtures() {
    let domains: DescribeDomainsResponseBody = decode(json!({
        "RequestId": "A1",
        "TotalCount": 1,
        "PageNumber": 1,
        "PageSize": 20,
        "Domains": {
            "Domain": [{
                "DomainId": "00efd71a-770e-4255-b54e-6fe5659baffe",
                "DomainName": "example.com",
                "AliDomain": true,
                "RecordCount": 3,
                "DnsServers": {"DnsServer": ["dns1.hichina.com", "dns2.hichina.com"]},
                "Tags": {"Tag": [{"Key": "env", "Value": "prod"}]}
            }]
        }
    }));
    let domain = &domains.domains.unwrap().domain[0];
    assert_eq!(domain.dns_servers.as_ref().unwrap().dns_server.len(), 2);
    assert_eq!(domain.tags.as_ref().unwrap().tag[0].key.as_deref(), Some("env"));

    let groups: DescribeDomainGroupsResponseBody = decode(json!({
        "TotalCount": 1,
        "DomainGroups": {"DomainGroup": [{"GroupId": "2223", "GroupName": "shop", "DomainCount": 4}]}
    }));
    assert_eq!(groups.domain_groups.unwrap().domain_group[0].domain_count, Some(4));
}

#[test]
fn test_lines_and_instances_fixtures() {
    let line: DescribeCustomLineResponseBody = decode(json!({
        "Id": 597,
        "Name": "office",
        "DomainName": "example.com",
        "Code": "hra0or",
        "IpSegmentList": [
            {"StartIp": "192.0.2.0", "EndIp": "192.0.2.255"},
            {"StartIp": "198.51.100.0", "EndIp": "198.51.100.127"}
        ]
    }));
    assert_eq!(line.ip_segment_list[1].end_ip.as_deref(), Some("198.51.100.127"));

    let support: DescribeSupportLinesResponseBody = decode(json!({
        "RecordLines": {"RecordLine": [
            {"LineCode": "telecom", "LineName": "China Telecom", "LineDisplayName": "Telecom"},
            {"LineCode": "cn_telecom_shanghai", "FatherCode": "telecom", "LineName": "Shanghai"}
        ]}
    }));
    let lines = support.record_lines.unwrap().record_line;
    assert_eq!(lines[1].father_code.as_deref(), Some("telecom"));

    let products: DescribeDnsProductInstancesResponseBody = decode(json!({
        "TotalCount": 1,
        "DnsProducts": {"DnsProduct": [{
            "InstanceId": "dns-cn-v0h1ldjhfff",
            "VersionCode": "version_personal",
            "EndTimestamp": 1735660800000i64,
            "TTLMinValue": 600,
            "DnsSLBCount": 10,
            "ISPLines": true
        }]}
    }));
    let product = &products.dns_products.unwrap().dns_product[0];
    assert_eq!(product.ttl_min_value, Some(600));
    assert_eq!(product.end_timestamp, Some(1735660800000));
}

#[test]
fn test_weighted_round_robin_fixture() {
    let body: DescribeDnsSlbSubDomainsResponseBody = decode(json!({
        "TotalCount": 1,
        "SlbSubDomains": {"SlbSubDomain": [{
            "SubDomain": "www.example.com",
            "RecordCount": 3,
            "Open": true,
            "Type": "A",
            "LineAlgorithms": {"LineAlgorithm": [{"Line": "default", "Open": true}]}
        }]}
    }));
    let sub = &body.slb_sub_domains.unwrap().slb_sub_domain[0];
    assert_eq!(sub.record_count, Some(3));
    assert_eq!(sub.line_algorithms.as_ref().unwrap().line_algorithm[0].open, Some(true));
}

#[test]
fn test_gtm_fixtures() {
    let strategy: DescribeGtmAccessStrategyResponseBody = decode(json!({
        "StrategyId": "hrb4",
        "StrategyName": "overseas",
        "DefaultAddrPoolId": "hra0",
        "FailoverAddrPoolId": "hra1",
        "AccessMode": "AUTO",
        "Lines": {"Line": [{"LineCode": "os_asia", "LineName": "Asia", "GroupCode": "OVERSEA"}]}
    }));
    assert_eq!(strategy.lines.unwrap().line[0].group_code.as_deref(), Some("OVERSEA"));

    let nodes: DescribeGtmMonitorAvailableConfigResponseBody = decode(json!({
        "IspCityNodes": {"IspCityNode": [
            {"CityCode": "503", "CityName": "Beijing", "IspCode": "465", "DefaultSelected": true}
        ]}
    }));
    assert_eq!(nodes.isp_city_nodes.unwrap().isp_city_node[0].default_selected, Some(true));

    let preview: PreviewGtmRecoveryPlanResponseBody = decode(json!({
        "TotalItems": 1,
        "TotalPages": 1,
        "Previews": {"Preview": [{
            "InstanceId": "instance-zwy38wbl05",
            "Name": "web",
            "SwitchInfos": {"SwitchInfo": [
                {"StrategyName": "default", "Content": "Default pool switches to failover"}
            ]}
        }]}
    }));
    let previews = preview.previews.unwrap().preview;
    assert_eq!(previews[0].switch_infos.as_ref().unwrap().switch_info.len(), 1);
}

#[test]
fn test_dns_gtm_fixtures() {
    let pool: DescribeDnsGtmInstanceAddressPoolResponseBody = decode(json!({
        "AddrPoolId": "pool-895280232254422016",
        "Name": "east",
        "Type": "IPV4",
        "LbaStrategy": "RATIO",
        "AddrCount": 2,
        "Addrs": {"Addr": [
            {"AddrId": 1001, "Addr": "192.0.2.1", "LbaWeight": 3, "Mode": "SMART"},
            {"AddrId": 1002, "Addr": "192.0.2.2", "LbaWeight": 1, "Mode": "ONLINE"}
        ]}
    }));
    let addrs = pool.addrs.unwrap().addr;
    assert_eq!(addrs[0].addr_id, Some(1001));
    assert_eq!(addrs[1].mode.as_deref(), Some("ONLINE"));

    let monitors: DescribeDnsGtmMonitorAvailableConfigResponseBody = decode(json!({
        "Ipv4IspCityNodes": {"Ipv4IspCityNode": [{
            "CityName": "Qingdao",
            "IspName": "Alibaba",
            "DefaultSelected": false,
            "Ips": {"Ip": ["203.0.113.5", "203.0.113.6"]}
        }]}
    }));
    let node = &monitors.ipv4_isp_city_nodes.unwrap().ipv4_isp_city_node[0];
    assert_eq!(node.ips.as_ref().unwrap().ip.len(), 2);
    assert!(monitors.ipv6_isp_city_nodes.is_none());

    let attributes: DescribeDnsGtmAddressPoolAvailableConfigResponseBody = decode(json!({
        "AttributeInfos": {"AttributeInfo": [
            {"LineCode": "aliyun_r_cn-beijing", "LineName": "Beijing", "GroupCode": "ALIYUN"}
        ]}
    }));
    assert_eq!(attributes.attribute_infos.unwrap().attribute_info.len(), 1);
}

#[test]
fn test_batch_and_tag_fixtures() {
    let details: DescribeBatchResultDetailResponseBody = decode(json!({
        "TotalCount": 1,
        "BatchResultDetails": {"BatchResultDetail": [{
            "Domain": "example.com",
            "Type": "A",
            "Rr": "www",
            "Value": "192.0.2.1",
            "Ttl": "600",
            "Status": false,
            "Reason": "record exists",
            "BatchType": "RR_ADD"
        }]}
    }));
    let detail = &details.batch_result_details.unwrap().batch_result_detail[0];
    assert_eq!(detail.ttl.as_deref(), Some("600"));
    assert_eq!(detail.status, Some(false));

    let request: OperateBatchDomainRequest = decode(json!({
        "Type": "RR_ADD",
        "DomainRecordInfo": [
            {"Domain": "example.com", "Type": "A", "Rr": "www", "Value": "192.0.2.1", "Ttl": 600}
        ]
    }));
    assert_eq!(request.domain_record_info[0].ttl, Some(600));

    let listed: ListTagResourcesResponseBody = decode(json!({
        "NextToken": "4698691",
        "TagResources": [
            {"ResourceType": "DOMAIN", "ResourceId": "example.com", "TagKey": "env", "TagValue": "prod"}
        ]
    }));
    assert_eq!(listed.tag_resources[0].tag_value.as_deref(), Some("prod"));

    let tags: DescribeTagsResponseBody = decode(json!({
        "TotalCount": 1,
        "Tags": [{"Key": "env", "Values": ["prod", "staging"]}]
    }));
    assert_eq!(tags.tags[0].values, vec!["prod", "staging"]);
}
