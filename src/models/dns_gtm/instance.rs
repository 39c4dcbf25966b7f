//! GTM 2.0 instances.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAlertConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_notice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dingtalk_notice: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAlertConfigs {
    #[serde(default)]
    #[validate(nested)]
    pub alert_config: Vec<DnsGtmAlertConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmUsedQuota {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_used_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_used_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_used_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dingtalk_used_count: Option<i32>,
}

/// Instance configuration as embedded in list responses, where alert settings are a bare array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmInstanceListConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_cname_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_rr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_user_domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_group: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub alert_config: Vec<DnsGtmAlertConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmInstanceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_cname_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_rr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_user_domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub alert_config: Option<DnsGtmAlertConfigs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub config: Option<DnsGtmInstanceListConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub used_quota: Option<DnsGtmUsedQuota>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstancesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstancesResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub gtm_instances: Vec<DnsGtmInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstanceResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub config: Option<DnsGtmInstanceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub used_quota: Option<DnsGtmUsedQuota>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsGtmInstanceGlobalConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_cname_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_rr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_user_domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_group: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub alert_config: Vec<DnsGtmAlertConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsGtmInstanceGlobalConfigResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Switches an instance between `GEO` and `LATENCY` strategy modes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SwitchDnsGtmInstanceStrategyModeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SwitchDnsGtmInstanceStrategyModeResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstanceStatusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstanceStatusResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_available_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_not_available_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_pool_group_not_available_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_not_available_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_to_failover_strategy_num: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstanceSystemCnameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmInstanceSystemCnameResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_cname: Option<String>,
}
