//! Paid DNS product instances.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::common::DnsServers;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_used_count: Option<i64>,
    #[serde(rename = "TTLMinValue", skip_serializing_if = "Option::is_none")]
    pub ttl_min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_domain_level: Option<i64>,
    #[serde(rename = "DnsSLBCount", skip_serializing_if = "Option::is_none")]
    pub dns_slb_count: Option<i64>,
    #[serde(rename = "URLForwardCount", skip_serializing_if = "Option::is_none")]
    pub url_forward_count: Option<i64>,
    #[serde(rename = "DDosDefendFlow", skip_serializing_if = "Option::is_none")]
    pub ddos_defend_flow: Option<i64>,
    #[serde(rename = "DDosDefendQuery", skip_serializing_if = "Option::is_none")]
    pub ddos_defend_query: Option<i64>,
    #[serde(rename = "OverseaDDosDefendFlow", skip_serializing_if = "Option::is_none")]
    pub oversea_ddos_defend_flow: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_engine_lines: Option<bool>,
    #[serde(rename = "ISPLines", skip_serializing_if = "Option::is_none")]
    pub isp_lines: Option<bool>,
    #[serde(rename = "ISPRegionLines", skip_serializing_if = "Option::is_none")]
    pub isp_region_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oversea_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_node_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_frequency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_task_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_black_hole: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_domain_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_domain_used_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renewal: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsProducts {
    #[serde(default)]
    #[validate(nested)]
    pub dns_product: Vec<DnsProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsProductInstancesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsProductInstancesResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub dns_products: Option<DnsProducts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsProductInstanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsProductInstanceResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_used_count: Option<i64>,
    #[serde(rename = "TTLMinValue", skip_serializing_if = "Option::is_none")]
    pub ttl_min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_domain_level: Option<i64>,
    #[serde(rename = "DnsSLBCount", skip_serializing_if = "Option::is_none")]
    pub dns_slb_count: Option<i64>,
    #[serde(rename = "URLForwardCount", skip_serializing_if = "Option::is_none")]
    pub url_forward_count: Option<i64>,
    #[serde(rename = "DDosDefendFlow", skip_serializing_if = "Option::is_none")]
    pub ddos_defend_flow: Option<i64>,
    #[serde(rename = "DDosDefendQuery", skip_serializing_if = "Option::is_none")]
    pub ddos_defend_query: Option<i64>,
    #[serde(rename = "OverseaDDosDefendFlow", skip_serializing_if = "Option::is_none")]
    pub oversea_ddos_defend_flow: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_engine_lines: Option<bool>,
    #[serde(rename = "ISPLines", skip_serializing_if = "Option::is_none")]
    pub isp_lines: Option<bool>,
    #[serde(rename = "ISPRegionLines", skip_serializing_if = "Option::is_none")]
    pub isp_region_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oversea_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_node_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_frequency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_task_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gslb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_black_hole: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_domain_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_domain_used_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_security: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renewal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub dns_servers: Option<DnsServers>,
}
