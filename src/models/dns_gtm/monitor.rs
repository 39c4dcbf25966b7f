//! GTM 2.0 health monitors.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::common::{IspCityNode, IspCityNodeDetails};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct MonitorIps {
    #[serde(default)]
    pub ip: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableIspCityNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ips: Option<MonitorIps>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv4IspCityNodes {
    #[serde(default)]
    #[validate(nested)]
    pub ipv4_isp_city_node: Vec<AvailableIspCityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv6IspCityNodes {
    #[serde(default)]
    #[validate(nested)]
    pub ipv6_isp_city_node: Vec<AvailableIspCityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DomainIpv4IspCityNodes {
    #[serde(default)]
    #[validate(nested)]
    pub domain_ipv4_isp_city_node: Vec<AvailableIspCityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DomainIpv6IspCityNodes {
    #[serde(default)]
    #[validate(nested)]
    pub domain_ipv6_isp_city_node: Vec<AvailableIspCityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddDnsGtmMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_extend_info: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub isp_city_node: Vec<IspCityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddDnsGtmMonitorResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_config_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsGtmMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_extend_info: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub isp_city_node: Vec<IspCityNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsGtmMonitorResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmMonitorConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_config_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmMonitorConfigResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_extend_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub isp_city_nodes: Option<IspCityNodeDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmMonitorAvailableConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmMonitorAvailableConfigResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ipv4_isp_city_nodes: Option<Ipv4IspCityNodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ipv6_isp_city_nodes: Option<Ipv6IspCityNodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub domain_ipv4_isp_city_nodes: Option<DomainIpv4IspCityNodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub domain_ipv6_isp_city_nodes: Option<DomainIpv6IspCityNodes>,
}

/// Turns a monitor `OPEN` or `CLOSE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SetDnsGtmMonitorStatusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_config_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SetDnsGtmMonitorStatusResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
