//! GTM 2.0 access strategies.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmStrategyPool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lba_weight: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmStrategyLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmStrategyLines {
    #[serde(default)]
    #[validate(nested)]
    pub line: Vec<DnsGtmStrategyLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmStrategyAddrPool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lba_weight: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmEffectiveAddrPools {
    #[serde(default)]
    #[validate(nested)]
    pub effective_addr_pool: Vec<DnsGtmStrategyAddrPool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmDefaultAddrPools {
    #[serde(default)]
    #[validate(nested)]
    pub default_addr_pool: Vec<DnsGtmStrategyAddrPool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmFailoverAddrPools {
    #[serde(default)]
    #[validate(nested)]
    pub failover_addr_pool: Vec<DnsGtmStrategyAddrPool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAccessStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_addr_pool_group_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub lines: Option<DnsGtmStrategyLines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub effective_addr_pools: Option<DnsGtmEffectiveAddrPools>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAccessStrategies {
    #[serde(default)]
    #[validate(nested)]
    pub strategy: Vec<DnsGtmAccessStrategy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAvailablePool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv4AddrPools {
    #[serde(default)]
    #[validate(nested)]
    pub ipv4_addr_pool: Vec<DnsGtmAvailablePool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Ipv6AddrPools {
    #[serde(default)]
    #[validate(nested)]
    pub ipv6_addr_pool: Vec<DnsGtmAvailablePool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DomainAddrPools {
    #[serde(default)]
    #[validate(nested)]
    pub domain_addr_pool: Vec<DnsGtmAvailablePool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAvailableLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DnsGtmAvailableLines {
    #[serde(default)]
    #[validate(nested)]
    pub line: Vec<DnsGtmAvailableLine>,
}

/// Creates a strategy. `Lines` is a JSON array of line codes carried as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddDnsGtmAccessStrategyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_min_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_max_return_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_latency_optimization: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub default_addr_pool: Vec<DnsGtmStrategyPool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_min_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_max_return_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_latency_optimization: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub failover_addr_pool: Vec<DnsGtmStrategyPool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct AddDnsGtmAccessStrategyResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsGtmAccessStrategyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_min_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_max_return_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_latency_optimization: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub default_addr_pool: Vec<DnsGtmStrategyPool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_min_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_max_return_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_latency_optimization: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub failover_addr_pool: Vec<DnsGtmStrategyPool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDnsGtmAccessStrategyResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDnsGtmAccessStrategyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDnsGtmAccessStrategyResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmAccessStrategiesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmAccessStrategiesResponseBody {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub strategies: Option<DnsGtmAccessStrategies>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmAccessStrategyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmAccessStrategyResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_addr_pool_group_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_min_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_max_return_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_latency_optimization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_addr_pool_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_addr_pool_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_lba_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_min_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_max_return_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_latency_optimization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_available_addr_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_addr_pool_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub lines: Option<DnsGtmStrategyLines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub default_addr_pools: Option<DnsGtmDefaultAddrPools>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub failover_addr_pools: Option<DnsGtmFailoverAddrPools>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmAccessStrategyAvailableConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDnsGtmAccessStrategyAvailableConfigResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_set_default_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ipv4_addr_pools: Option<Ipv4AddrPools>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ipv6_addr_pools: Option<Ipv6AddrPools>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub domain_addr_pools: Option<DomainAddrPools>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub lines: Option<DnsGtmAvailableLines>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SetDnsGtmAccessModeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct SetDnsGtmAccessModeResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
