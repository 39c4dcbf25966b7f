use anyhow::{bail, Result};
use log::debug;

use crate::config::models::{ClientConfig, EndpointType};

const PRODUCT_ID: &str = "alidns";

// Regions whose endpoint does not follow the generic rule.
const ENDPOINT_MAP: &[(&str, &str)] = &[
    ("ap-northeast-2-pop", "alidns.aliyuncs.com"),
    ("cn-beijing-finance-pop", "alidns.aliyuncs.com"),
    ("cn-beijing-gov-1", "alidns.aliyuncs.com"),
    ("cn-hangzhou-finance", "alidns.aliyuncs.com"),
    ("cn-north-2-gov-1", "alidns.aliyuncs.com"),
    ("cn-shanghai-finance-1", "alidns.aliyuncs.com"),
    ("cn-shenzhen-finance-1", "alidns.aliyuncs.com"),
    ("rus-west-1-pop", "alidns.aliyuncs.com"),
];

/// Host name requests for `config` are sent to.
///
/// An explicit endpoint wins, then the fixed region map, then the rule
/// `alidns[-suffix][-network][.region].aliyuncs.com`.
pub fn resolve(config: &ClientConfig) -> Result<String> {
    if let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.is_empty()) {
        return Ok(endpoint.to_string());
    }

    if let Some((_, endpoint)) = ENDPOINT_MAP
        .iter()
        .find(|(region, _)| *region == config.region_id)
    {
        debug!("Using mapped endpoint for region {}", config.region_id);
        return Ok(endpoint.to_string());
    }

    endpoint_rule(
        config.endpoint_type,
        &config.region_id,
        config.network.as_deref(),
        config.suffix.as_deref(),
    )
}

fn endpoint_rule(
    endpoint_type: EndpointType,
    region_id: &str,
    network: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    let mut host = PRODUCT_ID.to_string();

    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        host.push('-');
        host.push_str(suffix);
    }

    if let Some(network) = network.filter(|n| !n.is_empty() && *n != "public") {
        host.push('-');
        host.push_str(network);
    }

    if endpoint_type == EndpointType::Regional {
        if region_id.is_empty() {
            bail!("RegionId is empty, please set a valid RegionId");
        }
        host.push('.');
        host.push_str(region_id);
    }

    host.push_str(".aliyuncs.com");
    Ok(host)
}
