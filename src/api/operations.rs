use anyhow::{anyhow, Context, Result};
use log::debug;
use serde_json::{Map, Value};
use std::fmt::Debug;

use super::models::{ApiResponse, Model};
use crate::models::*;

/// A request message bound to its API action and response body.
pub trait Operation: Model + Default + PartialEq + Debug + Send + Sync {
    const ACTION: &'static str;
    type ResponseBody: Model + Default + PartialEq + Debug + Send;
}

/// Receives every request type of the catalog in turn.
#[cfg(test)]
pub(crate) trait CatalogVisitor {
    fn visit<R: Operation>(&mut self);
}

macro_rules! catalog {
    ($($action:literal => $request:ident, $body:ident, $response:ident;)+) => {
        $(
            impl Operation for $request {
                const ACTION: &'static str = $action;
                type ResponseBody = $body;
            }

            pub type $response = ApiResponse<$body>;
        )+

        /// Every action in the catalog, in declaration order.
        pub const ACTIONS: &[&str] = &[$($action),+];

        /// Decodes `params` as the request of `action`, validates it and
        /// encodes it back into wire form.
        pub fn prepare(action: &str, params: Map<String, Value>) -> Result<Map<String, Value>> {
            match action {
                $($action => prepare_as::<$request>(params),)+
                _ => Err(anyhow!("Unknown action: {}", action)),
            }
        }

        #[cfg(test)]
        pub(crate) fn visit_catalog<V: CatalogVisitor>(visitor: &mut V) {
            $(visitor.visit::<$request>();)+
        }
    };
}

fn prepare_as<R: Operation>(params: Map<String, Value>) -> Result<Map<String, Value>> {
    debug!("Preparing {} with {} parameters", R::ACTION, params.len());
    let request = R::from_map(params)
        .with_context(|| format!("Invalid parameters for {}", R::ACTION))?;
    request
        .validate()
        .with_context(|| format!("Validation failed for {}", R::ACTION))?;
    request.to_map()
}

catalog! {
    "AddDomain" => AddDomainRequest, AddDomainResponseBody, AddDomainResponse;
    "DeleteDomain" => DeleteDomainRequest, DeleteDomainResponseBody, DeleteDomainResponse;
    "DescribeDomains" => DescribeDomainsRequest, DescribeDomainsResponseBody, DescribeDomainsResponse;
    "DescribeDomainInfo" => DescribeDomainInfoRequest, DescribeDomainInfoResponseBody, DescribeDomainInfoResponse;
    "UpdateDomainRemark" => UpdateDomainRemarkRequest, UpdateDomainRemarkResponseBody, UpdateDomainRemarkResponse;
    "ChangeDomainGroup" => ChangeDomainGroupRequest, ChangeDomainGroupResponseBody, ChangeDomainGroupResponse;
    "DescribeDomainNs" => DescribeDomainNsRequest, DescribeDomainNsResponseBody, DescribeDomainNsResponse;
    "DescribeDomainLogs" => DescribeDomainLogsRequest, DescribeDomainLogsResponseBody, DescribeDomainLogsResponse;
    "GetMainDomainName" => GetMainDomainNameRequest, GetMainDomainNameResponseBody, GetMainDomainNameResponse;
    "AddDomainGroup" => AddDomainGroupRequest, AddDomainGroupResponseBody, AddDomainGroupResponse;
    "UpdateDomainGroup" => UpdateDomainGroupRequest, UpdateDomainGroupResponseBody, UpdateDomainGroupResponse;
    "DeleteDomainGroup" => DeleteDomainGroupRequest, DeleteDomainGroupResponseBody, DeleteDomainGroupResponse;
    "DescribeDomainGroups" => DescribeDomainGroupsRequest, DescribeDomainGroupsResponseBody, DescribeDomainGroupsResponse;
    "AddDomainRecord" => AddDomainRecordRequest, AddDomainRecordResponseBody, AddDomainRecordResponse;
    "UpdateDomainRecord" => UpdateDomainRecordRequest, UpdateDomainRecordResponseBody, UpdateDomainRecordResponse;
    "DeleteDomainRecord" => DeleteDomainRecordRequest, DeleteDomainRecordResponseBody, DeleteDomainRecordResponse;
    "UpdateDomainRecordRemark" => UpdateDomainRecordRemarkRequest, UpdateDomainRecordRemarkResponseBody, UpdateDomainRecordRemarkResponse;
    "SetDomainRecordStatus" => SetDomainRecordStatusRequest, SetDomainRecordStatusResponseBody, SetDomainRecordStatusResponse;
    "DescribeDomainRecords" => DescribeDomainRecordsRequest, DescribeDomainRecordsResponseBody, DescribeDomainRecordsResponse;
    "DescribeDomainRecordInfo" => DescribeDomainRecordInfoRequest, DescribeDomainRecordInfoResponseBody, DescribeDomainRecordInfoResponse;
    "DescribeSubDomainRecords" => DescribeSubDomainRecordsRequest, DescribeSubDomainRecordsResponseBody, DescribeSubDomainRecordsResponse;
    "DeleteSubDomainRecords" => DeleteSubDomainRecordsRequest, DeleteSubDomainRecordsResponseBody, DeleteSubDomainRecordsResponse;
    "DescribeRecordLogs" => DescribeRecordLogsRequest, DescribeRecordLogsResponseBody, DescribeRecordLogsResponse;
    "SetDNSSLBStatus" => SetDnsSlbStatusRequest, SetDnsSlbStatusResponseBody, SetDnsSlbStatusResponse;
    "UpdateDNSSLBWeight" => UpdateDnsSlbWeightRequest, UpdateDnsSlbWeightResponseBody, UpdateDnsSlbWeightResponse;
    "DescribeDNSSLBSubDomains" => DescribeDnsSlbSubDomainsRequest, DescribeDnsSlbSubDomainsResponseBody, DescribeDnsSlbSubDomainsResponse;
    "DescribeSupportLines" => DescribeSupportLinesRequest, DescribeSupportLinesResponseBody, DescribeSupportLinesResponse;
    "AddCustomLine" => AddCustomLineRequest, AddCustomLineResponseBody, AddCustomLineResponse;
    "UpdateCustomLine" => UpdateCustomLineRequest, UpdateCustomLineResponseBody, UpdateCustomLineResponse;
    "DeleteCustomLines" => DeleteCustomLinesRequest, DeleteCustomLinesResponseBody, DeleteCustomLinesResponse;
    "DescribeCustomLine" => DescribeCustomLineRequest, DescribeCustomLineResponseBody, DescribeCustomLineResponse;
    "DescribeCustomLines" => DescribeCustomLinesRequest, DescribeCustomLinesResponseBody, DescribeCustomLinesResponse;
    "DescribeDnsProductInstances" => DescribeDnsProductInstancesRequest, DescribeDnsProductInstancesResponseBody, DescribeDnsProductInstancesResponse;
    "DescribeDnsProductInstance" => DescribeDnsProductInstanceRequest, DescribeDnsProductInstanceResponseBody, DescribeDnsProductInstanceResponse;
    "DescribeGtmInstances" => DescribeGtmInstancesRequest, DescribeGtmInstancesResponseBody, DescribeGtmInstancesResponse;
    "DescribeGtmInstance" => DescribeGtmInstanceRequest, DescribeGtmInstanceResponseBody, DescribeGtmInstanceResponse;
    "UpdateGtmInstanceGlobalConfig" => UpdateGtmInstanceGlobalConfigRequest, UpdateGtmInstanceGlobalConfigResponseBody, UpdateGtmInstanceGlobalConfigResponse;
    "DescribeGtmInstanceStatus" => DescribeGtmInstanceStatusRequest, DescribeGtmInstanceStatusResponseBody, DescribeGtmInstanceStatusResponse;
    "DescribeGtmInstanceSystemCname" => DescribeGtmInstanceSystemCnameRequest, DescribeGtmInstanceSystemCnameResponseBody, DescribeGtmInstanceSystemCnameResponse;
    "AddGtmAddressPool" => AddGtmAddressPoolRequest, AddGtmAddressPoolResponseBody, AddGtmAddressPoolResponse;
    "UpdateGtmAddressPool" => UpdateGtmAddressPoolRequest, UpdateGtmAddressPoolResponseBody, UpdateGtmAddressPoolResponse;
    "DeleteGtmAddressPool" => DeleteGtmAddressPoolRequest, DeleteGtmAddressPoolResponseBody, DeleteGtmAddressPoolResponse;
    "DescribeGtmInstanceAddressPools" => DescribeGtmInstanceAddressPoolsRequest, DescribeGtmInstanceAddressPoolsResponseBody, DescribeGtmInstanceAddressPoolsResponse;
    "DescribeGtmInstanceAddressPool" => DescribeGtmInstanceAddressPoolRequest, DescribeGtmInstanceAddressPoolResponseBody, DescribeGtmInstanceAddressPoolResponse;
    "AddGtmAccessStrategy" => AddGtmAccessStrategyRequest, AddGtmAccessStrategyResponseBody, AddGtmAccessStrategyResponse;
    "DeleteGtmAccessStrategy" => DeleteGtmAccessStrategyRequest, DeleteGtmAccessStrategyResponseBody, DeleteGtmAccessStrategyResponse;
    "DescribeGtmAccessStrategies" => DescribeGtmAccessStrategiesRequest, DescribeGtmAccessStrategiesResponseBody, DescribeGtmAccessStrategiesResponse;
    "SetGtmAccessMode" => SetGtmAccessModeRequest, SetGtmAccessModeResponseBody, SetGtmAccessModeResponse;
    "UpdateGtmAccessStrategy" => UpdateGtmAccessStrategyRequest, UpdateGtmAccessStrategyResponseBody, UpdateGtmAccessStrategyResponse;
    "DescribeGtmAccessStrategy" => DescribeGtmAccessStrategyRequest, DescribeGtmAccessStrategyResponseBody, DescribeGtmAccessStrategyResponse;
    "DescribeGtmAccessStrategyAvailableConfig" => DescribeGtmAccessStrategyAvailableConfigRequest, DescribeGtmAccessStrategyAvailableConfigResponseBody, DescribeGtmAccessStrategyAvailableConfigResponse;
    "DescribeGtmMonitorConfig" => DescribeGtmMonitorConfigRequest, DescribeGtmMonitorConfigResponseBody, DescribeGtmMonitorConfigResponse;
    "UpdateGtmMonitor" => UpdateGtmMonitorRequest, UpdateGtmMonitorResponseBody, UpdateGtmMonitorResponse;
    "SetGtmMonitorStatus" => SetGtmMonitorStatusRequest, SetGtmMonitorStatusResponseBody, SetGtmMonitorStatusResponse;
    "DescribeGtmMonitorAvailableConfig" => DescribeGtmMonitorAvailableConfigRequest, DescribeGtmMonitorAvailableConfigResponseBody, DescribeGtmMonitorAvailableConfigResponse;
    "AddGtmRecoveryPlan" => AddGtmRecoveryPlanRequest, AddGtmRecoveryPlanResponseBody, AddGtmRecoveryPlanResponse;
    "UpdateGtmRecoveryPlan" => UpdateGtmRecoveryPlanRequest, UpdateGtmRecoveryPlanResponseBody, UpdateGtmRecoveryPlanResponse;
    "DeleteGtmRecoveryPlan" => DeleteGtmRecoveryPlanRequest, DeleteGtmRecoveryPlanResponseBody, DeleteGtmRecoveryPlanResponse;
    "DescribeGtmRecoveryPlans" => DescribeGtmRecoveryPlansRequest, DescribeGtmRecoveryPlansResponseBody, DescribeGtmRecoveryPlansResponse;
    "DescribeGtmRecoveryPlan" => DescribeGtmRecoveryPlanRequest, DescribeGtmRecoveryPlanResponseBody, DescribeGtmRecoveryPlanResponse;
    "ExecuteGtmRecoveryPlan" => ExecuteGtmRecoveryPlanRequest, ExecuteGtmRecoveryPlanResponseBody, ExecuteGtmRecoveryPlanResponse;
    "RollbackGtmRecoveryPlan" => RollbackGtmRecoveryPlanRequest, RollbackGtmRecoveryPlanResponseBody, RollbackGtmRecoveryPlanResponse;
    "PreviewGtmRecoveryPlan" => PreviewGtmRecoveryPlanRequest, PreviewGtmRecoveryPlanResponseBody, PreviewGtmRecoveryPlanResponse;
    "DescribeGtmRecoveryPlanAvailableConfig" => DescribeGtmRecoveryPlanAvailableConfigRequest, DescribeGtmRecoveryPlanAvailableConfigResponseBody, DescribeGtmRecoveryPlanAvailableConfigResponse;
    "DescribeDnsGtmInstances" => DescribeDnsGtmInstancesRequest, DescribeDnsGtmInstancesResponseBody, DescribeDnsGtmInstancesResponse;
    "DescribeDnsGtmInstance" => DescribeDnsGtmInstanceRequest, DescribeDnsGtmInstanceResponseBody, DescribeDnsGtmInstanceResponse;
    "UpdateDnsGtmInstanceGlobalConfig" => UpdateDnsGtmInstanceGlobalConfigRequest, UpdateDnsGtmInstanceGlobalConfigResponseBody, UpdateDnsGtmInstanceGlobalConfigResponse;
    "SwitchDnsGtmInstanceStrategyMode" => SwitchDnsGtmInstanceStrategyModeRequest, SwitchDnsGtmInstanceStrategyModeResponseBody, SwitchDnsGtmInstanceStrategyModeResponse;
    "DescribeDnsGtmInstanceStatus" => DescribeDnsGtmInstanceStatusRequest, DescribeDnsGtmInstanceStatusResponseBody, DescribeDnsGtmInstanceStatusResponse;
    "DescribeDnsGtmInstanceSystemCname" => DescribeDnsGtmInstanceSystemCnameRequest, DescribeDnsGtmInstanceSystemCnameResponseBody, DescribeDnsGtmInstanceSystemCnameResponse;
    "AddDnsGtmAddressPool" => AddDnsGtmAddressPoolRequest, AddDnsGtmAddressPoolResponseBody, AddDnsGtmAddressPoolResponse;
    "UpdateDnsGtmAddressPool" => UpdateDnsGtmAddressPoolRequest, UpdateDnsGtmAddressPoolResponseBody, UpdateDnsGtmAddressPoolResponse;
    "DeleteDnsGtmAddressPool" => DeleteDnsGtmAddressPoolRequest, DeleteDnsGtmAddressPoolResponseBody, DeleteDnsGtmAddressPoolResponse;
    "DescribeDnsGtmInstanceAddressPools" => DescribeDnsGtmInstanceAddressPoolsRequest, DescribeDnsGtmInstanceAddressPoolsResponseBody, DescribeDnsGtmInstanceAddressPoolsResponse;
    "DescribeDnsGtmInstanceAddressPool" => DescribeDnsGtmInstanceAddressPoolRequest, DescribeDnsGtmInstanceAddressPoolResponseBody, DescribeDnsGtmInstanceAddressPoolResponse;
    "DescribeDnsGtmAddrAttributeInfo" => DescribeDnsGtmAddrAttributeInfoRequest, DescribeDnsGtmAddrAttributeInfoResponseBody, DescribeDnsGtmAddrAttributeInfoResponse;
    "DescribeDnsGtmAddressPoolAvailableConfig" => DescribeDnsGtmAddressPoolAvailableConfigRequest, DescribeDnsGtmAddressPoolAvailableConfigResponseBody, DescribeDnsGtmAddressPoolAvailableConfigResponse;
    "AddDnsGtmAccessStrategy" => AddDnsGtmAccessStrategyRequest, AddDnsGtmAccessStrategyResponseBody, AddDnsGtmAccessStrategyResponse;
    "UpdateDnsGtmAccessStrategy" => UpdateDnsGtmAccessStrategyRequest, UpdateDnsGtmAccessStrategyResponseBody, UpdateDnsGtmAccessStrategyResponse;
    "DeleteDnsGtmAccessStrategy" => DeleteDnsGtmAccessStrategyRequest, DeleteDnsGtmAccessStrategyResponseBody, DeleteDnsGtmAccessStrategyResponse;
    "DescribeDnsGtmAccessStrategies" => DescribeDnsGtmAccessStrategiesRequest, DescribeDnsGtmAccessStrategiesResponseBody, DescribeDnsGtmAccessStrategiesResponse;
    "DescribeDnsGtmAccessStrategy" => DescribeDnsGtmAccessStrategyRequest, DescribeDnsGtmAccessStrategyResponseBody, DescribeDnsGtmAccessStrategyResponse;
    "DescribeDnsGtmAccessStrategyAvailableConfig" => DescribeDnsGtmAccessStrategyAvailableConfigRequest, DescribeDnsGtmAccessStrategyAvailableConfigResponseBody, DescribeDnsGtmAccessStrategyAvailableConfigResponse;
    "SetDnsGtmAccessMode" => SetDnsGtmAccessModeRequest, SetDnsGtmAccessModeResponseBody, SetDnsGtmAccessModeResponse;
    "AddDnsGtmMonitor" => AddDnsGtmMonitorRequest, AddDnsGtmMonitorResponseBody, AddDnsGtmMonitorResponse;
    "UpdateDnsGtmMonitor" => UpdateDnsGtmMonitorRequest, UpdateDnsGtmMonitorResponseBody, UpdateDnsGtmMonitorResponse;
    "DescribeDnsGtmMonitorConfig" => DescribeDnsGtmMonitorConfigRequest, DescribeDnsGtmMonitorConfigResponseBody, DescribeDnsGtmMonitorConfigResponse;
    "DescribeDnsGtmMonitorAvailableConfig" => DescribeDnsGtmMonitorAvailableConfigRequest, DescribeDnsGtmMonitorAvailableConfigResponseBody, DescribeDnsGtmMonitorAvailableConfigResponse;
    "SetDnsGtmMonitorStatus" => SetDnsGtmMonitorStatusRequest, SetDnsGtmMonitorStatusResponseBody, SetDnsGtmMonitorStatusResponse;
    "OperateBatchDomain" => OperateBatchDomainRequest, OperateBatchDomainResponseBody, OperateBatchDomainResponse;
    "DescribeBatchResultCount" => DescribeBatchResultCountRequest, DescribeBatchResultCountResponseBody, DescribeBatchResultCountResponse;
    "DescribeBatchResultDetail" => DescribeBatchResultDetailRequest, DescribeBatchResultDetailResponseBody, DescribeBatchResultDetailResponse;
    "TagResources" => TagResourcesRequest, TagResourcesResponseBody, TagResourcesResponse;
    "UntagResources" => UntagResourcesRequest, UntagResourcesResponseBody, UntagResourcesResponse;
    "ListTagResources" => ListTagResourcesRequest, ListTagResourcesResponseBody, ListTagResourcesResponse;
    "DescribeTags" => DescribeTagsRequest, DescribeTagsResponseBody, DescribeTagsResponse;
}
