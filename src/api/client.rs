use super::{models::ApiResponse, operations::Operation};
use anyhow::Result;
use async_trait::async_trait;

/// Transport seam. Implementations sign and send the request, then decode
/// the response into the body type bound to the operation.
#[async_trait]
pub trait DnsApiClient {
    async fn call<O>(&self, request: &O) -> Result<ApiResponse<O::ResponseBody>>
    where
        O: Operation;
}
