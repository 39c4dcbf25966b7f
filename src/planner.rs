use anyhow::{Context, Result};
use log::{error, info};
use std::{collections::BTreeMap, fmt};
use validator::Validate;

use crate::api::{endpoint, operations, query};
use crate::config::{self, Plan, PlannedRequest};

const METHOD: &str = "POST";

/// A request ready to be signed and sent by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRequest {
    pub action: String,
    pub method: &'static str,
    pub endpoint: String,
    pub params: BTreeMap<String, String>,
}

impl fmt::Display for RenderedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} https://{}/", self.method, self.endpoint)?;
        for (key, value) in &self.params {
            writeln!(f, "  {}={}", key, value)?;
        }
        Ok(())
    }
}

pub struct Planner {
    plan: Plan,
}

impl Planner {
    pub fn new(plan_file: &str) -> Result<Self> {
        let plan = config::load_plan(plan_file)?;
        Ok(Self { plan })
    }

    pub fn from_plan(plan: Plan) -> Result<Self> {
        plan.validate().context("Invalid plan")?;
        Ok(Self { plan })
    }

    fn render(&self, endpoint: &str, request: &PlannedRequest) -> Result<RenderedRequest> {
        let params = operations::prepare(&request.action, request.params.clone())?;

        Ok(RenderedRequest {
            action: request.action.clone(),
            method: METHOD,
            endpoint: endpoint.to_string(),
            params: query::rpc_query(&request.action, &params),
        })
    }

    pub fn render_all(&self) -> Result<Vec<RenderedRequest>> {
        let endpoint = endpoint::resolve(&self.plan.client)?;
        info!("Endpoint: {}", endpoint);

        let mut rendered = Vec::with_capacity(self.plan.requests.len());
        for request in &self.plan.requests {
            info!("Rendering: {}", request.action);
            match self.render(&endpoint, request) {
                Ok(r) => rendered.push(r),
                Err(e) => {
                    error!("Failed to render {}: {:#}", request.action, e);
                    return Err(e);
                }
            }
        }
        Ok(rendered)
    }
}
