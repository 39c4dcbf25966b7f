pub mod models;

use anyhow::{Context, Result};
use log::info;
use std::{fs::File, io::Read};
use validator::Validate;

pub use models::{ClientConfig, EndpointType, Plan, PlannedRequest};

pub fn load_plan(plan_file: &str) -> Result<Plan> {
    let mut file = File::open(plan_file)
        .with_context(|| format!("Failed to open plan file: {}", plan_file))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read plan file: {}", plan_file))?;

    let plan: Plan = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse plan file: {}", plan_file))?;
    plan.validate()
        .with_context(|| format!("Invalid plan file: {}", plan_file))?;

    info!(
        "Loaded {} request(s) for region {}",
        plan.requests.len(),
        plan.client.region_id
    );
    Ok(plan)
}
