use alidns::planner::Planner;
use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let plan_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "plan.yaml".to_string());

    let planner = Planner::new(&plan_file)?;
    for request in planner.render_all()? {
        println!("{}", request);
    }
    Ok(())
}
