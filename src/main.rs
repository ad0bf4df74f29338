//! Health Calculator
//!
//! An MCP server for BMI, daily calorie, and food nutrient calculations.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use healthcalc::build_info;
use healthcalc::config::Config;
use healthcalc::mcp::HealthCalcService;
use healthcalc::tools::status::StatusTracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("healthcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    eprintln!("Nutrient endpoint: {}", config.nutrient_api_url);
    eprintln!("Lookup timeout: {}s", config.lookup_timeout.as_secs());

    let food_source = config.food_source()?;
    let service = HealthCalcService::new(
        StatusTracker::new(config.nutrient_api_url.clone()),
        Arc::new(food_source),
    );

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
