//! Health Calculator MCP Server Implementation
//!
//! Implements the MCP server with the calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::nutrition::FoodSource;
use crate::tools::calculator::{self, InputError};
use crate::tools::status::StatusTracker;

/// Health Calculator MCP Service
#[derive(Clone)]
pub struct HealthCalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    food_source: Arc<dyn FoodSource>,
    tool_router: ToolRouter<HealthCalcService>,
}

impl HealthCalcService {
    pub fn new(status_tracker: StatusTracker, food_source: Arc<dyn FoodSource>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(status_tracker)),
            food_source,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Person's name
    pub name: String,
    /// Date of birth in ISO format: YYYY-MM-DD
    pub date_of_birth: String,
    /// Sex: male or female
    pub sex: String,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Weight in kilograms (30-300)
    pub weight_kg: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateCaloriesParams {
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Weight in kilograms (30-300)
    pub weight_kg: f64,
    /// Age in whole years (15-100)
    pub age_years: f64,
    /// Sex: male or female
    pub sex: String,
    /// Activity level: sedentary, light, moderate, active, very_active
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    /// Goal: lose, maintain, gain
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_activity_level() -> String { "sedentary".to_string() }
fn default_goal() -> String { "maintain".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupNutrientsParams {
    /// Food name to search for (e.g., "banana", "brown rice")
    pub query: String,
    /// Quantity of the food
    pub amount: f64,
    /// Unit for the quantity: g, kg, ml, ltr
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String { "g".to_string() }

// ============================================================================
// Helpers
// ============================================================================

fn invalid_params(e: InputError) -> McpError {
    tracing::debug!(error = %e, "Rejected calculator input");
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl HealthCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the health calculator service including build info, nutrient endpoint, and process information")]
    async fn healthcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the BMI, calorie, and nutrient calculators. Call this when unsure which inputs a calculator needs.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculators ---

    #[tool(description = "Calculate BMI, weight category, and ideal weight range. Age is derived from the date of birth.")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let today = chrono::Local::now().date_naive();
        let result = calculator::calculate_bmi(&p.name, &p.date_of_birth, &p.sex, p.height_cm, p.weight_kg, today)
            .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Calculate BMR, maintenance and target daily calories, and macronutrient grams for an activity level and weight goal")]
    fn calculate_calories(&self, Parameters(p): Parameters<CalculateCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_calories(p.height_cm, p.weight_kg, p.age_years, &p.sex, &p.activity_level, &p.goal)
            .map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Look up nutrients for a food by name and scale them to a quantity (g, kg, ml, ltr). Returns status found, not_found, or failed.")]
    async fn lookup_nutrients(&self, Parameters(p): Parameters<LookupNutrientsParams>) -> Result<CallToolResult, McpError> {
        let request = calculator::parse_lookup_request(&p.query, p.amount, &p.unit).map_err(invalid_params)?;
        let response = calculator::lookup_nutrients_tool(self.food_source.as_ref(), &request).await;
        json_result(&response)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HealthCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Health Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Health Calculator - BMI, daily calories, and food nutrient lookup. \
                 Call calculator_instructions for input details. \
                 Calculators: calculate_bmi, calculate_calories, lookup_nutrients. \
                 Status: healthcalc_status."
                    .into(),
            ),
        }
    }
}
