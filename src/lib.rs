//! Health Calculator Library
//!
//! BMI, daily calorie, and food nutrient calculations, served over MCP.

pub mod build_info;
pub mod calc;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
