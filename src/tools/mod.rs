//! Health Calculator Tools module
//!
//! Tool implementations backing the MCP server.

pub mod calculator;
pub mod status;
