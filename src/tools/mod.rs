//! Unit Price Tools module
//!
//! Tool implementations shared by the MCP server and the CLI utilities.

pub mod comparison;
pub mod self_check;
pub mod status;
