//! MCP server module
//!
//! Exposes the pricing tools over the Model Context Protocol.

mod server;

pub use server::UnitPriceService;
