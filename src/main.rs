//! Unit Price Comparator
//!
//! An MCP server for comparing products by price per unit.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use unit_price::mcp::UnitPriceService;
use unit_price::tools::status::{NAME, VERSION};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unit_price=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(name = NAME, version = VERSION, "Starting MCP server on stdio");

    let service = UnitPriceService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
