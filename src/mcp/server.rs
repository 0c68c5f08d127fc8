//! Unit Price MCP Server Implementation
//!
//! Implements the MCP server with all price comparison tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{Item, NamedItem};
use crate::tools::comparison;
use crate::tools::self_check;
use crate::tools::status::StatusTracker;

/// Unit Price MCP Service
#[derive(Clone)]
pub struct UnitPriceService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<UnitPriceService>,
}

impl UnitPriceService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for UnitPriceService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ItemParams {
    /// Display name used in result messages
    #[serde(default = "default_item_name")]
    pub name: String,
    /// Number of packs bought
    pub quantity: f64,
    /// Items in one pack
    pub items_per_purchase: f64,
    /// Amount in one item, measured in unit_type
    pub weight: f64,
    /// Unit name: liters, fl oz, gallons, milliliters, quarts, pints, grams,
    /// kilograms, ounces, half ounces, eighth ounces, pounds, or units
    pub unit_type: String,
    /// Regular price for the purchase
    pub price: f64,
    /// Sale price (optional); replaces price when given
    pub sale_price: Option<f64>,
}

fn default_item_name() -> String { "Item".to_string() }

impl From<ItemParams> for NamedItem {
    fn from(p: ItemParams) -> Self {
        NamedItem {
            name: p.name,
            item: Item {
                quantity: p.quantity,
                items_per_purchase: p.items_per_purchase,
                weight: p.weight,
                unit_type: p.unit_type,
                price: p.price,
                sale_price: p.sale_price,
            },
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PricePerUnitParams {
    /// The item to price
    pub item: ItemParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareItemsParams {
    /// First item
    pub first: ItemParams,
    /// Second item
    pub second: ItemParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClassifySavingsParams {
    /// The more expensive per-unit price
    pub higher_price: f64,
    /// The cheaper per-unit price
    pub lower_price: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UnitPriceService {
    // --- Status ---

    #[tool(description = "Get the current status of the unit price service including version, uptime, and process information")]
    async fn unit_price_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for describing items and comparing them by price per unit. Call this when unsure how to fill in item fields.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Pricing ---

    #[tool(description = "List every recognized unit with its category (volume, weight, count) and conversion factor to mL, g, or unit")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        to_json(&comparison::list_units())
    }

    #[tool(description = "Calculate the price per canonical unit (mL, g, or unit) of a single item. Uses sale_price when given.")]
    fn price_per_unit(&self, Parameters(p): Parameters<PricePerUnitParams>) -> Result<CallToolResult, McpError> {
        let named = NamedItem::from(p.item);
        let result = comparison::price_per_unit(&named.item).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Compare two items by price per unit and report which is cheaper and by how much. Both items must use units of the same category.")]
    async fn compare_items(&self, Parameters(p): Parameters<CompareItemsParams>) -> Result<CallToolResult, McpError> {
        let first = NamedItem::from(p.first);
        let second = NamedItem::from(p.second);
        let result = comparison::compare_items(&first, &second).map_err(|e| McpError::invalid_params(e, None))?;
        self.status_tracker.lock().await.record_comparison();
        to_json(&result)
    }

    #[tool(description = "Classify the percentage gap between two per-unit prices into a savings tier (minimal, moderate, significant, major)")]
    fn classify_savings(&self, Parameters(p): Parameters<ClassifySavingsParams>) -> Result<CallToolResult, McpError> {
        let result = comparison::savings_between(p.higher_price, p.lower_price)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Run the built-in reference comparisons and report which pass")]
    fn run_self_check(&self) -> Result<CallToolResult, McpError> {
        to_json(&self_check::run_self_check())
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UnitPriceService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "unit-price".into(),
                version: crate::tools::status::VERSION.into(),
                title: Some("Unit Price Comparator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Unit Price Comparator - compare two products by price per mL, gram, or unit. \
                 Call usage_instructions first if unsure how to describe items. \
                 Pricing: price_per_unit, compare_items, classify_savings, list_units. \
                 Diagnostics: unit_price_status, run_self_check."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_params_require_pack_counts() {
        let missing = serde_json::json!({
            "name": "Soda",
            "weight": 2,
            "unit_type": "liters",
            "price": 3.49
        });
        let err = serde_json::from_value::<ItemParams>(missing).unwrap_err();
        assert!(err.to_string().contains("quantity"));

        let missing_pack = serde_json::json!({
            "quantity": 1,
            "weight": 2,
            "unit_type": "liters",
            "price": 3.49
        });
        let err = serde_json::from_value::<ItemParams>(missing_pack).unwrap_err();
        assert!(err.to_string().contains("items_per_purchase"));
    }

    #[test]
    fn test_item_params_into_named_item() {
        let params: ItemParams = serde_json::from_value(serde_json::json!({
            "quantity": 2,
            "items_per_purchase": 6,
            "weight": 12,
            "unit_type": "fl oz",
            "price": 10.99
        }))
        .unwrap();

        let named = NamedItem::from(params);
        assert_eq!(named.name, "Item");
        assert_eq!(named.item.quantity, 2.0);
        assert_eq!(named.item.items_per_purchase, 6.0);
        assert_eq!(named.item.sale_price, None);
    }
}
