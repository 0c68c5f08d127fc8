//! Comparison Tools
//!
//! Price one item, compare two, classify a price gap, and list units.

use serde::Serialize;

use crate::models::{Item, NamedItem};
use crate::pricing::{
    self, classify_savings, round_to_precision, Comparison, SavingsAnalysis, UnitCategory,
    UnitType, Verdict, COMPARISON_DECIMALS,
};

/// Response for price_per_unit
#[derive(Debug, Serialize)]
pub struct PricePerUnitResponse {
    pub unit_type: UnitType,
    pub category: UnitCategory,
    pub canonical_unit: &'static str,
    pub total_amount: f64,
    pub effective_price: f64,
    pub price_per_unit: f64,
    pub price_per_unit_rounded: f64,
}

/// Response for compare_items
#[derive(Debug, Serialize)]
pub struct CompareItemsResponse {
    pub first_name: String,
    pub second_name: String,
    pub cheaper: Option<String>,
    #[serde(flatten)]
    pub comparison: Comparison,
    pub savings_color: Option<&'static str>,
    pub message: Vec<String>,
}

/// One row of the conversion table
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub unit: &'static str,
    pub category: UnitCategory,
    pub canonical_unit: &'static str,
    pub factor: f64,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitSummary>,
    pub total: usize,
}

/// Price a single item per canonical unit
pub fn price_per_unit(item: &Item) -> Result<PricePerUnitResponse, String> {
    let unit = UnitType::parse(&item.unit_type).map_err(|e| e.to_string())?;
    let price = pricing::calculate_price_per_unit(item).map_err(|e| e.to_string())?;
    let total_amount = pricing::total_canonical_amount(item).map_err(|e| e.to_string())?;
    let category = unit.category();

    Ok(PricePerUnitResponse {
        unit_type: unit,
        category,
        canonical_unit: category.canonical_unit(),
        total_amount,
        effective_price: item.effective_price(),
        price_per_unit: price,
        price_per_unit_rounded: round_to_precision(price, COMPARISON_DECIMALS),
    })
}

/// Result text lines for a finished comparison
pub fn render_message(first: &str, second: &str, comparison: &Comparison) -> Vec<String> {
    let unit = comparison.canonical_unit;
    let first_price = comparison.first_price_per_unit;
    let second_price = comparison.second_price_per_unit;

    let (cheaper, cheaper_price, dearer, dearer_price) = match comparison.verdict {
        Verdict::FirstCheaper => (first, first_price, second, second_price),
        Verdict::SecondCheaper => (second, second_price, first, first_price),
        Verdict::SamePrice => {
            return vec![
                format!("{} and {} have the same price.", first, second),
                format!("Both cost ${} per {}.", first_price, unit),
            ];
        }
    };

    let mut lines = vec![
        format!("{} is cheaper than {}.", cheaper, dearer),
        format!("{} costs ${} per {}.", cheaper, cheaper_price, unit),
        format!("{} costs ${} per {}.", dearer, dearer_price, unit),
    ];
    if let Some(savings) = &comparison.savings {
        lines.push(savings.tier.message(cheaper));
    }
    lines
}

/// Compare two named items
pub fn compare_items(first: &NamedItem, second: &NamedItem) -> Result<CompareItemsResponse, String> {
    let comparison = pricing::compare_items(&first.item, &second.item).map_err(|e| e.to_string())?;
    let message = render_message(&first.name, &second.name, &comparison);

    let cheaper = match comparison.verdict {
        Verdict::FirstCheaper => Some(first.name.clone()),
        Verdict::SecondCheaper => Some(second.name.clone()),
        Verdict::SamePrice => None,
    };
    let savings_color = comparison.savings.as_ref().map(|s| s.tier.color_hint());

    Ok(CompareItemsResponse {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        cheaper,
        comparison,
        savings_color,
        message,
    })
}

/// Classify the gap between two per-unit prices
pub fn savings_between(higher_price: f64, lower_price: f64) -> Result<SavingsAnalysis, String> {
    if !higher_price.is_finite() || !lower_price.is_finite() {
        return Err("prices must be finite numbers".to_string());
    }
    if higher_price < 0.0 || lower_price < 0.0 {
        return Err("prices cannot be negative".to_string());
    }
    Ok(classify_savings(higher_price, lower_price))
}

/// List every recognized unit with its conversion factor
pub fn list_units() -> ListUnitsResponse {
    let units: Vec<UnitSummary> = UnitType::ALL
        .iter()
        .map(|u| UnitSummary {
            unit: u.as_str(),
            category: u.category(),
            canonical_unit: u.category().canonical_unit(),
            factor: u.factor(),
        })
        .collect();

    ListUnitsResponse {
        total: units.len(),
        units,
    }
}
