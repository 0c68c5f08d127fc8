//! Self-check Tool
//!
//! Runs a fixed set of reference comparisons through the pricing core and
//! reports which ones hold.

use serde::Serialize;

use crate::models::Item;
use crate::pricing::{calculate_price_per_unit, PricingResult};

/// Tolerance used by the reference scenarios
const TOLERANCE: f64 = 0.0001;

/// Outcome of a single scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: &'static str,
    pub first_price_per_unit: Option<f64>,
    pub second_price_per_unit: Option<f64>,
    pub passed: bool,
    pub error: Option<String>,
}

/// Response for run_self_check
#[derive(Debug, Clone, Serialize)]
pub struct SelfCheckReport {
    pub scenarios: Vec<ScenarioResult>,
    pub passed: usize,
    pub total: usize,
    pub all_passed: bool,
}

impl SelfCheckReport {
    pub fn summary(&self) -> String {
        format!("{} out of {} tests passed.", self.passed, self.total)
    }
}

struct Scenario {
    name: &'static str,
    first: Item,
    second: Item,
    check: fn(f64, f64) -> bool,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "2L bottle vs 16-pack of 20 fl oz bottles",
            first: Item::new(2.0, "liters", 3.49),
            second: Item::new(20.0, "fl oz", 18.28).with_items_per_purchase(16.0),
            check: |a, b| {
                (a - 0.001745).abs() < TOLERANCE && (b - 0.001931).abs() < TOLERANCE && a < b
            },
        },
        Scenario {
            name: "500 grams vs 1 kilogram",
            first: Item::new(500.0, "grams", 2.99),
            second: Item::new(1.0, "kilograms", 5.99),
            check: |a, b| (a - 0.00598).abs() < TOLERANCE && (b - 0.00599).abs() < TOLERANCE,
        },
        Scenario {
            name: "Sale price vs regular price",
            first: Item::new(2.0, "liters", 3.49).with_sale_price(2.99),
            second: Item::new(2.0, "liters", 3.49),
            check: |a, b| a < b,
        },
        Scenario {
            name: "Two 6-packs vs one 12-pack",
            first: Item::new(12.0, "fl oz", 10.99)
                .with_quantity(2.0)
                .with_items_per_purchase(6.0),
            second: Item::new(12.0, "fl oz", 10.99).with_items_per_purchase(12.0),
            check: |a, b| (a - b).abs() < TOLERANCE,
        },
        Scenario {
            name: "Very small measurements",
            first: Item::new(0.1, "grams", 5.99).with_items_per_purchase(100.0),
            second: Item::new(10.0, "grams", 0.99),
            check: |a, b| (a - 0.599).abs() < 0.001 && (b - 0.099).abs() < 0.001,
        },
        Scenario {
            name: "1 gallon vs 4 quarts",
            first: Item::new(1.0, "gallons", 3.99),
            second: Item::new(1.0, "quarts", 4.99).with_items_per_purchase(4.0),
            check: |a, b| a < b,
        },
    ]
}

fn run_scenario(scenario: &Scenario) -> ScenarioResult {
    let prices: PricingResult<(f64, f64)> = calculate_price_per_unit(&scenario.first)
        .and_then(|a| calculate_price_per_unit(&scenario.second).map(|b| (a, b)));

    match prices {
        Ok((a, b)) => ScenarioResult {
            name: scenario.name,
            first_price_per_unit: Some(a),
            second_price_per_unit: Some(b),
            passed: (scenario.check)(a, b),
            error: None,
        },
        Err(e) => ScenarioResult {
            name: scenario.name,
            first_price_per_unit: None,
            second_price_per_unit: None,
            passed: false,
            error: Some(e.to_string()),
        },
    }
}

/// Run every reference scenario
pub fn run_self_check() -> SelfCheckReport {
    let results: Vec<ScenarioResult> = scenarios().iter().map(run_scenario).collect();
    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    tracing::info!(passed, total, "Self-check finished");

    SelfCheckReport {
        scenarios: results,
        passed,
        total,
        all_passed: passed == total,
    }
}
