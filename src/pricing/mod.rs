//! Unit price calculation module
//!
//! Normalizes items to canonical units, prices them, and compares them.

pub mod calculator;
pub mod compare;
pub mod error;
pub mod savings;
pub mod units;

pub use calculator::{calculate_price_per_unit, total_canonical_amount};
pub use compare::{
    compare_items, ensure_comparable, round_to_precision, Comparison, Verdict, COMPARISON_DECIMALS,
};
pub use error::{PricingError, PricingResult};
pub use savings::{classify_savings, SavingsAnalysis, SavingsTier};
pub use units::{categorize_unit, conversion_factor, UnitCategory, UnitType};
