//! Two-item comparison
//!
//! Checks that both items measure the same kind of thing, prices each per
//! canonical unit, and decides the cheaper one on prices rounded to
//! [`COMPARISON_DECIMALS`] places.

use serde::{Deserialize, Serialize};

use crate::models::Item;

use super::calculator::calculate_price_per_unit;
use super::error::{PricingError, PricingResult};
use super::savings::{classify_savings, SavingsAnalysis};
use super::units::{categorize_unit, UnitCategory};

/// Decimal places kept before prices are compared
pub const COMPARISON_DECIMALS: usize = 4;

/// Which item is cheaper per unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    FirstCheaper,
    SecondCheaper,
    SamePrice,
}

/// Outcome of comparing two items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub category: UnitCategory,
    pub canonical_unit: &'static str,
    /// Rounded to `COMPARISON_DECIMALS`
    pub first_price_per_unit: f64,
    /// Rounded to `COMPARISON_DECIMALS`
    pub second_price_per_unit: f64,
    pub verdict: Verdict,
    /// Absent when both items cost the same
    pub savings: Option<SavingsAnalysis>,
}

/// Digits needed to write any finite f64 exactly in fixed notation
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to `decimals` places on the exact decimal value of `value`, ties
/// away from zero
///
/// Scaling by a power of ten first would round twice; 0.35 / 1000 is stored
/// just below 0.00035 and must come out as 0.0003, not 0.0004.
pub fn round_to_precision(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let decimals = decimals.min(fraction.len());

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();

    if fraction.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut text: String = digits[..split].iter().map(|&b| b as char).collect();
    if decimals > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|&b| b as char));
    }

    match text.parse::<f64>() {
        Ok(rounded) => rounded.copysign(value),
        Err(_) => value,
    }
}

/// Fail with `MismatchedCategory` unless both units share a category
pub fn ensure_comparable(first: &Item, second: &Item) -> PricingResult<UnitCategory> {
    let first_category = categorize_unit(&first.unit_type)?;
    let second_category = categorize_unit(&second.unit_type)?;

    if first_category != second_category {
        tracing::warn!(
            first_unit = %first.unit_type,
            second_unit = %second.unit_type,
            "Rejected comparison across unit categories"
        );
        return Err(PricingError::MismatchedCategory {
            first: first_category,
            second: second_category,
        });
    }

    Ok(first_category)
}

/// Compare two items per canonical unit
pub fn compare_items(first: &Item, second: &Item) -> PricingResult<Comparison> {
    let category = ensure_comparable(first, second)?;

    let first_price = round_to_precision(calculate_price_per_unit(first)?, COMPARISON_DECIMALS);
    let second_price = round_to_precision(calculate_price_per_unit(second)?, COMPARISON_DECIMALS);

    let (verdict, savings) = if first_price < second_price {
        (Verdict::FirstCheaper, Some(classify_savings(second_price, first_price)))
    } else if first_price > second_price {
        (Verdict::SecondCheaper, Some(classify_savings(first_price, second_price)))
    } else {
        (Verdict::SamePrice, None)
    };

    tracing::debug!(?verdict, first_price, second_price, "Compared items");

    Ok(Comparison {
        category,
        canonical_unit: category.canonical_unit(),
        first_price_per_unit: first_price,
        second_price_per_unit: second_price,
        verdict,
        savings,
    })
}
