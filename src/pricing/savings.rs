//! Savings tier classification
//!
//! Buckets the percentage gap between two per-unit prices.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the Minimal tier, in percent
pub const MINIMAL_BELOW: f64 = 5.0;
/// Upper bound (exclusive) of the Moderate tier, in percent
pub const MODERATE_BELOW: f64 = 15.0;
/// Upper bound (exclusive) of the Significant tier, in percent
pub const SIGNIFICANT_BELOW: f64 = 30.0;

/// How much is saved by picking the cheaper item, ordered smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsTier {
    Minimal,
    Moderate,
    Significant,
    Major,
}

impl SavingsTier {
    /// Tier for a percentage difference
    pub fn from_percent(percent_diff: f64) -> Self {
        if percent_diff < MINIMAL_BELOW {
            SavingsTier::Minimal
        } else if percent_diff < MODERATE_BELOW {
            SavingsTier::Moderate
        } else if percent_diff < SIGNIFICANT_BELOW {
            SavingsTier::Significant
        } else {
            SavingsTier::Major
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SavingsTier::Minimal => "The price difference is very small.",
            SavingsTier::Moderate => "Worth considering if you buy this item often.",
            SavingsTier::Significant => "This is a meaningful price difference!",
            SavingsTier::Major => "This is an excellent value!",
        }
    }

    /// Suggested highlight color for renderers
    pub fn color_hint(&self) -> &'static str {
        match self {
            SavingsTier::Minimal => "#FFB6C1",
            SavingsTier::Moderate => "#98FB98",
            SavingsTier::Significant => "#32CD32",
            SavingsTier::Major => "#008000",
        }
    }

    /// One-sentence verdict naming the cheaper item
    pub fn message(&self, cheaper_item_name: &str) -> String {
        match self {
            SavingsTier::Minimal => format!(
                "Choosing {} saves you a minimal amount - {}",
                cheaper_item_name,
                self.label()
            ),
            SavingsTier::Moderate => format!(
                "Choosing {} offers moderate savings - {}",
                cheaper_item_name,
                self.label()
            ),
            SavingsTier::Significant => format!(
                "Choosing {} provides significant savings - {}",
                cheaper_item_name,
                self.label()
            ),
            SavingsTier::Major => {
                format!("{} offers major savings - {}", cheaper_item_name, self.label())
            }
        }
    }
}

/// Result of classifying a price gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAnalysis {
    pub tier: SavingsTier,
    pub label: String,
    pub percent_diff: f64,
}

/// Classify the gap between a higher and a lower per-unit price
///
/// A zero (or non-positive) higher price, or a "higher" price that is not
/// actually higher, counts as no difference.
pub fn classify_savings(higher_price: f64, lower_price: f64) -> SavingsAnalysis {
    let percent_diff = if higher_price > 0.0 && higher_price > lower_price {
        (higher_price - lower_price) / higher_price * 100.0
    } else {
        0.0
    };

    let tier = SavingsTier::from_percent(percent_diff);
    SavingsAnalysis {
        tier,
        label: tier.label().to_string(),
        percent_diff,
    }
}
