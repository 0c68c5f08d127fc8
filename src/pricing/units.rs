//! Unit types and conversion constants
//!
//! Every recognized unit resolves to a factor expressing how many canonical
//! base units (milliliters, grams, or one count) a single unit is worth.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per fluid ounce (US)
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per half ounce
pub const G_PER_HALF_OZ: f64 = 14.1748;
/// Grams per eighth ounce
pub const G_PER_EIGHTH_OZ: f64 = 3.5437;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Normalized to milliliters
    Volume,
    /// Normalized to grams
    Weight,
    /// Discrete items, normalized to one count
    Count,
}

impl UnitCategory {
    /// Label for the canonical base unit, as shown in result text
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "mL",
            UnitCategory::Weight => "g",
            UnitCategory::Count => "unit",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "volume",
            UnitCategory::Weight => "weight",
            UnitCategory::Count => "count",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized purchase unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    #[serde(rename = "liters")]
    Liters,
    #[serde(rename = "fl oz")]
    FluidOunces,
    #[serde(rename = "gallons")]
    Gallons,
    #[serde(rename = "milliliters")]
    Milliliters,
    #[serde(rename = "quarts")]
    Quarts,
    #[serde(rename = "pints")]
    Pints,
    #[serde(rename = "grams")]
    Grams,
    #[serde(rename = "kilograms")]
    Kilograms,
    #[serde(rename = "ounces")]
    Ounces,
    #[serde(rename = "half ounces")]
    HalfOunces,
    #[serde(rename = "eighth ounces")]
    EighthOunces,
    #[serde(rename = "pounds")]
    Pounds,
    #[serde(rename = "units")]
    Units,
}

impl UnitType {
    /// Every recognized unit, volume first, then weight, then count
    pub const ALL: [UnitType; 13] = [
        UnitType::Liters,
        UnitType::FluidOunces,
        UnitType::Gallons,
        UnitType::Milliliters,
        UnitType::Quarts,
        UnitType::Pints,
        UnitType::Grams,
        UnitType::Kilograms,
        UnitType::Ounces,
        UnitType::HalfOunces,
        UnitType::EighthOunces,
        UnitType::Pounds,
        UnitType::Units,
    ];

    /// Resolve a unit name, ignoring case and surrounding whitespace
    pub fn parse(unit: &str) -> PricingResult<Self> {
        let lower = unit.to_lowercase();
        match lower.trim() {
            "liters" => Ok(UnitType::Liters),
            "fl oz" => Ok(UnitType::FluidOunces),
            "gallons" => Ok(UnitType::Gallons),
            "milliliters" => Ok(UnitType::Milliliters),
            "quarts" => Ok(UnitType::Quarts),
            "pints" => Ok(UnitType::Pints),
            "grams" => Ok(UnitType::Grams),
            "kilograms" => Ok(UnitType::Kilograms),
            "ounces" => Ok(UnitType::Ounces),
            "half ounces" => Ok(UnitType::HalfOunces),
            "eighth ounces" => Ok(UnitType::EighthOunces),
            "pounds" => Ok(UnitType::Pounds),
            "units" => Ok(UnitType::Units),
            _ => Err(PricingError::UnrecognizedUnit {
                unit: unit.to_string(),
            }),
        }
    }

    /// Canonical base units per one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            UnitType::Liters => ML_PER_LITER,
            UnitType::FluidOunces => ML_PER_FL_OZ,
            UnitType::Gallons => ML_PER_GALLON,
            UnitType::Milliliters => 1.0,
            UnitType::Quarts => ML_PER_QUART,
            UnitType::Pints => ML_PER_PINT,
            UnitType::Grams => 1.0,
            UnitType::Kilograms => G_PER_KG,
            UnitType::Ounces => G_PER_OZ,
            UnitType::HalfOunces => G_PER_HALF_OZ,
            UnitType::EighthOunces => G_PER_EIGHTH_OZ,
            UnitType::Pounds => G_PER_LB,
            UnitType::Units => 1.0,
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            UnitType::Liters
            | UnitType::FluidOunces
            | UnitType::Gallons
            | UnitType::Milliliters
            | UnitType::Quarts
            | UnitType::Pints => UnitCategory::Volume,
            UnitType::Grams
            | UnitType::Kilograms
            | UnitType::Ounces
            | UnitType::HalfOunces
            | UnitType::EighthOunces
            | UnitType::Pounds => UnitCategory::Weight,
            UnitType::Units => UnitCategory::Count,
        }
    }

    /// The lower-case name used in the conversion table
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Liters => "liters",
            UnitType::FluidOunces => "fl oz",
            UnitType::Gallons => "gallons",
            UnitType::Milliliters => "milliliters",
            UnitType::Quarts => "quarts",
            UnitType::Pints => "pints",
            UnitType::Grams => "grams",
            UnitType::Kilograms => "kilograms",
            UnitType::Ounces => "ounces",
            UnitType::HalfOunces => "half ounces",
            UnitType::EighthOunces => "eighth ounces",
            UnitType::Pounds => "pounds",
            UnitType::Units => "units",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion factor for a unit name
pub fn conversion_factor(unit: &str) -> PricingResult<f64> {
    UnitType::parse(unit).map(|u| u.factor())
}

/// Determine the category of a unit name
pub fn categorize_unit(unit: &str) -> PricingResult<UnitCategory> {
    UnitType::parse(unit).map(|u| u.category())
}
