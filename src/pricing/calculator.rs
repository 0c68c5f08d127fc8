//! Per-unit price calculation
//!
//! Normalizes an item's total amount into its canonical base unit and divides
//! the effective price by it.

use crate::models::Item;

use super::error::{PricingError, PricingResult};
use super::units::UnitType;

/// Reject negative and non-finite values; zero is checked separately since
/// only the denominator terms must be strictly positive
fn check_non_negative(field: &'static str, value: f64) -> PricingResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PricingError::InvalidQuantity { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> PricingResult<()> {
    check_non_negative(field, value)?;
    if value == 0.0 {
        return Err(PricingError::DegenerateQuantity { field });
    }
    Ok(())
}

/// Total purchased amount in canonical base units (mL, g, or count)
pub fn total_canonical_amount(item: &Item) -> PricingResult<f64> {
    check_positive("quantity", item.quantity)?;
    check_positive("items_per_purchase", item.items_per_purchase)?;
    check_positive("weight", item.weight)?;

    let unit = UnitType::parse(&item.unit_type)?;
    let total = item.quantity * item.items_per_purchase * item.weight * unit.factor();

    // The product of valid terms can still overflow or underflow
    if !total.is_finite() || total == 0.0 {
        return Err(PricingError::OutOfRange {
            what: "total amount",
            value: total,
        });
    }
    Ok(total)
}

/// Price per canonical base unit
///
/// Uses the sale price when one is present (including a sale price of 0).
///
/// # Errors
/// - `InvalidQuantity` for a negative or non-finite numeric field
/// - `DegenerateQuantity` when quantity, pack size, or weight is zero
/// - `UnrecognizedUnit` when the unit type is not in the conversion table
/// - `OutOfRange` when the total amount or the result overflows or underflows
pub fn calculate_price_per_unit(item: &Item) -> PricingResult<f64> {
    check_non_negative("price", item.price)?;
    if let Some(sale_price) = item.sale_price {
        check_non_negative("sale_price", sale_price)?;
    }

    let total = total_canonical_amount(item)?;
    let price = item.effective_price();
    let per_unit = price / total;

    if !per_unit.is_finite() || (per_unit == 0.0 && price > 0.0) {
        return Err(PricingError::OutOfRange {
            what: "price per unit",
            value: per_unit,
        });
    }

    tracing::debug!(
        unit = %item.unit_type,
        total_amount = total,
        price_per_unit = per_unit,
        "Calculated price per unit"
    );

    Ok(per_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_liter_vs_sixteen_pack() {
        let bottle = Item::new(2.0, "liters", 3.49);
        let pack = Item::new(20.0, "fl oz", 18.28).with_items_per_purchase(16.0);

        let bottle_price = calculate_price_per_unit(&bottle).unwrap();
        let pack_price = calculate_price_per_unit(&pack).unwrap();

        assert!((bottle_price - 0.001745).abs() < 0.0001);
        assert!((pack_price - 0.001931).abs() < 0.0001);
        assert!(bottle_price < pack_price);
    }

    #[test]
    fn test_grams_vs_kilograms() {
        let small = Item::new(500.0, "grams", 2.99);
        let large = Item::new(1.0, "kilograms", 5.99);

        assert!((calculate_price_per_unit(&small).unwrap() - 0.00598).abs() < 0.0001);
        assert!((calculate_price_per_unit(&large).unwrap() - 0.00599).abs() < 0.0001);
    }

    #[test]
    fn test_multi_pack_same_total_volume() {
        let two_six_packs = Item::new(12.0, "fl oz", 10.99)
            .with_quantity(2.0)
            .with_items_per_purchase(6.0);
        let twelve_pack = Item::new(12.0, "fl oz", 10.99).with_items_per_purchase(12.0);

        let a = calculate_price_per_unit(&two_six_packs).unwrap();
        let b = calculate_price_per_unit(&twelve_pack).unwrap();
        assert!((a - b).abs() < 0.0001);
    }

    #[test]
    fn test_sale_price_is_used() {
        let on_sale = Item::new(2.0, "liters", 3.49).with_sale_price(2.99);
        let regular = Item::new(2.0, "liters", 3.49);

        assert!(calculate_price_per_unit(&on_sale).unwrap() < calculate_price_per_unit(&regular).unwrap());
    }

    #[test]
    fn test_zero_sale_price_is_honored() {
        let free = Item::new(2.0, "liters", 3.49).with_sale_price(0.0);
        assert_eq!(calculate_price_per_unit(&free).unwrap(), 0.0);
    }

    #[test]
    fn test_small_measurements() {
        let sachets = Item::new(0.1, "grams", 5.99).with_items_per_purchase(100.0);
        let jar = Item::new(10.0, "grams", 0.99);

        assert!((calculate_price_per_unit(&sachets).unwrap() - 0.599).abs() < 0.001);
        assert!((calculate_price_per_unit(&jar).unwrap() - 0.099).abs() < 0.001);
    }

    #[test]
    fn test_gallon_cheaper_than_four_quarts() {
        let gallon = Item::new(1.0, "gallons", 3.99);
        let quarts = Item::new(1.0, "quarts", 4.99).with_items_per_purchase(4.0);

        assert!(calculate_price_per_unit(&gallon).unwrap() < calculate_price_per_unit(&quarts).unwrap());
    }

    #[test]
    fn test_doubling_quantity_halves_price() {
        let single = Item::new(3.0, "pounds", 7.50);
        let double = single.clone().with_quantity(2.0);

        let a = calculate_price_per_unit(&single).unwrap();
        let b = calculate_price_per_unit(&double).unwrap();
        assert!((a / 2.0 - b).abs() < 1e-12);
    }

    #[test]
    fn test_liters_match_milliliters() {
        let liters = Item::new(1.5, "liters", 2.49);
        let ml = Item::new(1500.0, "milliliters", 2.49);

        let a = calculate_price_per_unit(&liters).unwrap();
        let b = calculate_price_per_unit(&ml).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_unit_lookup_ignores_case() {
        let item = Item::new(2.0, "LITERS", 3.49);
        assert!((calculate_price_per_unit(&item).unwrap() - 0.001745).abs() < 0.0001);
    }

    #[test]
    fn test_unrecognized_unit() {
        let item = Item::new(1.0, "cups", 2.0);
        assert_eq!(
            calculate_price_per_unit(&item),
            Err(PricingError::UnrecognizedUnit { unit: "cups".to_string() })
        );
    }

    #[test]
    fn test_zero_quantities_are_degenerate() {
        let zero_weight = Item::new(0.0, "grams", 1.0);
        assert_eq!(
            calculate_price_per_unit(&zero_weight),
            Err(PricingError::DegenerateQuantity { field: "weight" })
        );

        let zero_pack = Item::new(1.0, "grams", 1.0).with_items_per_purchase(0.0);
        assert_eq!(
            calculate_price_per_unit(&zero_pack),
            Err(PricingError::DegenerateQuantity { field: "items_per_purchase" })
        );

        let zero_qty = Item::new(1.0, "grams", 1.0).with_quantity(0.0);
        assert_eq!(
            calculate_price_per_unit(&zero_qty),
            Err(PricingError::DegenerateQuantity { field: "quantity" })
        );
    }

    #[test]
    fn test_negative_inputs_are_invalid() {
        let negative_qty = Item::new(1.0, "grams", 1.0).with_quantity(-2.0);
        assert!(matches!(
            calculate_price_per_unit(&negative_qty),
            Err(PricingError::InvalidQuantity { field: "quantity", .. })
        ));

        let negative_price = Item::new(1.0, "grams", -1.0);
        assert!(matches!(
            calculate_price_per_unit(&negative_price),
            Err(PricingError::InvalidQuantity { field: "price", .. })
        ));

        let negative_sale = Item::new(1.0, "grams", 1.0).with_sale_price(-0.5);
        assert!(matches!(
            calculate_price_per_unit(&negative_sale),
            Err(PricingError::InvalidQuantity { field: "sale_price", .. })
        ));
    }

    #[test]
    fn test_non_finite_inputs_are_invalid() {
        let nan_weight = Item::new(f64::NAN, "grams", 1.0);
        assert!(matches!(
            calculate_price_per_unit(&nan_weight),
            Err(PricingError::InvalidQuantity { field: "weight", .. })
        ));
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let huge = Item::new(1e300, "liters", 5.0).with_quantity(1e300);
        assert!(matches!(
            calculate_price_per_unit(&huge),
            Err(PricingError::OutOfRange { what: "total amount", .. })
        ));
    }

    #[test]
    fn test_underflowing_total_is_rejected() {
        let vanishing = Item::new(1e-200, "grams", 1.0).with_quantity(1e-200);
        assert!(matches!(
            total_canonical_amount(&vanishing),
            Err(PricingError::OutOfRange { what: "total amount", .. })
        ));
    }

    #[test]
    fn test_infinite_price_per_unit_is_rejected() {
        let tiny = Item::new(1e-300, "grams", 1e300);
        assert!(matches!(
            calculate_price_per_unit(&tiny),
            Err(PricingError::OutOfRange { what: "price per unit", .. })
        ));
    }

    #[test]
    fn test_price_per_unit_underflow_is_rejected() {
        let vast = Item::new(1e200, "liters", 1e-100).with_quantity(1e100);
        assert!(matches!(
            calculate_price_per_unit(&vast),
            Err(PricingError::OutOfRange { what: "price per unit", .. })
        ));
    }

    #[test]
    fn test_total_canonical_amount() {
        let pack = Item::new(12.0, "fl oz", 10.99).with_items_per_purchase(12.0);
        let total = total_canonical_amount(&pack).unwrap();
        assert!((total - 144.0 * 29.5735).abs() < 1e-9);
    }
}
