//! Item model
//!
//! A purchasable item as entered for a single comparison.

use serde::{Deserialize, Serialize};

/// A purchase: `quantity` packs of `items_per_purchase` sub-items, each
/// measuring `weight` of `unit_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub quantity: f64,
    #[serde(alias = "itemsPerPurchase")]
    pub items_per_purchase: f64,
    pub weight: f64,
    #[serde(alias = "unitType")]
    pub unit_type: String,
    pub price: f64,
    #[serde(default, alias = "salePrice")]
    pub sale_price: Option<f64>,
}

impl Item {
    /// A single purchase of one sub-item at the regular price
    pub fn new(weight: f64, unit_type: impl Into<String>, price: f64) -> Self {
        Self {
            quantity: 1.0,
            items_per_purchase: 1.0,
            weight,
            unit_type: unit_type.into(),
            price,
            sale_price: None,
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_items_per_purchase(mut self, items_per_purchase: f64) -> Self {
        self.items_per_purchase = items_per_purchase;
        self
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// The price actually paid: the sale price when one is given
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

/// An item with the display name the caller shows in results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedItem {
    pub name: String,
    #[serde(flatten)]
    pub item: Item,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price_prefers_sale() {
        let item = Item::new(2.0, "liters", 3.49).with_sale_price(2.99);
        assert_eq!(item.effective_price(), 2.99);
    }

    #[test]
    fn test_effective_price_honors_zero_sale() {
        let item = Item::new(2.0, "liters", 3.49).with_sale_price(0.0);
        assert_eq!(item.effective_price(), 0.0);
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "quantity": 1,
            "itemsPerPurchase": 16,
            "weight": 20,
            "unitType": "fl oz",
            "price": 18.28,
            "salePrice": 15.0
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.items_per_purchase, 16.0);
        assert_eq!(item.unit_type, "fl oz");
        assert_eq!(item.sale_price, Some(15.0));
    }

    #[test]
    fn test_deserialize_named_item_without_sale() {
        let json = r#"{
            "name": "2L bottle",
            "quantity": 1,
            "items_per_purchase": 1,
            "weight": 2,
            "unit_type": "liters",
            "price": 3.49
        }"#;
        let named: NamedItem = serde_json::from_str(json).unwrap();
        assert_eq!(named.name, "2L bottle");
        assert_eq!(named.item, Item::new(2.0, "liters", 3.49));
    }
}
