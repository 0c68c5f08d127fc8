//! Status Tool
//!
//! Runtime status and usage instructions for the price comparison service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::pricing::UnitType;

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Unit Price Comparison Instructions

This guide explains how to compare two products by price per unit.

## Describing an Item

Every item needs:

| Field | Meaning | Example |
|-------|---------|---------|
| `quantity` | How many packs you buy | 2 |
| `items_per_purchase` | Items in one pack | 6 |
| `weight` | Amount in one item, in `unit_type` | 12 |
| `unit_type` | One of the recognized units (see below) | "fl oz" |
| `price` | Regular price for the purchase | 10.99 |
| `sale_price` | Optional sale price; used instead of `price` when given | 8.99 |

`quantity`, `items_per_purchase`, and `weight` must be greater than 0.
Prices must not be negative. A sale price of 0 is treated as a real price.

## Recognized Units

| Category | Units | Compared per |
|----------|-------|--------------|
| **Volume** | liters, fl oz, gallons, milliliters, quarts, pints | mL |
| **Weight** | grams, kilograms, ounces, half ounces, eighth ounces, pounds | g |
| **Count** | units | unit |

Unit names are case-insensitive. Call `list_units` for conversion factors.

## Comparing

1. Describe both items (each with a `name`).
2. Call `compare_items(first, second)`.
3. Read `verdict`, `cheaper`, and `message`.

Both items must use units from the SAME category. Comparing liters with grams
(or units with either) is rejected.

Per-unit prices are rounded to 4 decimal places before comparing, so two
items that differ only beyond the 4th decimal are reported as the same price.

## Savings Tiers

| Difference | Tier |
|------------|------|
| under 5% | minimal |
| 5% to under 15% | moderate |
| 15% to under 30% | significant |
| 30% and above | major |

## Example

```
compare_items(
  first:  { name: "2L bottle", quantity: 1, items_per_purchase: 1, weight: 2, unit_type: "liters", price: 3.49 },
  second: { name: "16-pack", quantity: 1, items_per_purchase: 16, weight: 20, unit_type: "fl oz", price: 18.28 }
)
```

Result: "2L bottle is cheaper than 16-pack."
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub units_recognized: usize,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub comparisons_served: u64,
}

/// Collects runtime information for the status tool
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    comparisons_served: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            comparisons_served: 0,
        }
    }

    pub fn record_comparison(&mut self) {
        self.comparisons_served += 1;
    }

    pub fn get_status(&self) -> ServiceStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            name: NAME,
            version: VERSION,
            units_recognized: UnitType::ALL.len(),
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            comparisons_served: self.comparisons_served,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
