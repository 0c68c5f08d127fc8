//! Unit Price Comparator Library
//!
//! Per-unit price calculation and two-item comparison.

pub mod mcp;
pub mod models;
pub mod pricing;
pub mod tools;
