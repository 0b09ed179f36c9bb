//! Canonical in-memory representation of one sale transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sale record.
///
/// Candidates enter the dataset through
/// [`NewSale::validate`](crate::validate::NewSale::validate), which
/// enforces the dataset invariants (`unit_price > 0`, `quantity >= 1`,
/// non-empty product and category) before a record ever reaches the
/// aggregations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Calendar date of the sale (day granularity).
    pub date: NaiveDate,

    /// Display name of the product sold.
    pub product: String,

    /// Grouping key; matched exactly, case-sensitive.
    pub category: String,

    /// Price per unit, strictly positive.
    pub unit_price: f64,

    /// Units sold, at least one.
    pub quantity: u32,
}

impl SaleRecord {
    /// Revenue for this record, recomputed from its source fields on
    /// every call.
    pub fn revenue(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
