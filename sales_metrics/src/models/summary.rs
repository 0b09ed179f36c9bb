//! Derived summary types produced by the aggregations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for one snapshot of records.
///
/// All fields are zero sentinels for an empty snapshot, so downstream
/// rendering can show "no data" instead of faulting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SalesSummary {
    /// Sum of revenue over the whole snapshot.
    pub total_revenue: f64,

    /// `total_revenue / record count`; 0 when the snapshot is empty.
    pub average_revenue: f64,

    /// Revenue growth of the last record against the first, in percent,
    /// taken in sequence order. 0 when undefined (empty snapshot or a
    /// zero first value).
    pub growth_pct: f64,
}

/// One row of the per-category rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The grouping key.
    pub category: String,

    /// Sum of revenue over records in this category.
    pub total_revenue: f64,

    /// Number of records in this category.
    pub sale_count: u64,
}

/// One bucket of the daily revenue time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenuePoint {
    /// Calendar date of the bucket.
    pub date: NaiveDate,

    /// Revenue summed over all records on that date.
    pub revenue: f64,
}
