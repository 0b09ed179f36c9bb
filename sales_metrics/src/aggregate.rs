//! The aggregations the dashboards render: overall summary, per-category
//! rollups, and the daily revenue time series.
//!
//! All functions here are pure over a snapshot of records: they never
//! mutate their input and recompute from scratch on every call. Empty
//! input yields zero/empty sentinels rather than an arithmetic fault, so
//! callers can render "no data" instead of crashing.
//!
//! Grouping is exact-string, case-sensitive. Growth is the only place
//! where sequence order matters; everything else is order-independent.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{
    filter::CategoryFilter,
    record::SaleRecord,
    summary::{CategorySummary, RevenuePoint, SalesSummary},
};

/// Summarizes a plain numeric series (one value per period).
///
/// Growth compares the last element against the first in sequence order.
/// An empty series, or a series whose first value is zero, reports the
/// corresponding sentinel zeroes instead of dividing.
pub fn summarize_values(values: &[f64]) -> SalesSummary {
    let Some((&first, rest)) = values.split_first() else {
        return SalesSummary::default();
    };

    let total: f64 = values.iter().sum();
    let average = total / values.len() as f64;

    let last = rest.last().copied().unwrap_or(first);
    let growth_pct = if first == 0.0 {
        0.0
    } else {
        (last / first - 1.0) * 100.0
    };

    SalesSummary {
        total_revenue: total,
        average_revenue: average,
        growth_pct,
    }
}

/// Overall summary across all records: total revenue, average revenue
/// per record, and growth of the last record's revenue against the first
/// in sequence (insertion) order — no chronological sort is applied.
pub fn overall_summary(records: &[SaleRecord]) -> SalesSummary {
    let revenues: Vec<f64> = records.iter().map(SaleRecord::revenue).collect();
    summarize_values(&revenues)
}

/// Groups records by exact category string, summing revenue and counting
/// sales per group.
///
/// Output is sorted ascending by category name so repeated runs over the
/// same snapshot are directly comparable.
pub fn aggregate_by_category(records: &[SaleRecord]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.category.as_str()).or_default();
        entry.0 += record.revenue();
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(category, (total_revenue, sale_count))| CategorySummary {
            category: category.to_string(),
            total_revenue,
            sale_count,
        })
        .collect()
}

/// Sorted distinct categories, as offered by the dashboard's filter
/// dropdown.
pub fn distinct_categories(records: &[SaleRecord]) -> Vec<String> {
    let mut categories: Vec<String> = records.iter().map(|r| r.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Applies the category filter, preserving relative record order.
///
/// [`CategoryFilter::All`] returns a defensive copy of the whole
/// snapshot; the input is never mutated either way.
pub fn filter_by_category(records: &[SaleRecord], filter: &CategoryFilter) -> Vec<SaleRecord> {
    match filter {
        CategoryFilter::All => records.to_vec(),
        CategoryFilter::Only(category) => records
            .iter()
            .filter(|record| record.category == *category)
            .cloned()
            .collect(),
    }
}

/// Daily revenue time series: records grouped by calendar date, revenue
/// summed per date, output strictly ascending by date with no duplicates.
pub fn time_series_revenue(records: &[SaleRecord]) -> Vec<RevenuePoint> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date).or_default() += record.revenue();
    }

    by_date
        .into_iter()
        .map(|(date, revenue)| RevenuePoint { date, revenue })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: (i32, u32, u32), category: &str, unit_price: f64, quantity: u32) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            product: "Console X".into(),
            category: category.into(),
            unit_price,
            quantity,
        }
    }

    fn worked_example() -> Vec<SaleRecord> {
        vec![
            record((2025, 1, 1), "A", 10.0, 2),
            record((2025, 1, 1), "B", 5.0, 1),
            record((2025, 1, 2), "A", 10.0, 1),
        ]
    }

    #[test]
    fn overall_summary_of_worked_example() {
        let summary = overall_summary(&worked_example());
        assert_eq!(summary.total_revenue, 35.0);
        assert!((summary.average_revenue - 35.0 / 3.0).abs() < 1e-12);
        // last revenue 10, first revenue 20 -> -50%
        assert_eq!(summary.growth_pct, -50.0);
    }

    #[test]
    fn category_rollup_of_worked_example() {
        let rollup = aggregate_by_category(&worked_example());
        assert_eq!(
            rollup,
            vec![
                CategorySummary {
                    category: "A".into(),
                    total_revenue: 30.0,
                    sale_count: 2,
                },
                CategorySummary {
                    category: "B".into(),
                    total_revenue: 5.0,
                    sale_count: 1,
                },
            ]
        );
    }

    #[test]
    fn time_series_of_worked_example() {
        let series = time_series_revenue(&worked_example());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(series[0].revenue, 25.0);
        assert_eq!(series[1].date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(series[1].revenue, 10.0);
    }

    #[test]
    fn empty_dataset_yields_zero_sentinels() {
        let summary = overall_summary(&[]);
        assert_eq!(summary, SalesSummary::default());
        assert!(aggregate_by_category(&[]).is_empty());
        assert!(time_series_revenue(&[]).is_empty());
    }

    #[test]
    fn zero_first_value_yields_zero_growth() {
        let summary = summarize_values(&[0.0, 100.0, 250.0]);
        assert_eq!(summary.growth_pct, 0.0);
        assert_eq!(summary.total_revenue, 350.0);
    }

    #[test]
    fn single_record_growth_is_zero() {
        let summary = overall_summary(&worked_example()[..1]);
        assert_eq!(summary.growth_pct, 0.0);
        assert_eq!(summary.total_revenue, summary.average_revenue);
    }

    #[test]
    fn monthly_series_from_the_console_dashboard() {
        // Jan..Jun totals from the static dashboard.
        let sales = [23000.0, 17100.0, 8500.0, 22300.0, 17645.0, 25000.0];
        let summary = summarize_values(&sales);
        assert_eq!(summary.total_revenue, 113_545.0);
        assert!((summary.growth_pct - (25000.0 / 23000.0 - 1.0) * 100.0).abs() < 1e-12);
    }

    #[test]
    fn filter_only_preserves_relative_order() {
        let records = worked_example();
        let filtered = filter_by_category(&records, &CategoryFilter::Only("A".into()));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0], records[0]);
        assert_eq!(filtered[1], records[2]);
    }

    #[test]
    fn filter_is_case_sensitive_and_exact() {
        let records = worked_example();
        assert!(filter_by_category(&records, &CategoryFilter::Only("a".into())).is_empty());
        assert!(filter_by_category(&records, &CategoryFilter::Only("missing".into())).is_empty());
    }

    #[test]
    fn filter_all_copies_without_touching_the_input() {
        let records = worked_example();
        let mut copy = filter_by_category(&records, &CategoryFilter::All);
        assert_eq!(copy, records);

        copy.pop();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn distinct_categories_are_sorted_and_unique() {
        let categories = distinct_categories(&worked_example());
        assert_eq!(categories, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn rejected_candidate_never_enters_a_snapshot() {
        use crate::validate::NewSale;

        let mut snapshot = worked_example();
        let rejected = NewSale {
            date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            product: "Console X".into(),
            category: "A".into(),
            unit_price: 10.0,
            quantity: 0,
        };
        if let Ok(record) = rejected.validate() {
            snapshot.push(record);
        }

        assert_eq!(overall_summary(&snapshot).total_revenue, 35.0);
    }
}
