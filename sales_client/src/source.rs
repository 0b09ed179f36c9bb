//! Source abstraction over where sale records come from.
//!
//! [`SalesSource`] is the seam between the aggregations and the outside
//! world: the REST client implements it against the remote API, and
//! tests implement it with canned records. The trait is object-safe so a
//! caller can pick its source at runtime (`Box<dyn SalesSource>`).

use async_trait::async_trait;
use sales_metrics::models::{record::SaleRecord, summary::CategorySummary};

use crate::errors::ClientError;

#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Fetches every sale record currently known to the source.
    async fn fetch_sales(&self) -> Result<Vec<SaleRecord>, ClientError>;

    /// Fetches the source's own per-category rollup.
    async fn fetch_category_analysis(&self) -> Result<Vec<CategorySummary>, ClientError>;

    /// Submits one validated record; `Ok(())` means the source accepted it.
    async fn submit_sale(&self, sale: &SaleRecord) -> Result<(), ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use sales_metrics::aggregate::{aggregate_by_category, overall_summary};

    /// Test double holding a fixed snapshot.
    struct StaticSource {
        records: Vec<SaleRecord>,
    }

    #[async_trait]
    impl SalesSource for StaticSource {
        async fn fetch_sales(&self) -> Result<Vec<SaleRecord>, ClientError> {
            Ok(self.records.clone())
        }

        async fn fetch_category_analysis(&self) -> Result<Vec<CategorySummary>, ClientError> {
            Ok(aggregate_by_category(&self.records))
        }

        async fn submit_sale(&self, _sale: &SaleRecord) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn source() -> Box<dyn SalesSource> {
        Box::new(StaticSource {
            records: vec![
                SaleRecord {
                    date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    product: "Console X".into(),
                    category: "A".into(),
                    unit_price: 10.0,
                    quantity: 2,
                },
                SaleRecord {
                    date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    product: "Game Y".into(),
                    category: "B".into(),
                    unit_price: 5.0,
                    quantity: 1,
                },
            ],
        })
    }

    #[tokio::test]
    async fn aggregations_run_over_a_dyn_source() {
        let source = source();

        let records = source.fetch_sales().await.unwrap();
        assert_eq!(overall_summary(&records).total_revenue, 25.0);

        let analysis = source.fetch_category_analysis().await.unwrap();
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].category, "A");
        assert_eq!(analysis[0].total_revenue, 20.0);
    }
}
