#![cfg(test)]
//! Live smoke test against a running sales API. Ignored by default;
//! point `SALES_API_URL` at an instance and run with `--ignored`.

use sales_client::{rest::RestSalesClient, source::SalesSource};
use sales_metrics::aggregate::{aggregate_by_category, overall_summary};

#[tokio::test]
#[ignore]
async fn fetches_and_aggregates_live_sales() {
    let Ok(base_url) = std::env::var("SALES_API_URL") else {
        println!("Skipping fetches_and_aggregates_live_sales: SALES_API_URL not set.");
        return;
    };

    let client = RestSalesClient::new(base_url);

    let records = client
        .fetch_sales()
        .await
        .expect("fetch_sales returned an error");
    let summary = overall_summary(&records);
    assert!(summary.total_revenue >= 0.0);

    // The server's rollup and ours must agree on the grand total.
    let analysis = client
        .fetch_category_analysis()
        .await
        .expect("fetch_category_analysis returned an error");
    let server_total: f64 = analysis.iter().map(|c| c.total_revenue).sum();
    let local_total: f64 = aggregate_by_category(&records)
        .iter()
        .map(|c| c.total_revenue)
        .sum();
    assert!((server_total - local_total).abs() <= 1e-6 * server_total.abs().max(1.0));
}
