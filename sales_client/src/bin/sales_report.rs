//! Plain-text sales report: one explicit "recompute on demand" pass per
//! tick, over either a TOML sample file or the remote sales API.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use clap::{Args, Parser, Subcommand};

use sales_client::{cache::SnapshotCache, rest::RestSalesClient, source::SalesSource};
use sales_metrics::{
    aggregate::{aggregate_by_category, filter_by_category, overall_summary, time_series_revenue},
    models::{filter::CategoryFilter, record::SaleRecord, summary::CategorySummary},
    samples::load_samples_path,
    validate::NewSale,
};

#[derive(Parser)]
#[command(version, about = "Sales report CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render a report over a snapshot of sales records.
    Report(ReportCmd),
    /// Validate and submit one new sale to the remote API.
    Add(AddCmd),
}

#[derive(Args)]
struct ReportCmd {
    /// Load records from a TOML sample file instead of the remote API.
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    file: Option<String>,

    /// Base URL of the sales API; defaults to $SALES_API_URL.
    #[arg(long)]
    url: Option<String>,

    /// Restrict the daily revenue series to one category.
    #[arg(long)]
    category: Option<String>,

    /// Re-render every N seconds instead of exiting after one pass.
    #[arg(long, value_name = "SECS")]
    watch: Option<u64>,

    /// How long a fetched snapshot stays fresh in watch mode.
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    cache_ttl: u64,
}

#[derive(Args)]
struct AddCmd {
    /// Base URL of the sales API; defaults to $SALES_API_URL.
    #[arg(long)]
    url: Option<String>,

    /// Sale date, `YYYY-MM-DD`.
    #[arg(long)]
    date: NaiveDate,

    #[arg(long)]
    product: String,

    #[arg(long)]
    category: String,

    /// Unit price, must be greater than zero.
    #[arg(long)]
    price: f64,

    /// Units sold, at least one.
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Report(cmd) => run_report(cmd).await,
        Cmd::Add(cmd) => run_add(cmd).await,
    }
}

fn client_for(url: Option<String>) -> RestSalesClient {
    match url {
        Some(url) => RestSalesClient::new(url),
        None => RestSalesClient::from_env(),
    }
}

async fn run_report(cmd: ReportCmd) -> Result<()> {
    let filter = CategoryFilter::from(cmd.category);

    if let Some(path) = cmd.file {
        let (records, report) =
            load_samples_path(&path).with_context(|| format!("loading samples from {path}"))?;
        for (row, reason) in &report.rejected {
            eprintln!("warning: sample row {row} skipped: {reason}");
        }
        render(&records, &filter);
        return Ok(());
    }

    let client = client_for(cmd.url);
    let cache: SnapshotCache<Vec<SaleRecord>> =
        SnapshotCache::new(Duration::seconds(cmd.cache_ttl as i64));

    loop {
        let records = match cache.get() {
            Some(snapshot) => snapshot,
            None => {
                let fetched = fetch_or_report(&client).await?;
                cache.store(fetched)
            }
        };
        render(&records, &filter);

        match client.fetch_category_analysis().await {
            Ok(analysis) => render_analysis(&analysis),
            Err(error) => eprintln!("warning: category analysis unavailable: {error}"),
        }

        let Some(secs) = cmd.watch else { break };
        tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
    }

    Ok(())
}

/// A remote failure aborts the pass with a user-visible reason; no stale
/// or partial data is substituted.
async fn fetch_or_report(client: &RestSalesClient) -> Result<Vec<SaleRecord>> {
    client
        .fetch_sales()
        .await
        .with_context(|| format!("fetching sales from {}", client.base_url()))
}

async fn run_add(cmd: AddCmd) -> Result<()> {
    let record = NewSale {
        date: cmd.date,
        product: cmd.product,
        category: cmd.category,
        unit_price: cmd.price,
        quantity: cmd.quantity,
    }
    .validate()?;

    let client = client_for(cmd.url);
    client.submit_sale(&record).await?;

    println!(
        "sale accepted: {} x{} ({}) on {}",
        record.product, record.quantity, record.category, record.date
    );
    Ok(())
}

fn render(records: &[SaleRecord], filter: &CategoryFilter) {
    if records.is_empty() {
        println!("no sales recorded yet");
        return;
    }

    let summary = overall_summary(records);
    println!("== sales overview ==");
    println!("records:         {}", records.len());
    println!("total revenue:   R$ {:.2}", summary.total_revenue);
    println!("average / sale:  R$ {:.2}", summary.average_revenue);
    println!("growth:          {:.1}%", summary.growth_pct);

    println!();
    println!("== revenue by category ==");
    for row in aggregate_by_category(records) {
        println!(
            "{:<20} R$ {:>12.2}  ({} sales)",
            row.category, row.total_revenue, row.sale_count
        );
    }

    println!();
    match filter {
        CategoryFilter::All => println!("== daily revenue =="),
        CategoryFilter::Only(category) => println!("== daily revenue ({category}) =="),
    }
    let filtered = filter_by_category(records, filter);
    for point in time_series_revenue(&filtered) {
        println!("{}  R$ {:.2}", point.date, point.revenue);
    }
}

fn render_analysis(analysis: &[CategorySummary]) {
    println!();
    println!("== category analysis (server) ==");
    for row in analysis {
        println!(
            "{:<20} R$ {:>12.2}  ({} sales)",
            row.category, row.total_revenue, row.sale_count
        );
    }
}
