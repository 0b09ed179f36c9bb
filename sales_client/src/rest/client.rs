use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use sales_metrics::models::{record::SaleRecord, summary::CategorySummary};
use shared_utils::env::env_var_or;
use tracing::debug;

use crate::{
    errors::ClientError,
    rest::wire::{AnaliseWire, VendaWire},
    source::SalesSource,
};

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "SALES_API_URL";

/// Compose-network default when the environment does not override it.
const DEFAULT_BASE_URL: &str = "http://api:8000";

/// Typed client for the remote sales API.
pub struct RestSalesClient {
    client: Client,
    base_url: String,
}

impl RestSalesClient {
    /// Creates a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a client from `SALES_API_URL`, falling back to
    /// `http://api:8000`.
    pub fn from_env() -> Self {
        Self::new(env_var_or(BASE_URL_VAR, DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SalesSource for RestSalesClient {
    async fn fetch_sales(&self) -> Result<Vec<SaleRecord>, ClientError> {
        let url = format!("{}/vendas", self.base_url);
        debug!(%url, "fetching sales");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown API error".to_string());
            return Err(ClientError::Api { status, body });
        }

        let rows = response.json::<Vec<VendaWire>>().await?;
        debug!(count = rows.len(), "fetched sales");
        Ok(rows.into_iter().map(SaleRecord::from).collect())
    }

    async fn fetch_category_analysis(&self) -> Result<Vec<CategorySummary>, ClientError> {
        let url = format!("{}/vendas/analise", self.base_url);
        debug!(%url, "fetching category analysis");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown API error".to_string());
            return Err(ClientError::Api { status, body });
        }

        let rows = response.json::<Vec<AnaliseWire>>().await?;
        Ok(rows.into_iter().map(CategorySummary::from).collect())
    }

    async fn submit_sale(&self, sale: &SaleRecord) -> Result<(), ClientError> {
        let url = format!("{}/vendas", self.base_url);
        debug!(%url, product = %sale.product, "submitting sale");

        let body = VendaWire::from(sale);
        let response = self.client.post(&url).json(&body).send().await?;

        // The API signals acceptance with 200 or 201.
        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(ClientError::Rejected { status }),
        }
    }
}
