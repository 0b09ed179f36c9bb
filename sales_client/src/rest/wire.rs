//! Wire shapes of the sales API.
//!
//! The API speaks Portuguese field names; serde renames map them onto
//! the English domain types. `data_venda` arrives either as a plain
//! `YYYY-MM-DD` date or as a timestamp, which is truncated to its date
//! component before it becomes a [`SaleRecord`].

use chrono::NaiveDate;
use sales_metrics::models::{record::SaleRecord, summary::CategorySummary};
use serde::{Deserialize, Serialize};

/// One sale record as the API sends and receives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendaWire {
    #[serde(rename = "data_venda", with = "sale_date")]
    pub date: NaiveDate,
    #[serde(rename = "produto")]
    pub product: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "valor")]
    pub unit_price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

/// One pre-aggregated category row from `GET /vendas/analise`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnaliseWire {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "receita_total")]
    pub total_revenue: f64,
    #[serde(rename = "total_vendas")]
    pub sale_count: u64,
}

impl From<VendaWire> for SaleRecord {
    fn from(wire: VendaWire) -> Self {
        SaleRecord {
            date: wire.date,
            product: wire.product,
            category: wire.category,
            unit_price: wire.unit_price,
            quantity: wire.quantity,
        }
    }
}

impl From<&SaleRecord> for VendaWire {
    fn from(record: &SaleRecord) -> Self {
        VendaWire {
            date: record.date,
            product: record.product.clone(),
            category: record.category.clone(),
            unit_price: record.unit_price,
            quantity: record.quantity,
        }
    }
}

impl From<AnaliseWire> for CategorySummary {
    fn from(wire: AnaliseWire) -> Self {
        CategorySummary {
            category: wire.category,
            total_revenue: wire.total_revenue,
            sale_count: wire.sale_count,
        }
    }
}

/// Serde helper for `data_venda`: emits ISO dates, accepts a date, an
/// RFC 3339 timestamp, or a naive timestamp (truncated to the day).
mod sale_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return Ok(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(timestamp.date_naive());
        }
        if let Ok(naive) = raw.parse::<NaiveDateTime>() {
            return Ok(naive.date());
        }
        Err(de::Error::custom(format!("unrecognized sale date: {raw}")))
    }
}
