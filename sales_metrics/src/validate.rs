//! Boundary validation for candidate sale records.
//!
//! Every candidate passes through [`NewSale::validate`] before it may
//! join a dataset, whether it comes from the new-sale form or a sample
//! file. A rejected candidate never reaches the aggregations in
//! [`crate::aggregate`].

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::record::SaleRecord;

/// A candidate sale record as supplied by a form or sample file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewSale {
    /// Calendar date of the sale (`YYYY-MM-DD`).
    pub date: NaiveDate,
    pub product: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// A candidate record failed one of the dataset preconditions.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The product name is empty after trimming.
    #[error("product name must not be empty")]
    EmptyProduct,

    /// The category is empty after trimming.
    #[error("category must not be empty")]
    EmptyCategory,

    /// The unit price is zero, negative, or not a finite number.
    #[error("unit price must be greater than zero, got {0}")]
    NonPositivePrice(f64),

    /// The quantity is below one.
    #[error("quantity must be at least 1, got {0}")]
    QuantityBelowOne(u32),
}

impl NewSale {
    /// Checks the dataset preconditions and produces a [`SaleRecord`].
    ///
    /// Product and category are trimmed before the emptiness check and
    /// the accepted record keeps the trimmed strings. Checks run in
    /// field order; the first violation wins.
    pub fn validate(self) -> Result<SaleRecord, ValidationError> {
        let product = self.product.trim().to_string();
        if product.is_empty() {
            return Err(ValidationError::EmptyProduct);
        }

        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        if !(self.unit_price.is_finite() && self.unit_price > 0.0) {
            return Err(ValidationError::NonPositivePrice(self.unit_price));
        }

        if self.quantity < 1 {
            return Err(ValidationError::QuantityBelowOne(self.quantity));
        }

        Ok(SaleRecord {
            date: self.date,
            product,
            category,
            unit_price: self.unit_price,
            quantity: self.quantity,
        })
    }
}
