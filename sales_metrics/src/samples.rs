//! TOML-backed sample dataset.
//!
//! The report can run against a static sample file instead of the remote
//! API. The file holds `[[sales]]` tables; every row is pushed through
//! [`NewSale::validate`] and rows that fail a precondition are dropped
//! and reported, never aggregated.
//!
//! Entrypoints:
//! - Parse from a TOML string: [`load_samples_str`]
//! - Parse from a file path: [`load_samples_path`]

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::{
    models::record::SaleRecord,
    validate::{NewSale, ValidationError},
};

/// Top-level shape of a sample file.
///
/// Dates are `YYYY-MM-DD` strings, not bare TOML dates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SampleSet {
    sales: Vec<NewSale>,
}

/// Outcome of loading one sample file.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Rows that passed validation and entered the dataset.
    pub accepted: usize,
    /// Zero-based row index and reason for every rejected row.
    pub rejected: Vec<(usize, ValidationError)>,
}

/// Errors raised while reading or parsing a sample file.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The TOML could not be parsed into sample rows.
    #[error("failed to parse sample TOML")]
    Parse(#[from] toml::de::Error),

    /// The file could not be read.
    #[error("failed to read sample file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parses sample rows from a TOML string, validating each row.
///
/// Invalid rows are dropped and logged; the report records which rows
/// were rejected and why. A parse failure aborts the whole load.
pub fn load_samples_str(toml_str: &str) -> Result<(Vec<SaleRecord>, LoadReport), SampleError> {
    let set: SampleSet = toml::from_str(toml_str)?;

    let mut report = LoadReport::default();
    let mut records = Vec::with_capacity(set.sales.len());
    for (index, candidate) in set.sales.into_iter().enumerate() {
        match candidate.validate() {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(row = index, %reason, "dropping invalid sample row");
                report.rejected.push((index, reason));
            }
        }
    }
    report.accepted = records.len();

    Ok((records, report))
}

/// Reads a sample TOML file from disk; see [`load_samples_str`].
pub fn load_samples_path(
    path: impl AsRef<std::path::Path>,
) -> Result<(Vec<SaleRecord>, LoadReport), SampleError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SampleError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_samples_str(&text)
}
