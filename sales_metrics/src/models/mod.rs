//! Core data types for the sales metrics crate.

pub mod filter;
pub mod record;
pub mod summary;
