//! Sales metrics core.
//!
//! This crate owns the one piece of domain logic the dashboards have:
//! validated sale records and the aggregations rendered over them
//! (overall summary, per-category rollups, daily revenue series).
//!
//! Data loading and rendering live elsewhere. Everything here is pure
//! over a snapshot of records and recomputes from scratch on every call;
//! derived values like revenue are never cached alongside their source
//! record, so there is no stale state to manage.

pub mod aggregate;
pub mod models;
pub mod samples;
pub mod validate;
