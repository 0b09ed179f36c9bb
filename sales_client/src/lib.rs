//! Client side of the sales dashboards: a typed async client for the
//! remote sales API, the snapshot cache the report loop uses between
//! fetches, and the [`SalesSource`](source::SalesSource) seam that lets
//! callers swap the remote API for canned data.

pub mod cache;
pub mod errors;
pub mod rest;
pub mod source;
