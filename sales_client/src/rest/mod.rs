//! REST implementation of [`SalesSource`](crate::source::SalesSource)
//! against the sales API: `GET /vendas`, `GET /vendas/analise`,
//! `POST /vendas`.

pub mod client;
pub mod wire;

pub use client::RestSalesClient;
