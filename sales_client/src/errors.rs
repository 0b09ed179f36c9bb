use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the sales API client.
///
/// Remote failures are values, not panics: a caller that cannot reach
/// the API gets a variant to report and aborts its rendering pass, with
/// no stale data substituted silently.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, bad URL,
    /// malformed response body).
    #[error("sales API unreachable: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("sales API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The API refused a submitted record (anything outside 200/201).
    #[error("sales API rejected the record (status {status})")]
    Rejected { status: StatusCode },
}
