//! Error types for the remote collaborators.

use thiserror::Error;

/// Errors surfaced by the Docs and Drive clients.
///
/// Remote diagnostics are preserved verbatim and nothing is retried here;
/// retry policy belongs to the service and its transport.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: connect, TLS, timeout, body decode.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response, body kept intact for diagnostics.
    #[error("{service} request failed: status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Credential material could not be loaded or parsed.
    #[error("credentials error: {0}")]
    Credentials(String),

    /// The token endpoint rejected our assertion.
    #[error("auth error: {0}")]
    Auth(String),
}
