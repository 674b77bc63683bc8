//! Crate error type.
//!
//! Two failure classes exist:
//!
//! - [`Error::Transport`]: the HTTP call itself failed (network error or a
//!   non-2xx status, folded in via `Response::error_for_status`)
//! - [`Error::MalformedResponse`]: the call succeeded but the body was not
//!   the `[metadata, observations]` shape the provider documents
//!
//! Coercion failures on individual observations (unparseable year, null or
//! non-numeric value) are not errors; those rows are dropped during
//! reshaping.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or non-2xx HTTP status from the indicator provider.
    #[error("indicator request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response decoded, but not into the shape the provider documents.
    #[error("malformed indicator response: {0}")]
    MalformedResponse(String),
}
