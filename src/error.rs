//! Library error taxonomy.
//!
//! Only the I/O-facing modules (content client, sitemap writer) can fail.
//! Classification is infallible by contract: unrecognized shapes are data
//! (`PageIntent::Invalid`), not errors, and upstream not-found is modeled as
//! `Option` / `ResolvedPage::NotFound` rather than an error variant.

use thiserror::Error;

/// Errors produced by the pagesense library.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level HTTP failure (connect, timeout, body read, decode).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream content API answered with an unexpected status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// A base URL or endpoint could not be constructed.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// I/O failure: sitemap writing or gateway socket setup.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
