// src/error.rs
use thiserror::Error;

/// Everything that can abort a run. Nothing here is recovered locally:
/// the pipeline stops at the first failure and no partial output is left
/// behind (see file::write_atomic).
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure while fetching the functions page.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The fetched page no longer carries the structure we scrape.
    #[error("page structure: {0}")]
    Structure(String),

    /// Output file could not be created or replaced.
    #[error("filesystem: {0}")]
    Filesystem(#[from] std::io::Error),
}
