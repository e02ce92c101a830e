// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while scraping.
///
/// Only a handful of these ever leave `runner::run`: the ones that make the
/// whole run pointless (listing unreachable, schedule table missing, nothing
/// listed). The rest are logged and reduced to a skip where they happen.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Sheet(#[from] csv::Error),

    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("page structure not found: {0}")]
    StructureNotFound(String),

    #[error("column `{column}` missing from {}", .path.display())]
    MissingColumn { column: &'static str, path: PathBuf },

    #[error("listing page unavailable: {0}")]
    ListingUnavailable(String),

    #[error("no paper entries found for {0}")]
    NoEntries(u16),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
