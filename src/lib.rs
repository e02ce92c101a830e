// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod download;
pub mod ledger;
pub mod progress;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ScrapeError};
pub use store::PaperRecord;
