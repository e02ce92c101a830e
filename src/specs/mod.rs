// src/specs/mod.rs
//! # Page “specs”
//!
//! One module per remote page kind. Each encodes *where the ground truth
//! lives in the HTML* and *how to read it*, and nothing else.
//!
//! ## What lives here
//! - **Pure extraction** from an already-parsed `scraper::Html`.
//! - **Selector choice & precedence** (e.g. abstract paragraph before the
//!   abstract container before the meta description).
//! - **Small result shapes** (`Listing`, `PaperPage`) for the runner.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), persistence (`store`, `ledger`), downloads
//!   (`download`) or run policy (`runner`).
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::fetch_document → specs::listing::parse_listing
//!        → core::net::fetch_document → specs::paper::extract_paper
//! ```
//!
//! ## Conventions
//! - Selectors are parsed once (`LazyLock`) and are known-valid.
//! - Text is whitespace-collapsed before it leaves a spec.
//! - Specs are tested offline against inline HTML fixtures.
pub mod listing;
pub mod paper;

pub use listing::{Listing, ListingEntry, parse_listing};
pub use paper::{PaperPage, extract_paper};
