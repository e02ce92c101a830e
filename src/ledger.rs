// src/ledger.rs
//
// What has already been recorded for this year, and the only writer of the
// sheet during a run. Every accepted record triggers a full rewrite so an
// interrupted run loses at most the paper in flight.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::{self, PaperRecord};

pub struct Ledger {
    path: PathBuf,
    records: Vec<PaperRecord>,
    processed: HashSet<String>,
}

impl Ledger {
    /// Load prior state from `path`.
    ///
    /// Best effort: an unreadable or malformed sheet is logged and treated as
    /// empty, and the next save overwrites it.
    pub fn open(path: &Path) -> Self {
        let loaded = match store::load_records(path) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    "Could not read {}: {e}. Starting without prior state.",
                    path.display()
                );
                Vec::new()
            }
        };

        let mut ledger = Self { path: path.to_path_buf(), records: Vec::new(), processed: HashSet::new() };
        let total = loaded.len();
        for record in loaded {
            if ledger.processed.insert(record.link.clone()) {
                ledger.records.push(record);
            }
        }
        if ledger.records.len() < total {
            tracing::warn!(
                "{} duplicate rows in {} ignored",
                total - ledger.records.len(),
                path.display()
            );
        }
        if !ledger.records.is_empty() {
            tracing::info!("Resuming: {} papers already recorded", ledger.records.len());
        }
        ledger
    }

    pub fn contains(&self, link: &str) -> bool {
        self.processed.contains(link)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a new record and rewrite the sheet.
    ///
    /// Returns `Ok(false)` without touching disk when the link is already
    /// recorded. A failed write keeps the record in memory; the next
    /// successful save carries it.
    pub fn append(&mut self, record: PaperRecord) -> Result<bool> {
        if !self.processed.insert(record.link.clone()) {
            return Ok(false);
        }
        self.records.push(record);
        self.save()?;
        Ok(true)
    }

    pub fn save(&self) -> Result<()> {
        store::save_records(&self.path, &self.records)
    }
}
