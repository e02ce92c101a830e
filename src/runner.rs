// src/runner.rs
//
// Init → listing fetched → per paper (fetch → extract → skip | download → record) → done.
//
// Only the listing stage can abort the run. After that every paper stands
// alone: whatever goes wrong with one is logged and the next one starts.

use std::fs;
use std::path::PathBuf;
use std::thread;

use scraper::Html;

use crate::config::RunOptions;
use crate::core::net::{Transport, fetch_document};
use crate::core::sanitize::{pdf_file_name, sanitize_filename};
use crate::download::{RetryPolicy, download_pdf};
use crate::error::{Result, ScrapeError};
use crate::ledger::Ledger;
use crate::progress::{NullProgress, Progress};
use crate::specs::{ListingEntry, extract_paper, parse_listing};
use crate::store::{PaperRecord, ensure_directory};

/// What a run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Dated papers on the listing page.
    pub listed: usize,
    /// Papers listed before any date heading (never processed).
    pub undated: usize,
    /// Skipped because the sheet already had them.
    pub already_recorded: usize,
    /// Newly added to the sheet this run.
    pub recorded: usize,
    pub downloaded: usize,
    /// PDFs that were already on disk.
    pub pdf_present: usize,
    /// Links that could not be processed this run.
    pub failed: Vec<String>,
    /// Stopped at the new-paper cap.
    pub stopped_early: bool,
    pub sheet: PathBuf,
}

pub struct Runner<'a> {
    opts: &'a RunOptions,
    transport: &'a dyn Transport,
    retry: RetryPolicy,
}

/// Run one crawl with the default download retry policy.
pub fn run(
    opts: &RunOptions,
    transport: &dyn Transport,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    Runner::new(opts, transport).run(progress)
}

impl<'a> Runner<'a> {
    pub fn new(opts: &'a RunOptions, transport: &'a dyn Transport) -> Self {
        Self { opts, transport, retry: RetryPolicy::default() }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn run(&self, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
        let mut null = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };
        let year = self.opts.year;

        let listing = {
            let url = self.opts.listing_url();
            tracing::info!("Fetching listing page: {url}");
            let doc = fetch_document(self.transport, &url)
                .ok_or_else(|| ScrapeError::ListingUnavailable(url.clone()))?;
            if self.opts.dump_html {
                self.dump_page("listing.html", &doc);
            }
            parse_listing(&doc, year).inspect_err(|e| tracing::error!("{e}"))?
        };
        if listing.is_empty() {
            tracing::error!("No dated paper links found for {year}");
            return Err(ScrapeError::NoEntries(year));
        }

        ensure_directory(&self.opts.year_dir())?;
        let mut ledger = Ledger::open(&self.opts.sheet_path());

        let mut summary = RunSummary {
            listed: listing.len(),
            undated: listing.skipped.len(),
            sheet: ledger.path().to_path_buf(),
            ..RunSummary::default()
        };
        progress.begin(listing.len());

        let limit = self.opts.limit();
        let mut first_request = true;

        for entry in &listing.entries {
            if ledger.contains(&entry.link) {
                tracing::debug!("Already recorded: {}", entry.link);
                summary.already_recorded += 1;
                progress.item_skipped(&entry.link);
                continue;
            }
            if limit.is_some_and(|cap| summary.recorded >= cap) {
                tracing::info!("Reached the limit of {} new papers, stopping", summary.recorded);
                progress.log("Limit reached");
                summary.stopped_early = true;
                break;
            }

            if !first_request {
                thread::sleep(self.opts.pause());
            }
            first_request = false;

            match self.process(entry, &mut ledger, &mut summary) {
                Ok(title) => progress.item_done(&entry.link, &title),
                Err(reason) => {
                    summary.failed.push(entry.link.clone());
                    progress.item_failed(&entry.link, &reason);
                }
            }
        }
        progress.finish();

        tracing::info!(
            "Done: {} new, {} already recorded, {} failed, {} downloaded ({} on disk), sheet has {} rows",
            summary.recorded,
            summary.already_recorded,
            summary.failed.len(),
            summary.downloaded,
            summary.pdf_present,
            ledger.len()
        );
        Ok(summary)
    }

    /// One paper. `Err` carries a human-readable reason; nothing is recorded.
    fn process(
        &self,
        entry: &ListingEntry,
        ledger: &mut Ledger,
        summary: &mut RunSummary,
    ) -> std::result::Result<String, String> {
        let url = self.opts.paper_url(&entry.link);
        tracing::info!("Fetching paper page: {url}");
        let Some(doc) = fetch_document(self.transport, &url) else {
            return Err(s!("paper page unavailable"));
        };
        let paper = extract_paper(&doc);
        if self.opts.dump_html {
            let name = join!(&entry.date, "_", &sanitize_filename(&paper.title), ".html");
            self.dump_page(&name, &doc);
        }

        let Some(pdf_url) = paper.pdf_url.as_deref() else {
            tracing::warn!("PDF link not found for {} ({})", paper.title, entry.link);
            return Err(s!("PDF link not found"));
        };

        if !self.opts.skip_pdf {
            let dest = self.opts.year_dir().join(pdf_file_name(&entry.date, &paper.title));
            if dest.exists() {
                tracing::info!("Already on disk: {}", dest.display());
                summary.pdf_present += 1;
            } else if download_pdf(self.transport, pdf_url, &dest, &self.retry) {
                summary.downloaded += 1;
            } else {
                return Err(s!("PDF download failed"));
            }
        }

        let record = PaperRecord {
            title: paper.title.clone(),
            date: entry.date.clone(),
            abstract_text: paper.abstract_text,
            link: entry.link.clone(),
        };
        if let Err(e) = ledger.append(record) {
            tracing::error!("Could not save {}: {e}", ledger.path().display());
        }
        summary.recorded += 1;
        tracing::info!("Recorded: {} [{}]", paper.title, entry.date);
        Ok(paper.title)
    }

    fn dump_page(&self, name: &str, doc: &Html) {
        let dir = self.opts.debug_dir();
        let path = dir.join(name);
        let written = ensure_directory(&dir)
            .and_then(|()| fs::write(&path, doc.html()).map_err(ScrapeError::from));
        if let Err(e) = written {
            tracing::warn!("Could not save page dump {}: {e}", path.display());
        }
    }
}
