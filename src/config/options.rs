// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use tracing::Level;

use super::consts::*;

/// Everything a single run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub year: u16,
    pub out_dir: PathBuf,
    /// Smoke-test mode: stop after `TEST_MODE_CAP` new papers.
    pub test_mode: bool,
    /// Explicit cap on newly recorded papers; wins over `test_mode`.
    pub max_new: Option<usize>,
    pub log_level: Level,
    /// Record metadata only, never fetch PDFs.
    pub skip_pdf: bool,
    /// Save every fetched page under `<year dir>/debug/`.
    pub dump_html: bool,
    /// Pause between paper page requests.
    pub pause_ms: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            test_mode: false,
            max_new: None,
            log_level: Level::INFO,
            skip_pdf: false,
            dump_html: false,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl RunOptions {
    pub fn for_year(year: u16) -> Self {
        Self { year, ..Self::default() }
    }

    pub fn listing_url(&self) -> String {
        let y = self.year;
        format!("{SITE_ROOT}/smallsat/{y}/all{y}/")
    }

    /// Absolute URL for a site-relative paper path.
    pub fn paper_url(&self, link: &str) -> String {
        if link.starts_with('/') {
            join!(SITE_ROOT, link)
        } else {
            s!(link)
        }
    }

    pub fn year_dir(&self) -> PathBuf {
        self.out_dir.join(self.year.to_string())
    }

    pub fn sheet_path(&self) -> PathBuf {
        self.year_dir().join(format!("smallsat_{}.csv", self.year))
    }

    pub fn debug_dir(&self) -> PathBuf {
        self.year_dir().join(DEBUG_SUBDIR)
    }

    pub fn log_path(&self) -> PathBuf {
        self.out_dir.join(LOG_FILE)
    }

    /// How many new papers this run may record, if capped.
    pub fn limit(&self) -> Option<usize> {
        match (self.max_new, self.test_mode) {
            (Some(n), _) => Some(n),
            (None, true) => Some(TEST_MODE_CAP),
            (None, false) => None,
        }
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
