// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::config::{RunOptions, consts::{DEFAULT_OUT_DIR, DEFAULT_YEAR, REQUEST_PAUSE_MS}};
use crate::core::HttpTransport;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Download SmallSat proceedings for one year: metadata to CSV, papers to PDF.
///
/// Re-running with the same year and output directory picks up where the
/// last run stopped.
#[derive(Debug, Parser)]
#[command(name = "ssc_scrape", version, about)]
pub struct Args {
    /// Conference year
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Output root; files go to <OUT>/<YEAR>/
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Smoke test: stop after 3 new papers
    #[arg(long)]
    pub test: bool,

    /// Stop after N new papers
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Record metadata without downloading PDFs
    #[arg(long)]
    pub skip_pdf: bool,

    /// Save fetched HTML under <OUT>/<YEAR>/debug/
    #[arg(long)]
    pub dump_html: bool,

    /// Debug-level logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Pause between paper requests, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,
}

impl From<Args> for RunOptions {
    fn from(args: Args) -> Self {
        let log_level = match (args.debug, args.quiet) {
            (true, _) => Level::DEBUG,
            (false, true) => Level::WARN,
            (false, false) => Level::INFO,
        };
        Self {
            year: args.year,
            out_dir: args.out,
            test_mode: args.test,
            max_new: args.limit,
            log_level,
            skip_pdf: args.skip_pdf,
            dump_html: args.dump_html,
            pause_ms: args.pause_ms,
        }
    }
}

/// Prints one line per paper to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl ConsoleProgress {
    fn tick(&mut self) -> String {
        self.seen += 1;
        format!("[{}/{}]", self.seen, self.total)
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("{total} papers listed");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_skipped(&mut self, _link: &str) {
        self.seen += 1;
    }

    fn item_done(&mut self, _link: &str, title: &str) {
        let n = self.tick();
        println!("{n} {title}");
    }

    fn item_failed(&mut self, link: &str, reason: &str) {
        let n = self.tick();
        println!("{n} FAILED {link}: {reason}");
    }
}

/// Parse args, set up logging, crawl.
pub fn run() -> crate::Result<RunSummary> {
    let opts = RunOptions::from(Args::parse());
    crate::log::init(opts.log_level, Some(&opts.log_path()));

    let transport = HttpTransport::new()?;
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, &transport, Some(&mut progress))?;

    println!(
        "{} new, {} already recorded, {} failed -> {}",
        summary.recorded,
        summary.already_recorded,
        summary.failed.len(),
        summary.sheet.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_run_options() {
        let args = Args::parse_from(["ssc_scrape"]);
        assert_eq!(RunOptions::from(args), RunOptions::default());
    }

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "ssc_scrape", "--year", "2023", "-o", "data", "--test", "--skip-pdf", "--debug",
            "--pause-ms", "0",
        ]);
        let opts = RunOptions::from(args);
        assert_eq!(opts.year, 2023);
        assert_eq!(opts.out_dir, PathBuf::from("data"));
        assert_eq!(opts.limit(), Some(3));
        assert!(opts.skip_pdf);
        assert_eq!(opts.log_level, Level::DEBUG);
        assert_eq!(opts.pause_ms, 0);
    }

    #[test]
    fn debug_and_quiet_conflict() {
        assert!(Args::try_parse_from(["ssc_scrape", "--debug", "--quiet"]).is_err());
    }
}
