// src/config/consts.rs

// Site
pub const SITE_ROOT: &str = "https://digitalcommons.usu.edu";
pub const USER_AGENT: &str = concat!("ssc_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Listing page markup
pub const DAY_ROW_CLASS: &str = "day";
pub const PAPER_ROW_CLASS: &str = "evented";

// Paper page markup
pub const ABSTRACT_CONTAINER: &str = "div#abstract";
pub const PDF_LINK_PATTERN: &str =
    r"https://digitalcommons\.usu\.edu/cgi/viewcontent\.cgi\?article=\d+&context=smallsat";
pub const UNKNOWN_TITLE: &str = "UnknownTitle";

// Downloads
pub const DOWNLOAD_ATTEMPTS: u32 = 5;
pub const RETRY_DELAY_MS: u64 = 500;

// Run defaults
pub const DEFAULT_YEAR: u16 = 2025;
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEBUG_SUBDIR: &str = "debug";
pub const LOG_FILE: &str = "ssc_scrape.log";
pub const TEST_MODE_CAP: usize = 3;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
