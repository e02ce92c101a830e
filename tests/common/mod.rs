// tests/common/mod.rs
//
// An in-memory copy of the proceedings site.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::Path;

use ssc_scrape::config::RunOptions;
use ssc_scrape::core::Transport;
use ssc_scrape::{Result, ScrapeError};

pub const ROOT: &str = "https://digitalcommons.usu.edu";
pub const YEAR: u16 = 2025;

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    broken: HashSet<String>,
    hits: RefCell<HashMap<String, usize>>,
}

impl FakeSite {
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn file(mut self, url: &str, bytes: &[u8]) -> Self {
        self.files.insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn broken(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    pub fn hits(&self, url: &str) -> usize {
        self.hits.borrow().get(url).copied().unwrap_or(0)
    }

    fn hit(&self, url: &str) -> Result<()> {
        *self.hits.borrow_mut().entry(url.to_string()).or_insert(0) += 1;
        if self.broken.contains(url) {
            return Err(ScrapeError::Status { url: url.to_string(), status: 500 });
        }
        Ok(())
    }
}

impl Transport for FakeSite {
    fn get_text(&self, url: &str) -> Result<String> {
        self.hit(url)?;
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }

    fn copy_to(&self, url: &str, sink: &mut dyn Write) -> Result<u64> {
        self.hit(url)?;
        let body = self
            .files
            .get(url)
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })?;
        sink.write_all(body)?;
        Ok(body.len() as u64)
    }
}

pub fn listing_url() -> String {
    format!("{ROOT}/smallsat/{YEAR}/all{YEAR}/")
}

pub fn link(n: u32) -> String {
    format!("/smallsat/{YEAR}/all{YEAR}/{n}")
}

pub fn paper_url(n: u32) -> String {
    format!("{ROOT}{}", link(n))
}

pub fn pdf_url(n: u32) -> String {
    format!("{ROOT}/cgi/viewcontent.cgi?article={n}&context=smallsat")
}

pub fn pdf_body(n: u32) -> Vec<u8> {
    format!("%PDF-1.7 paper {n}").into_bytes()
}

fn day_row(text: &str) -> String {
    format!("<tr class=\"day\"><td colspan=\"3\"><h4>{text}</h4></td></tr>")
}

fn paper_row(n: u32) -> String {
    format!(
        "<tr class=\"evented\"><td class=\"time\">10:00 AM</td>\
         <td class=\"title\"><a href=\"{}\">Paper {n}</a></td></tr>",
        paper_url(n)
    )
}

/// Paper 99 sits before any heading; 1–3 are on Aug 11, 4–5 on Aug 12.
pub fn listing_html() -> String {
    let rows = [
        paper_row(99),
        day_row("Monday, August 11"),
        paper_row(1),
        paper_row(2),
        paper_row(3),
        day_row("Tuesday, August 12"),
        paper_row(4),
        paper_row(5),
    ]
    .concat();
    format!(
        "<html><head><title>SmallSat 2025</title></head><body>\
         <table id=\"schedule\">{rows}</table></body></html>"
    )
}

pub fn paper_html(n: u32) -> String {
    format!(
        "<html><head><title>SmallSat {YEAR}: Paper {n}</title>\
         <meta name=\"description\" content=\"meta {n}\"></head><body>\
         <div id=\"abstract\"><h4>Abstract</h4><p>Abstract of paper {n}.</p></div>\
         <a href=\"{ROOT}/cgi/viewcontent.cgi?article={n}&amp;context=smallsat\">Download</a>\
         </body></html>"
    )
}

/// Listing plus papers 1–5, each with page and PDF. Paper 99 is served too
/// so a test can prove it is never requested.
pub fn full_site() -> FakeSite {
    let mut site = FakeSite::default().page(&listing_url(), &listing_html());
    for n in [1, 2, 3, 4, 5, 99] {
        site = site
            .page(&paper_url(n), &paper_html(n))
            .file(&pdf_url(n), &pdf_body(n));
    }
    site
}

pub fn options(out: &Path) -> RunOptions {
    RunOptions { out_dir: out.to_path_buf(), pause_ms: 0, ..RunOptions::for_year(YEAR) }
}

pub fn pdf_name(n: u32) -> String {
    let date = if n <= 3 { "20250811" } else { "20250812" };
    format!("{date}_Paper {n}.pdf")
}
