// src/specs/listing.rs
//
// Year listing page: `/smallsat/{year}/all{year}/`.
//
// The page is a schedule table. `tr.day` rows are date headings
// ("Monday, August 11"), `tr.evented` rows are papers under the most
// recent heading. Rows are read strictly in document order; a paper that
// shows up before any heading has no date and is dropped, not guessed.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Month, NaiveDate};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{DAY_ROW_CLASS, PAPER_ROW_CLASS};
use crate::core::html::{has_class, href, text_of};
use crate::error::{Result, ScrapeError};

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("table selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("tr selector"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Site-relative paper path, e.g. `/smallsat/2025/all2025/12`.
    pub link: String,
    /// `YYYYMMDD`
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Unique by link, in the order links first appear.
    pub entries: Vec<ListingEntry>,
    /// Paper links seen before any day heading.
    pub skipped: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn date_of(&self, link: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.link == link).map(|e| e.date.as_str())
    }
}

/// Path pattern for paper pages of `year`. Other years never match.
pub fn paper_link_pattern(year: u16) -> Result<Regex> {
    Ok(Regex::new(&format!(r"/smallsat/{year}/all{year}/\d+"))?)
}

/// Walk the schedule table and pair every paper link with its date.
pub fn parse_listing(doc: &Html, year: u16) -> Result<Listing> {
    let table = find_schedule_table(doc).ok_or_else(|| {
        ScrapeError::StructureNotFound(s!("schedule table with day/evented rows"))
    })?;
    let pattern = paper_link_pattern(year)?;

    let mut listing = Listing::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current_date: Option<String> = None;

    for row in table.select(&ROW) {
        if has_class(row, DAY_ROW_CLASS) {
            let heading = text_of(row);
            match parse_day_heading(&heading, year) {
                Some(date) => {
                    tracing::debug!("Day heading '{heading}' -> {date}");
                    current_date = Some(date);
                }
                None => tracing::warn!(
                    "Could not parse day heading '{heading}', keeping {:?}",
                    current_date
                ),
            }
        } else if has_class(row, PAPER_ROW_CLASS) {
            let Some(link) = paper_link_in(row, &pattern) else {
                continue;
            };
            let Some(date) = current_date.as_ref() else {
                tracing::warn!("Paper {link} listed before any date heading, skipping");
                listing.skipped.push(link);
                continue;
            };
            match index.get(&link) {
                Some(&i) => listing.entries[i].date = date.clone(),
                None => {
                    index.insert(link.clone(), listing.entries.len());
                    listing.entries.push(ListingEntry { link, date: date.clone() });
                }
            }
        }
    }

    tracing::info!(
        "Listing {year}: {} papers dated, {} without a date",
        listing.entries.len(),
        listing.skipped.len()
    );
    Ok(listing)
}

/// First table that has at least one day or paper row.
fn find_schedule_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).find(|table| {
        table
            .select(&ROW)
            .any(|row| has_class(row, DAY_ROW_CLASS) || has_class(row, PAPER_ROW_CLASS))
    })
}

fn paper_link_in(row: ElementRef<'_>, pattern: &Regex) -> Option<String> {
    row.select(&ANCHOR)
        .filter_map(href)
        .find_map(|h| pattern.find(h).map(|m| s!(m.as_str())))
}

/// `"<weekday>, <Month> <day>"` → `YYYYMMDD` for `year`.
///
/// Month names are English, full or abbreviated, any case. Trailing
/// ordinal suffixes on the day ("11th") are tolerated.
pub fn parse_day_heading(text: &str, year: u16) -> Option<String> {
    let (_, rest) = text.split_once(',')?;
    let mut parts = rest.split_whitespace();
    let month: Month = parts.next()?.trim_end_matches('.').parse().ok()?;
    let day: u32 = parts
        .next()?
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .ok()?;
    let date = NaiveDate::from_ymd_opt(i32::from(year), month.number_from_month(), day)?;
    Some(date.format("%Y%m%d").to_string())
}
