// src/store.rs
//
// The per-year spreadsheet: one CSV, columns Title, Date, Abstract, Link.
// Always rewritten whole, via a temp file in the same directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

pub const COLUMNS: [&str; 4] = ["Title", "Date", "Abstract", "Link"];
const LINK_COLUMN: &str = "Link";

/// One row of the spreadsheet. `link` is the identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "Title", default)]
    pub title: String,
    /// `YYYYMMDD`
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Abstract", default)]
    pub abstract_text: String,
    #[serde(rename = "Link")]
    pub link: String,
}

/// Parse records from CSV text. The header row must name a `Link` column;
/// other columns are optional and unknown ones are ignored. Header names are
/// trimmed before matching.
pub fn read_records<R: Read>(reader: R, source: &Path) -> Result<Vec<PaperRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    if !rdr.headers()?.iter().any(|h| h == LINK_COLUMN) {
        return Err(ScrapeError::MissingColumn { column: LINK_COLUMN, path: source.to_path_buf() });
    }
    let records = rdr.deserialize().collect::<std::result::Result<Vec<PaperRecord>, _>>()?;
    Ok(records)
}

/// Header row, then one row per record, in order.
pub fn write_records<W: Write>(writer: W, records: &[PaperRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Load the sheet at `path`. A missing file is an empty sheet.
pub fn load_records(path: &Path) -> Result<Vec<PaperRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    read_records(BufReader::new(file), path)
}

/// Replace the sheet at `path` with `records`.
pub fn save_records(path: &Path, records: &[PaperRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let tmp = sibling_with_suffix(path, ".tmp");
    {
        let mut out = BufWriter::new(File::create(&tmp)?);
        write_records(&mut out, records)?;
        out.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// `dir/name.ext` → `dir/name.ext<suffix>`
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
