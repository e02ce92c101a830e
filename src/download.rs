// src/download.rs
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::config::consts::{DOWNLOAD_ATTEMPTS, RETRY_DELAY_MS};
use crate::core::net::Transport;
use crate::error::Result;
use crate::store::sibling_with_suffix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { attempts: DOWNLOAD_ATTEMPTS, delay: Duration::from_millis(RETRY_DELAY_MS) }
    }
}

/// Stream `url` into `dest`, retrying per `policy`.
///
/// Bytes go to `<dest>.part` first and are renamed into place only once the
/// whole body is on disk, so `dest` is either complete or absent.
/// Never fails loudly: every error is logged and the result is `false`.
pub fn download_pdf(transport: &dyn Transport, url: &str, dest: &Path, policy: &RetryPolicy) -> bool {
    let part = sibling_with_suffix(dest, ".part");

    for attempt in 1..=policy.attempts {
        match fetch_once(transport, url, &part) {
            Ok(bytes) => match fs::rename(&part, dest) {
                Ok(()) => {
                    tracing::info!("Downloaded: {} ({bytes} bytes)", dest.display());
                    return true;
                }
                Err(e) => tracing::warn!("Attempt {attempt}: could not move {} into place: {e}", part.display()),
            },
            Err(e) => tracing::warn!("Attempt {attempt} failed for {url}: {e}"),
        }
        let _ = fs::remove_file(&part);
        if attempt < policy.attempts && !policy.delay.is_zero() {
            thread::sleep(policy.delay);
        }
    }

    tracing::error!("Failed to download after {} attempts: {url}", policy.attempts);
    false
}

fn fetch_once(transport: &dyn Transport, url: &str, part: &Path) -> Result<u64> {
    let mut out = BufWriter::new(File::create(part)?);
    let bytes = transport.copy_to(url, &mut out)?;
    out.flush()?;
    Ok(bytes)
}
