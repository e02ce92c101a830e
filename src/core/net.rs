// src/core/net.rs

// Blocking HTTP behind a small trait so the crawl can run against a fake site.

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// The HTTP capability the scraper needs. Non-2xx responses are errors.
pub trait Transport {
    /// GET `url` and return the body as text.
    fn get_text(&self, url: &str) -> Result<String>;

    /// GET `url` and stream the body into `sink`. Returns bytes written.
    fn copy_to(&self, url: &str, sink: &mut dyn Write) -> Result<u64>;
}

/// `reqwest` blocking client with our user agent and timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp)
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.get(url)?.text()?)
    }

    fn copy_to(&self, url: &str, sink: &mut dyn Write) -> Result<u64> {
        let mut resp = self.get(url)?;
        Ok(resp.copy_to(sink)?)
    }
}

/// Fetch and parse a page. Any failure is logged and becomes `None`.
pub fn fetch_document(transport: &dyn Transport, url: &str) -> Option<Html> {
    match transport.get_text(url) {
        Ok(body) => Some(Html::parse_document(&body)),
        Err(e) => {
            tracing::error!("Failed to fetch {url}: {e}");
            None
        }
    }
}
