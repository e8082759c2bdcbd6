use crate::browser::PageSource;
use crate::error::{LinkExtractionError, PageLoadError};
use crate::links::filter_links;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// In-memory stand-in for a browser session
#[derive(Default)]
pub struct FakeSource {
    pages: HashMap<String, String>,
    hanging: HashSet<String>,
    hrefs: Option<Vec<String>>,
    /// Every URL passed to `fetch`, in order
    pub visited: Vec<String>,
    /// Number of `links` calls
    pub link_requests: usize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_hanging_page(mut self, url: &str) -> Self {
        self.hanging.insert(url.to_string());
        self
    }

    /// Hrefs on the loaded page; without this `links` times out
    pub fn with_hrefs(mut self, hrefs: &[&str]) -> Self {
        self.hrefs = Some(hrefs.iter().map(|h| h.to_string()).collect());
        self
    }
}

impl PageSource for FakeSource {
    async fn fetch(&mut self, url: &str) -> Result<String, PageLoadError> {
        self.visited.push(url.to_string());

        if self.hanging.contains(url) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| PageLoadError::Timeout {
                url: url.to_string(),
                secs: 15,
            })
    }

    async fn links(&mut self, base_url: &str) -> Result<Vec<String>, LinkExtractionError> {
        self.link_requests += 1;
        match &self.hrefs {
            Some(hrefs) => Ok(filter_links(hrefs, base_url)),
            None => Err(LinkExtractionError::Timeout { secs: 10 }),
        }
    }
}
