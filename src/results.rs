use crate::error::PageProcessingError;
use serde::Serialize;
use std::fmt;

/// Outcome of checking a single page
#[derive(Debug)]
pub enum PageReport {
    /// Unknown words were found; `words` holds the first few of `total`
    Misspelled {
        url: String,
        words: Vec<String>,
        total: usize,
    },

    /// Every eligible word was known (or the page had no text)
    Clean { url: String },

    /// The page could not be checked
    Failed {
        url: String,
        error: PageProcessingError,
    },
}

impl PageReport {
    /// Builds a report from the full misspelling list, keeping the first `limit`
    pub fn from_words(url: &str, mut words: Vec<String>, limit: usize) -> Self {
        if words.is_empty() {
            return PageReport::Clean {
                url: url.to_string(),
            };
        }

        let total = words.len();
        words.truncate(limit);
        PageReport::Misspelled {
            url: url.to_string(),
            words,
            total,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            PageReport::Misspelled { url, .. }
            | PageReport::Clean { url }
            | PageReport::Failed { url, .. } => url,
        }
    }
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageReport::Misspelled { url, words, .. } => {
                write!(f, "\nMisspellings on {}:", url)?;
                for word in words {
                    write!(f, "\n- {}", word)?;
                }
                Ok(())
            }
            PageReport::Clean { url } => write!(f, "No misspellings found on {}", url),
            PageReport::Failed { url, error } => write!(f, "Failed to process {}: {}", url, error),
        }
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub pages_checked: usize,
    pub pages_clean: usize,
    pub pages_misspelled: usize,
    pub pages_failed: usize,
    /// Site links found on the homepage, before the link limit
    pub links_found: usize,
    /// Misspellings across all pages, before the per-page report limit
    pub misspellings: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &PageReport) {
        self.pages_checked += 1;
        match report {
            PageReport::Misspelled { total, .. } => {
                self.pages_misspelled += 1;
                self.misspellings += total;
            }
            PageReport::Clean { .. } => self.pages_clean += 1,
            PageReport::Failed { .. } => self.pages_failed += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked {} pages: {} clean, {} with misspellings ({} words), {} failed",
            self.pages_checked,
            self.pages_clean,
            self.pages_misspelled,
            self.misspellings,
            self.pages_failed
        )
    }
}
