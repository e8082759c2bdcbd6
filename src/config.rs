use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Configuration for a spell-check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Homepage to start from; links are kept only if they start with it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of homepage links to check
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Extra command-line arguments for the browser
    #[serde(default = "default_browser_args")]
    pub browser_args: Vec<String>,

    /// Run the browser without a window
    #[serde(default)]
    pub headless: bool,

    /// Seconds to wait for `document.readyState` to become "complete"
    #[serde(default = "default_page_load_timeout")]
    pub page_load_timeout_secs: u64,

    /// Seconds to wait for the first link to appear
    #[serde(default = "default_link_wait_timeout")]
    pub link_wait_timeout_secs: u64,

    /// Seconds allowed for fetching and checking a single page
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Number of misspellings printed per page
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,

    /// Where the dictionary comes from
    #[serde(default)]
    pub dictionary: DictionarySource,

    /// Words that are never reported (brand names, jargon)
    #[serde(default)]
    pub ignore_words: Vec<String>,
}

/// Dictionary backing the spell checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DictionarySource {
    /// Hunspell affix and dictionary files
    Hunspell { aff: PathBuf, dic: PathBuf },

    /// Plain text file with one word per line
    WordList { path: PathBuf },
}

impl Default for DictionarySource {
    fn default() -> Self {
        DictionarySource::Hunspell {
            aff: PathBuf::from("/usr/share/hunspell/ru_RU.aff"),
            dic: PathBuf::from("/usr/share/hunspell/ru_RU.dic"),
        }
    }
}

fn default_base_url() -> String {
    "https://nexign.com/ru".to_string()
}

fn default_max_links() -> usize {
    20
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Caching and GPU acceleration are always off
fn default_browser_args() -> Vec<String> {
    vec![
        "--disable-cache".to_string(),
        "--disable-application-cache".to_string(),
        "--disable-gpu".to_string(),
    ]
}

fn default_page_load_timeout() -> u64 {
    15
}

fn default_link_wait_timeout() -> u64 {
    10
}

fn default_page_timeout() -> u64 {
    45
}

fn default_report_limit() -> usize {
    5
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new(&default_base_url())
    }
}

impl CheckerConfig {
    /// Create a new configuration with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            max_links: default_max_links(),
            webdriver_url: default_webdriver_url(),
            browser_args: default_browser_args(),
            headless: false,
            page_load_timeout_secs: default_page_load_timeout(),
            link_wait_timeout_secs: default_link_wait_timeout(),
            page_timeout_secs: default_page_timeout(),
            report_limit: default_report_limit(),
            dictionary: DictionarySource::default(),
            ignore_words: Vec::new(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_err)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces the WebDriver URL unless the value is missing or empty.
    /// Fed from the `WEBDRIVER_URL` environment variable.
    pub fn override_webdriver_url(&mut self, value: Option<String>) {
        if let Some(webdriver_url) = value {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }

    /// Check the fields that would make a run meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if let Err(e) = Url::parse(&self.base_url) {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: e.to_string(),
            });
        }
        if self.report_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "report_limit",
                reason: "must be at least 1".to_string(),
            });
        }

        let timeouts = [
            ("page_load_timeout_secs", self.page_load_timeout_secs),
            ("link_wait_timeout_secs", self.link_wait_timeout_secs),
            ("page_timeout_secs", self.page_timeout_secs),
        ];
        for (field, value) in timeouts {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1 second".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Arguments handed to the browser, including `--headless` when requested
    pub fn effective_browser_args(&self) -> Vec<String> {
        let mut args = self.browser_args.clone();
        if self.headless && !args.iter().any(|a| a == "--headless") {
            args.push("--headless".to_string());
        }
        args
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    pub fn link_wait_timeout(&self) -> Duration {
        Duration::from_secs(self.link_wait_timeout_secs)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}
