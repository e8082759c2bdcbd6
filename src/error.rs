use thiserror::Error;

/// Errors raised while loading or validating the checker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hunspell dictionary: {0}")]
    Hunspell(String),
}

/// Errors from the WebDriver session itself
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to connect to WebDriver at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: fantoccini::error::NewSessionError,
    },

    #[error("failed to close browser session: {0}")]
    Close(#[source] fantoccini::error::CmdError),
}

/// A page could not be loaded; callers treat the content as empty
#[derive(Debug, Error)]
pub enum PageLoadError {
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    #[error("{url} did not finish loading within {secs} seconds")]
    Timeout { url: String, secs: u64 },

    #[error("failed to query ready state of {url}: {source}")]
    Script {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    #[error("failed to read page source of {url}: {source}")]
    Source {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },
}

/// Links could not be collected; callers continue with an empty list
#[derive(Debug, Error)]
pub enum LinkExtractionError {
    #[error("no links appeared within {secs} seconds")]
    Timeout { secs: u64 },

    #[error("failed to query links: {0}")]
    Query(#[source] fantoccini::error::CmdError),
}

/// Anything that went wrong while checking a single page
#[derive(Debug, Error)]
pub enum PageProcessingError {
    #[error("checking {url} took longer than {secs} seconds")]
    Timeout { url: String, secs: u64 },
}

/// Fatal errors that stop the whole run
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
