pub mod session;

pub use session::BrowserSession;

use crate::error::{LinkExtractionError, PageLoadError};

/// Something that can load pages and report the links on the current one.
///
/// The driver only talks to this trait, so the pipeline runs against a live
/// WebDriver session or an in-memory fake alike.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Navigate to `url`, wait for it to finish loading and return its HTML
    async fn fetch(&mut self, url: &str) -> Result<String, PageLoadError>;

    /// Links on the currently loaded page that belong to `base_url`
    async fn links(&mut self, base_url: &str) -> Result<Vec<String>, LinkExtractionError>;
}
