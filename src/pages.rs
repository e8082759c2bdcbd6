use crate::browser::PageSource;
use crate::error::PageProcessingError;
use crate::parsers;
use crate::results::PageReport;
use crate::spelling::SpellChecker;
use std::time::Duration;
use tokio::time::timeout;

/// Fetches one page, extracts its text and spell-checks it.
///
/// A page that fails to load is treated as empty and comes back as
/// [`PageReport::Clean`]. Only exceeding `page_timeout` yields
/// [`PageReport::Failed`]. Nothing here aborts the run.
pub async fn process_page<S: PageSource>(
    source: &mut S,
    url: &str,
    checker: &SpellChecker,
    report_limit: usize,
    page_timeout: Duration,
) -> PageReport {
    let report = match timeout(page_timeout, check_page(source, url, checker)).await {
        Ok(words) => PageReport::from_words(url, words, report_limit),
        Err(_) => PageReport::Failed {
            url: url.to_string(),
            error: PageProcessingError::Timeout {
                url: url.to_string(),
                secs: page_timeout.as_secs(),
            },
        },
    };

    if let PageReport::Failed { error, .. } = &report {
        ::log::error!("Error processing {}: {}", report.url(), error);
    }
    report
}

async fn check_page<S: PageSource>(
    source: &mut S,
    url: &str,
    checker: &SpellChecker,
) -> Vec<String> {
    let html = match source.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            ::log::warn!("Failed to load page: {}", e);
            String::new()
        }
    };

    if let Some(title) = parsers::page_title(&html) {
        ::log::debug!("Checking \"{}\" at {}", title, url);
    }

    let text = parsers::extract_text(&html);
    let words = checker.check(&text);
    ::log::debug!(
        "{}: {} characters of text, {} unknown words",
        url,
        text.chars().count(),
        words.len()
    );
    words
}
