// Re-export modules
pub mod browser;
pub mod config;
pub mod error;
pub mod links;
pub mod pages;
pub mod parsers;
pub mod results;
pub mod spelling;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use browser::{BrowserSession, PageSource};
pub use config::{CheckerConfig, DictionarySource};
pub use error::CheckError;
pub use results::{PageReport, RunSummary};
pub use spelling::SpellChecker;

use std::io::Write;

/// Runs a full check: homepage first, then up to `max_links` of its links.
///
/// The browser session is shut down before returning whenever it was
/// opened, whatever happened to the pages in between.
pub async fn run(config: &CheckerConfig) -> Result<RunSummary, CheckError> {
    config.validate()?;

    let dictionary = spelling::dictionary::load(&config.dictionary)?;
    let checker = SpellChecker::new(dictionary).with_ignore_words(&config.ignore_words);

    let mut session = BrowserSession::configure(config).await?;

    let mut stdout = std::io::stdout();
    let result = crawl(&mut session, config, &checker, &mut stdout).await;

    if let Err(e) = session.shutdown().await {
        ::log::warn!("{}", e);
    }

    Ok(result?)
}

/// Checks the homepage and its links against any [`PageSource`], writing
/// the per-page reports to `out`
pub async fn crawl<S, W>(
    source: &mut S,
    config: &CheckerConfig,
    checker: &SpellChecker,
    out: &mut W,
) -> std::io::Result<RunSummary>
where
    S: PageSource,
    W: Write,
{
    let start_time = std::time::Instant::now();
    let mut summary = RunSummary::default();
    ::log::info!("Checking {}", config.base_url);

    let report = pages::process_page(
        source,
        &config.base_url,
        checker,
        config.report_limit,
        config.page_timeout(),
    )
    .await;
    writeln!(out, "{}", report)?;
    summary.record(&report);

    // The homepage is still loaded, so its links can be read in place
    let links = match source.links(&config.base_url).await {
        Ok(links) => links,
        Err(e) => {
            ::log::warn!("Failed to extract links: {}", e);
            Vec::new()
        }
    };
    summary.links_found = links.len();
    writeln!(
        out,
        "\nFound {} links. Checking the first {}:",
        links.len(),
        config.max_links
    )?;

    for link in links.iter().take(config.max_links) {
        let report = pages::process_page(
            source,
            link,
            checker,
            config.report_limit,
            config.page_timeout(),
        )
        .await;
        writeln!(out, "{}", report)?;
        summary.record(&report);
    }

    ::log::info!(
        "Check complete - {} pages in {:.2} seconds",
        summary.pages_checked,
        start_time.elapsed().as_secs_f64()
    );
    Ok(summary)
}
