use crate::browser::PageSource;
use crate::config::CheckerConfig;
use crate::error::{BrowserError, LinkExtractionError, PageLoadError};
use crate::links::filter_links;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Interval between `document.readyState` checks
const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// WebDriver endpoints tried when the configured one refuses the connection
const FALLBACK_WEBDRIVER_URLS: [&str; 2] = [
    "http://localhost:9515", // ChromeDriver default
    "http://127.0.0.1:4444",
];

/// A single browser session shared by every page of a run
pub struct BrowserSession {
    client: Client,
    page_load_timeout: Duration,
    link_wait_timeout: Duration,
}

impl BrowserSession {
    /// Launches a browser through WebDriver with the configured arguments
    pub async fn configure(config: &CheckerConfig) -> Result<Self, BrowserError> {
        let capabilities = chrome_capabilities(&config.effective_browser_args());

        let client = connect(&config.webdriver_url, capabilities).await?;
        ::log::info!("Connected to WebDriver at {}", config.webdriver_url);

        Ok(Self {
            client,
            page_load_timeout: config.page_load_timeout(),
            link_wait_timeout: config.link_wait_timeout(),
        })
    }

    /// Closes the browser. Consumes the session so it can't be used afterwards
    pub async fn shutdown(self) -> Result<(), BrowserError> {
        self.client.close().await.map_err(BrowserError::Close)?;
        ::log::info!("Browser session closed");
        Ok(())
    }

    /// Polls until the document reports it has finished loading
    async fn wait_until_ready(&self, url: &str) -> Result<(), PageLoadError> {
        let poll = async {
            loop {
                let state = self
                    .client
                    .execute("return document.readyState", vec![])
                    .await
                    .map_err(|source| PageLoadError::Script {
                        url: url.to_string(),
                        source,
                    })?;

                if state.as_str() == Some("complete") {
                    return Ok::<(), PageLoadError>(());
                }
                ::log::trace!("{} ready state is {}", url, state);
                sleep(READY_POLL_INTERVAL).await;
            }
        };

        match timeout(self.page_load_timeout, poll).await {
            Ok(result) => result,
            Err(_) => Err(PageLoadError::Timeout {
                url: url.to_string(),
                secs: self.page_load_timeout.as_secs(),
            }),
        }
    }
}

impl PageSource for BrowserSession {
    async fn fetch(&mut self, url: &str) -> Result<String, PageLoadError> {
        let start = std::time::Instant::now();
        ::log::info!("Loading {}", url);

        self.client
            .goto(url)
            .await
            .map_err(|source| PageLoadError::Navigation {
                url: url.to_string(),
                source,
            })?;

        self.wait_until_ready(url).await?;

        let html = self
            .client
            .source()
            .await
            .map_err(|source| PageLoadError::Source {
                url: url.to_string(),
                source,
            })?;

        ::log::debug!(
            "Loaded {} ({} bytes) in {:.2} seconds",
            url,
            html.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(html)
    }

    async fn links(&mut self, base_url: &str) -> Result<Vec<String>, LinkExtractionError> {
        self.client
            .wait()
            .at_most(self.link_wait_timeout)
            .for_element(Locator::Css("a"))
            .await
            .map_err(|e| match e {
                CmdError::WaitTimeout => LinkExtractionError::Timeout {
                    secs: self.link_wait_timeout.as_secs(),
                },
                other => LinkExtractionError::Query(other),
            })?;

        let anchors = self
            .client
            .find_all(Locator::Css("a"))
            .await
            .map_err(LinkExtractionError::Query)?;

        // The href property is already resolved against the page URL
        let mut hrefs = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            if let Some(href) = anchor.prop("href").await.map_err(LinkExtractionError::Query)? {
                hrefs.push(href);
            }
        }

        ::log::info!("Found {} anchors", hrefs.len());
        Ok(filter_links(hrefs, base_url))
    }
}

/// Chrome options carrying the browser arguments
fn chrome_capabilities(args: &[String]) -> Map<String, Value> {
    let mut capabilities = Map::new();
    capabilities.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    capabilities
}

/// Connects to the configured WebDriver, falling back to common local ports
async fn connect(
    webdriver_url: &str,
    capabilities: Map<String, Value>,
) -> Result<Client, BrowserError> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities);

    let first_error = match builder.connect(webdriver_url).await {
        Ok(client) => return Ok(client),
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = builder.connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(BrowserError::Connect {
        url: webdriver_url.to_string(),
        source: first_error,
    })
}
