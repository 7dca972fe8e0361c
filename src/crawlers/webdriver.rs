use crate::config::BrowserConfig;
use crate::crawlers::crawler::{BrowserSession, ConsentOutcome, ReadyOutcome};
use crate::error::{CrawlError, Result};
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;

/// First button whose normalized text contains "accept" or "agree", any case
const CONSENT_XPATH: &str = "//button[contains(translate(normalize-space(.), 'ABCDEFGHIJKLMNOPQRSTUVWXYZ', 'abcdefghijklmnopqrstuvwxyz'), 'accept') or contains(translate(normalize-space(.), 'ABCDEFGHIJKLMNOPQRSTUVWXYZ', 'abcdefghijklmnopqrstuvwxyz'), 'agree')]";

/// Landmarks that signal the page body has rendered
const CONTENT_READY_CSS: &str = "main, .main-content, #content";

/// Endpoints tried when the configured WebDriver URL refuses the session
const FALLBACK_WEBDRIVER_URLS: &[&str] = &[
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// A single headless browser session reused for the whole crawl
pub struct WebDriverSession {
    client: Client,
    consent_pause: Duration,
}

impl WebDriverSession {
    /// Starts a browser session, trying the configured WebDriver URL first and
    /// then the conventional local endpoints.
    pub async fn connect(config: &BrowserConfig, consent_pause: Duration) -> Result<Self> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(capabilities(config));

        let first_error = match builder.connect(&config.webdriver_url).await {
            Ok(client) => {
                ::log::info!("Connected to WebDriver at {}", config.webdriver_url);
                return Ok(Self {
                    client,
                    consent_pause,
                });
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    config.webdriver_url,
                    e
                );
                e.to_string()
            }
        };

        for url in FALLBACK_WEBDRIVER_URLS {
            if *url == config.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            // Fallback failures are not logged individually
            if let Ok(client) = builder.connect(url).await {
                ::log::info!("Connected to fallback WebDriver at {}", url);
                return Ok(Self {
                    client,
                    consent_pause,
                });
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(CrawlError::SessionStart {
            url: config.webdriver_url.clone(),
            message: first_error,
        })
    }
}

/// Chrome capabilities for a headless, container-friendly session
fn capabilities(config: &BrowserConfig) -> Capabilities {
    let mut args = Vec::new();
    if config.headless {
        args.push("--headless".to_string());
    }
    args.extend(config.browser_args.iter().cloned());
    if let Some(user_agent) = &config.user_agent {
        args.push(format!("user-agent={}", user_agent));
    }

    let mut caps = Capabilities::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

fn command_error(action: &'static str, url: &str, error: fantoccini::error::CmdError) -> CrawlError {
    let error = CrawlError::browser(action, url, error);
    if error.is_lost_session() {
        ::log::warn!("Lost session while {} {}", action, url);
    }
    error
}

impl BrowserSession for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.client
            .goto(url)
            .await
            .map_err(|e| command_error("accessing", url, e))
    }

    async fn dismiss_consent(&mut self) -> ConsentOutcome {
        let Ok(button) = self.client.find(Locator::XPath(CONSENT_XPATH)).await else {
            return ConsentOutcome::NotPresent;
        };
        match button.click().await {
            Ok(()) => {
                ::log::debug!("-> Dismissed consent banner");
                tokio::time::sleep(self.consent_pause).await;
                ConsentOutcome::Dismissed
            }
            Err(e) => {
                ::log::debug!("-> Consent banner found but not clickable: {}", e);
                ConsentOutcome::NotPresent
            }
        }
    }

    async fn await_content_ready(&mut self, timeout: Duration) -> ReadyOutcome {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(CONTENT_READY_CSS))
            .await
        {
            Ok(_) => ReadyOutcome::Ready,
            Err(_) => ReadyOutcome::TimedOut,
        }
    }

    async fn current_url(&mut self) -> Result<String> {
        let url = self
            .client
            .current_url()
            .await
            .map_err(|e| command_error("reading the URL of", "current page", e))?;
        Ok(url.to_string())
    }

    async fn page_source(&mut self) -> Result<String> {
        self.client
            .source()
            .await
            .map_err(|e| command_error("getting source for", "current page", e))
    }

    async fn close(self) {
        ::log::info!("Closing WebDriver session");
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}
