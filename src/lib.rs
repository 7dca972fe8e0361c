pub mod config;
pub mod corpus;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::CrawlerConfig;
pub use error::{CrawlError, Result};
pub use results::{PageRecord, RunSummary};

use crawlers::{CrawlController, WebDriverSession};
use std::path::{Path, PathBuf};

/// Main builder for a corpus crawl
pub struct Crawl {
    config: CrawlerConfig,
}

impl Default for Crawl {
    fn default() -> Self {
        Self::new(CrawlerConfig::default())
    }
}

impl Crawl {
    /// Create a new builder from a configuration
    pub fn new(config: CrawlerConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(CrawlerConfig::from_file(path)?))
    }

    /// Replace the seed URLs
    pub fn with_seeds(mut self, seeds: Vec<String>) -> Self {
        self.config.seed_urls = seeds;
        self
    }

    /// Set the maximum number of link hops from a seed
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set the per-page settle delay
    pub fn with_crawl_delay(mut self, seconds: u64) -> Self {
        self.config.crawl_delay_secs = seconds;
        self
    }

    /// Set where the corpus is written
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the WebDriver endpoint
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.browser.webdriver_url = url.into();
        self
    }

    /// Enable or disable saving markup of pages without text
    pub fn with_debug_artifacts(mut self, enabled: bool) -> Self {
        self.config.debug_artifacts = enabled;
        self
    }

    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Run the crawl and write the corpus.
    ///
    /// The browser session is closed exactly once before the corpus is written,
    /// whatever happened to individual pages and even if the crawl panics.
    pub async fn run(self) -> Result<RunSummary> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.browser.webdriver_url = webdriver_url;
            }
        }

        let mut controller = CrawlController::new(&config)?;

        ::log::info!("Setting up WebDriver session...");
        let session = WebDriverSession::connect(&config.browser, config.consent_pause()).await?;

        controller
            .crawl_and_close(session, &config.seed_urls)
            .await;

        let summary = RunSummary {
            pages_visited: controller.pages_visited(),
            pages_recorded: controller.corpus().len(),
            pages_failed: controller.pages_failed(),
            output_path: config.output_path.clone(),
        };

        println!(
            "\nCrawling complete. Writing {} pages to {}...",
            summary.pages_recorded,
            config.output_path.display()
        );
        corpus::write_corpus(controller.corpus(), &config.output_path)?;

        Ok(summary)
    }
}
