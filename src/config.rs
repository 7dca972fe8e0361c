use crate::error::{CrawlError, Result};
use crate::filter::UrlFilterConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sites crawled when no seeds are configured
pub const DEFAULT_SEED_URLS: &[&str] = &[
    "https://www.changiairport.com/",
    "https://www.jewelchangiairport.com/",
];

pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Fixed politeness delay applied after every page load, in seconds
pub const DEFAULT_CRAWL_DELAY_SECS: u64 = 4;

pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_CONSENT_PAUSE_MS: u64 = 1000;

/// Path keywords that mark account and auth pages
pub const DEFAULT_EXCLUSION_KEYWORDS: &[&str] =
    &["login", "signin", "account", "register", "password"];

/// Path segments that mark non-default-language content
pub const DEFAULT_LOCALE_SEGMENTS: &[&str] = &["/zh/"];

pub const DEFAULT_OUTPUT_PATH: &str = "data/source_data.txt";

/// Text of the cookie banner that extraction sometimes mistakes for content
pub const COOKIE_BANNER_MARKER: &str = "Let’s give you the best experience possible";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Top-level configuration for a corpus crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// URLs to start crawling from; each defines its own scope host
    #[serde(default = "default_seed_urls")]
    pub seed_urls: Vec<String>,

    /// Maximum number of link hops from a seed
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Settle delay applied after the content-ready wait on every page
    #[serde(default = "default_crawl_delay_secs")]
    pub crawl_delay_secs: u64,

    /// Upper bound on the wait for a main-content landmark
    #[serde(default = "default_ready_timeout_secs")]
    pub ready_timeout_secs: u64,

    /// Pause after a consent banner was clicked away
    #[serde(default = "default_consent_pause_ms")]
    pub consent_pause_ms: u64,

    /// Where the corpus file is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Save raw markup of pages that yielded no text
    #[serde(default = "default_true")]
    pub debug_artifacts: bool,

    /// Directory for debug artifacts
    #[serde(default = "default_debug_dir")]
    pub debug_dir: PathBuf,

    #[serde(default)]
    pub filter: UrlFilterConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Configuration for the text extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Extracted text containing any of these is discarded as banner noise
    #[serde(default = "default_banner_markers")]
    pub banner_markers: Vec<String>,
}

/// Configuration for the WebDriver-backed browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    #[serde(default = "default_true")]
    pub headless: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: Option<String>,

    /// Extra command-line switches passed to the browser
    #[serde(default = "default_browser_args")]
    pub browser_args: Vec<String>,
}

fn default_seed_urls() -> Vec<String> {
    DEFAULT_SEED_URLS.iter().map(|s| s.to_string()).collect()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_crawl_delay_secs() -> u64 {
    DEFAULT_CRAWL_DELAY_SECS
}

fn default_ready_timeout_secs() -> u64 {
    DEFAULT_READY_TIMEOUT_SECS
}

fn default_consent_pause_ms() -> u64 {
    DEFAULT_CONSENT_PAUSE_MS
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_debug_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_banner_markers() -> Vec<String> {
    vec![COOKIE_BANNER_MARKER.to_string()]
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_user_agent() -> Option<String> {
    Some(DEFAULT_USER_AGENT.to_string())
}

fn default_browser_args() -> Vec<String> {
    vec![
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
    ]
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed_urls: default_seed_urls(),
            max_depth: DEFAULT_MAX_DEPTH,
            crawl_delay_secs: DEFAULT_CRAWL_DELAY_SECS,
            ready_timeout_secs: DEFAULT_READY_TIMEOUT_SECS,
            consent_pause_ms: DEFAULT_CONSENT_PAUSE_MS,
            output_path: default_output_path(),
            debug_artifacts: true,
            debug_dir: default_debug_dir(),
            filter: UrlFilterConfig::default(),
            extraction: ExtractionConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            banner_markers: default_banner_markers(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: true,
            user_agent: default_user_agent(),
            browser_args: default_browser_args(),
        }
    }
}

impl CrawlerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source| CrawlError::ConfigRead {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(read_err)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(read_err)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn crawl_delay(&self) -> Duration {
        Duration::from_secs(self.crawl_delay_secs)
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_secs(self.ready_timeout_secs)
    }

    pub fn consent_pause(&self) -> Duration {
        Duration::from_millis(self.consent_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.seed_urls.len(), 2);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.crawl_delay(), Duration::from_secs(4));
        assert_eq!(config.output_path, PathBuf::from("data/source_data.txt"));
        assert_eq!(
            config.filter.exclusion_keywords,
            vec!["login", "signin", "account", "register", "password"]
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = CrawlerConfig::from_json(
            r#"{"seed_urls": ["https://example.com/"], "max_depth": 1, "browser": {"headless": false}}"#,
        )
        .unwrap();

        assert_eq!(config.seed_urls, vec!["https://example.com/"]);
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.crawl_delay_secs, DEFAULT_CRAWL_DELAY_SECS);
        assert!(!config.browser.headless);
        assert_eq!(config.browser.webdriver_url, "http://localhost:4444");
        assert_eq!(config.extraction.banner_markers, vec![COOKIE_BANNER_MARKER]);
    }

    #[test]
    fn test_invalid_json() {
        let err = CrawlerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CrawlError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CrawlerConfig::from_file("/nonexistent/crawler.json").unwrap_err();
        assert!(matches!(err, CrawlError::ConfigRead { .. }));
    }
}
