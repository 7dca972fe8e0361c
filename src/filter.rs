use crate::config::{DEFAULT_EXCLUSION_KEYWORDS, DEFAULT_LOCALE_SEGMENTS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for URL filtering in crawlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlFilterConfig {
    /// Case-insensitive path substrings that mark account/auth pages
    #[serde(default = "default_exclusion_keywords")]
    pub exclusion_keywords: Vec<String>,

    /// Case-insensitive path substrings that mark non-default-language pages
    #[serde(default = "default_locale_segments")]
    pub locale_segments: Vec<String>,

    /// Extra regex patterns matched against the full URL
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

fn default_exclusion_keywords() -> Vec<String> {
    DEFAULT_EXCLUSION_KEYWORDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_locale_segments() -> Vec<String> {
    DEFAULT_LOCALE_SEGMENTS.iter().map(|s| s.to_string()).collect()
}

impl Default for UrlFilterConfig {
    fn default() -> Self {
        Self {
            exclusion_keywords: default_exclusion_keywords(),
            locale_segments: default_locale_segments(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Decides whether a candidate URL is in scope and worth crawling
#[derive(Debug)]
pub struct UrlFilter {
    exclusion_keywords: Vec<String>,
    locale_segments: Vec<String>,
    exclude_regexes: Vec<Regex>,
}

impl Default for UrlFilter {
    fn default() -> Self {
        let config = UrlFilterConfig::default();
        Self {
            exclusion_keywords: lowercased(&config.exclusion_keywords),
            locale_segments: lowercased(&config.locale_segments),
            exclude_regexes: Vec::new(),
        }
    }
}

fn lowercased(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: &UrlFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            exclusion_keywords: lowercased(&config.exclusion_keywords),
            locale_segments: lowercased(&config.locale_segments),
            exclude_regexes,
        })
    }

    /// Determine if a URL string should be crawled from a seed with the given scope host.
    ///
    /// Unparseable candidates are rejected without logging.
    pub fn is_valid(&self, candidate: &str, scope_host: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        match Url::parse(candidate) {
            Ok(url) => self.should_crawl(&url, scope_host),
            Err(_) => false,
        }
    }

    /// Determine if a parsed URL should be crawled based on all filtering rules
    pub fn should_crawl(&self, url: &Url, scope_host: &str) -> bool {
        if !is_in_scope(url, scope_host) {
            return false;
        }

        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        let path = url.path().to_lowercase();

        if self
            .locale_segments
            .iter()
            .any(|segment| path.contains(segment.as_str()))
        {
            return false;
        }

        // Any non-empty query string marks a parameterized variant
        if url.query().is_some_and(|query| !query.is_empty()) {
            return false;
        }

        if self
            .exclusion_keywords
            .iter()
            .any(|keyword| path.contains(keyword.as_str()))
        {
            return false;
        }

        let url_str = url.as_str();
        !self.exclude_regexes.iter().any(|re| re.is_match(url_str))
    }

    /// Create a normalized version of the URL (fragment removed)
    pub fn normalize_url(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }
}

/// Checks a candidate against the default exclusion rules
pub fn is_valid_url(candidate: &str, scope_host: &str) -> bool {
    UrlFilter::default().is_valid(candidate, scope_host)
}

/// The network location of a URL: host, plus the port when it is not the scheme default
pub fn scope_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Check if a URL lives on the given scope host
pub fn is_in_scope(url: &Url, scope: &str) -> bool {
    scope_host(url).is_some_and(|host| host == scope)
}
