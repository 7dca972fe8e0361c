use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while configuring, running, or persisting a crawl
#[derive(Error, Debug)]
pub enum CrawlError {
    /// No WebDriver endpoint accepted a new session
    #[error("failed to start browser session at {url}: {message}")]
    SessionStart { url: String, message: String },

    /// A browser command failed for a specific page
    #[error("browser failed while {action} {url}: {message}")]
    Browser {
        action: &'static str,
        url: String,
        message: String,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid exclusion pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The corpus file could not be written
    #[error("failed to write corpus to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    pub fn browser(action: &'static str, url: &str, error: impl std::fmt::Display) -> Self {
        Self::Browser {
            action,
            url: url.to_string(),
            message: error.to_string(),
        }
    }

    /// Whether the error reports that the WebDriver session itself is gone
    pub fn is_lost_session(&self) -> bool {
        match self {
            Self::Browser { message, .. } => message.contains("Unable to find session"),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_session_detection() {
        let lost = CrawlError::browser("accessing", "https://example.com/", "Unable to find session with ID abc");
        assert!(lost.is_lost_session());

        let other = CrawlError::browser("accessing", "https://example.com/", "net::ERR_NAME_NOT_RESOLVED");
        assert!(!other.is_lost_session());
        assert_eq!(
            other.to_string(),
            "browser failed while accessing https://example.com/: net::ERR_NAME_NOT_RESOLVED"
        );
    }
}
