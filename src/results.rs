use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Text extracted from one crawled page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Final URL of the page, after redirects
    pub url: String,

    /// Extracted text content, never empty
    pub text: String,
}

impl PageRecord {
    /// Create a new page record
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Pages a navigation was issued for
    pub pages_visited: usize,

    /// Pages that produced a record
    pub pages_recorded: usize,

    /// Pages abandoned because of a browser failure
    pub pages_failed: usize,

    pub output_path: PathBuf,
}
