pub mod content;
pub mod html;
pub mod links;
pub mod text;

#[cfg(test)]
mod tests;

pub use links::extract_links;

use crate::config::ExtractionConfig;

/// Which path produced an extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Main-content extraction found text
    Primary,
    /// Main-content output was cookie-banner noise and was thrown away
    Discarded,
    /// Main-content extraction found nothing; the structural fallback was used
    Fallback,
}

/// Result of extracting text from a page
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Extracted text content, possibly empty
    pub text: String,
    pub method: ExtractionMethod,
}

/// Converts rendered markup into clean prose
#[derive(Debug, Clone)]
pub struct TextExtractor {
    banner_markers: Vec<String>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl TextExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            banner_markers: config.banner_markers.clone(),
        }
    }

    /// Extracts the readable text of a page, or an empty string
    pub fn extract(&self, html: &str, url: &str) -> String {
        self.extract_detailed(html, url).text
    }

    /// Extracts text and reports which strategy produced it
    pub fn extract_detailed(&self, html: &str, url: &str) -> Extraction {
        if let Some(text) = content::extract_main_text(html, url) {
            if text::contains_marker(&text, &self.banner_markers) {
                ::log::info!("-> Discarding cookie banner text from: {}", url);
                return Extraction {
                    text: String::new(),
                    method: ExtractionMethod::Discarded,
                };
            }
            return Extraction {
                text: text.trim().to_string(),
                method: ExtractionMethod::Primary,
            };
        }

        ::log::debug!(
            "-> Main content extraction failed for {}, using basic text extraction",
            url
        );
        Extraction {
            text: html::fallback_text(html),
            method: ExtractionMethod::Fallback,
        }
    }
}

/// Extracts page text with the default banner markers
pub fn extract_text(html: &str, url: &str) -> String {
    TextExtractor::default().extract(html, url)
}
