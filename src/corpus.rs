use crate::error::{CrawlError, Result};
use crate::results::PageRecord;
use std::path::Path;

/// Line written after every record
pub fn separator_line() -> String {
    "=".repeat(80)
}

/// Serializes records in collection order
pub fn render_corpus(records: &[PageRecord]) -> String {
    let separator = separator_line();
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "URL: {}\n\n{}\n\n{}\n\n",
            record.url, record.text, separator
        ));
    }
    out
}

/// Writes the corpus to `output_path` in one go, replacing any existing file
/// and creating the parent directory if needed.
pub fn write_corpus(records: &[PageRecord], output_path: &Path) -> Result<()> {
    let output_err = |source| CrawlError::Output {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(output_err)?;
        }
    }

    std::fs::write(output_path, render_corpus(records)).map_err(output_err)?;
    ::log::info!(
        "Wrote {} pages to {}",
        records.len(),
        output_path.display()
    );
    Ok(())
}
