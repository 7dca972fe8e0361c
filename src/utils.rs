use std::path::{Path, PathBuf};
use url::Url;

/// File name for the raw markup of a page that yielded no text:
/// `debug_` followed by the URL path with slashes turned into underscores
pub fn debug_artifact_name(url: &str) -> String {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_default();
    format!("debug_{}.html", path.replace('/', "_"))
}

/// Best-effort write of a debug artifact into `dir`.
///
/// Returns the written path, or `None` if the file could not be written.
pub fn write_debug_artifact(dir: &Path, url: &str, html: &str) -> Option<PathBuf> {
    let path = dir.join(debug_artifact_name(url));
    match std::fs::write(&path, html) {
        Ok(()) => Some(path),
        Err(e) => {
            ::log::warn!("-> Could not save debug HTML to {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_artifact_name() {
        assert_eq!(
            debug_artifact_name("https://www.changiairport.com/en/shop.html"),
            "debug__en_shop.html.html"
        );
        assert_eq!(debug_artifact_name("https://example.com/"), "debug__.html");
        assert_eq!(debug_artifact_name("https://example.com"), "debug__.html");
        assert_eq!(debug_artifact_name("not a url"), "debug_.html");
    }

    #[test]
    fn test_write_debug_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_debug_artifact(dir.path(), "https://example.com/a/b", "<html></html>")
            .unwrap();

        assert_eq!(path, dir.path().join("debug__a_b.html"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_debug_artifact_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(write_debug_artifact(&missing, "https://example.com/a", "x").is_none());
    }
}
