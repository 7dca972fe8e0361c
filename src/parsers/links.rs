use crate::filter::UrlFilter;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static anchor selector"));

/// Extracts the raw href values of all anchors in the markup
pub fn parse_hrefs(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&ANCHOR_SELECTOR)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect()
}

/// Resolves an href against the page URL and strips its fragment
pub fn resolve_href(page_url: &Url, href: &str) -> Option<Url> {
    let mut resolved = page_url.join(href.trim()).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}

/// Parses a rendered page's anchors into the set of absolute, in-scope URLs.
///
/// Relative, protocol-relative, and fragment-only hrefs are resolved against
/// `page_url`. Anything the filter rejects is dropped silently.
pub fn extract_links(
    html: &str,
    page_url: &str,
    scope_host: &str,
    filter: &UrlFilter,
) -> BTreeSet<String> {
    let Ok(base) = Url::parse(page_url) else {
        ::log::debug!("Cannot resolve links against unparseable page URL: {}", page_url);
        return BTreeSet::new();
    };

    let hrefs = parse_hrefs(html);
    ::log::trace!("Found {} anchors on {}", hrefs.len(), page_url);

    hrefs
        .iter()
        .filter_map(|href| resolve_href(&base, href))
        .filter(|url| filter.should_crawl(url, scope_host))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(html: &str, page_url: &str, scope: &str) -> BTreeSet<String> {
        extract_links(html, page_url, scope, &UrlFilter::default())
    }

    #[test]
    fn test_resolves_relative_paths() {
        let html = r#"<html><body><a href="../c">C</a><a href="d">D</a></body></html>"#;
        let result = links(html, "https://example.com/a/b", "example.com");

        assert!(result.contains("https://example.com/c"));
        assert!(result.contains("https://example.com/a/d"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_resolves_protocol_relative_and_absolute() {
        let html = r#"
            <a href="//example.com/x">x</a>
            <a href="https://example.com/y">y</a>
            <a href="/z">z</a>
        "#;
        let result = links(html, "https://example.com/", "example.com");

        let expected: BTreeSet<String> = [
            "https://example.com/x",
            "https://example.com/y",
            "https://example.com/z",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_strips_fragments_and_dedups() {
        let html = r##"
            <a href="#top">top</a>
            <a href="/page#one">one</a>
            <a href="/page#two">two</a>
            <a href="/page">plain</a>
        "##;
        let result = links(html, "https://example.com/start", "example.com");

        let expected: BTreeSet<String> = ["https://example.com/start", "https://example.com/page"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_applies_filter() {
        let html = r#"
            <a href="https://other.com/page">external</a>
            <a href="/zh/shop">chinese</a>
            <a href="/shop?ref=1">query</a>
            <a href="/account/login">login</a>
            <a href="mailto:info@example.com">mail</a>
            <a href="javascript:void(0)">js</a>
            <a href="/en/shop">shop</a>
        "#;
        let result = links(html, "https://example.com/", "example.com");

        assert_eq!(result.len(), 1);
        assert!(result.contains("https://example.com/en/shop"));
    }

    #[test]
    fn test_ignores_anchors_without_href() {
        let html = r#"<a name="anchor">no href</a><a href="/ok">ok</a>"#;
        let result = links(html, "https://example.com/", "example.com");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_unparseable_page_url() {
        let html = r#"<a href="/ok">ok</a>"#;
        assert!(links(html, "not a url", "example.com").is_empty());
    }

    #[test]
    fn test_parse_hrefs() {
        let html = r#"<a href="/one">1</a><a>2</a><a href="">3</a>"#;
        assert_eq!(parse_hrefs(html), vec!["/one".to_string(), String::new()]);
    }
}
