use crate::parsers::text::{join_stripped, normalize_whitespace};
use scraper::Html;

/// Elements dropped before the structural fallback reads the page
const FALLBACK_EXCLUDED_TAGS: &[&str] = &["nav", "footer", "script", "style"];

/// Structural fallback: every text node of the document outside navigation,
/// footers, scripts and styles, each stripped and joined with single spaces.
///
/// Never fails; malformed markup is repaired by the HTML5 parser and an
/// input without readable text yields an empty string.
pub fn fallback_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let fragments = doc.root_element().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let excluded = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| FALLBACK_EXCLUDED_TAGS.contains(&e.name()))
        });
        if excluded { None } else { Some(&**text) }
    });

    normalize_whitespace(&join_stripped(fragments))
}
