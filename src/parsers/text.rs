/// Normalizes whitespace within a single line or paragraph
pub fn normalize_whitespace(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Joins processed paragraphs one per line.
///
/// Empty paragraphs and a paragraph repeating the one right before it are
/// skipped, so the result is empty when nothing has content.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    let mut kept: Vec<&str> = Vec::with_capacity(paragraphs.len());

    for para in paragraphs {
        let para = para.trim();
        if para.is_empty() {
            continue;
        }
        if kept.last() == Some(&para) {
            continue;
        }
        kept.push(para);
    }

    kept.join("\n")
}

/// Joins text fragments after stripping each one, skipping the blanks
pub fn join_stripped<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the text contains any of the given marker strings
pub fn contains_marker(text: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| !marker.is_empty() && text.contains(marker.as_str()))
}
