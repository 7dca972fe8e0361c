use crate::config::{COOKIE_BANNER_MARKER, ExtractionConfig};
use crate::parsers::{ExtractionMethod, TextExtractor, extract_text};

const URL: &str = "https://www.jewelchangiairport.com/en/attractions.html";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_extraction() {
        let html = r#"<html><body>
            <nav><a href="/">Home</a></nav>
            <main><h2>Canopy Park</h2><p>Bounce on the sky nets above the forest valley.</p></main>
        </body></html>"#;

        let extraction = TextExtractor::default().extract_detailed(html, URL);
        assert_eq!(extraction.method, ExtractionMethod::Primary);
        assert_eq!(
            extraction.text,
            "Canopy Park\nBounce on the sky nets above the forest valley."
        );
    }

    #[test]
    fn test_cookie_banner_suppressed() {
        let html = format!(
            r#"<html><body><main><p>{} We use cookies to improve your visit.</p></main></body></html>"#,
            COOKIE_BANNER_MARKER
        );

        let extraction = TextExtractor::default().extract_detailed(&html, URL);
        assert_eq!(extraction.method, ExtractionMethod::Discarded);
        assert_eq!(extraction.text, "");
        assert_eq!(extract_text(&html, URL), "");
    }

    #[test]
    fn test_custom_banner_markers() {
        let extractor = TextExtractor::new(&ExtractionConfig {
            banner_markers: vec!["Accept all cookies".to_string()],
        });
        let html = "<main><p>Accept all cookies to continue</p></main>";
        assert_eq!(extractor.extract(html, URL), "");

        let html = "<main><p>Shops open at 10am</p></main>";
        assert_eq!(extractor.extract(html, URL), "Shops open at 10am");
    }

    #[test]
    fn test_fallback_when_primary_finds_nothing() {
        let html = r#"<html><body>
            <nav>Menu Shop Dine</nav>
            <div>Rain Vortex: 8pm</div>
            <script>console.log("tracking")</script>
            <style>.x { color: red }</style>
            <footer>Copyright Jewel</footer>
        </body></html>"#;

        let extraction = TextExtractor::default().extract_detailed(html, URL);
        assert_eq!(extraction.method, ExtractionMethod::Fallback);
        assert_eq!(extraction.text, "Rain Vortex: 8pm");
    }

    #[test]
    fn test_fallback_not_checked_for_banner() {
        let html = format!("<span>{}</span>", COOKIE_BANNER_MARKER);
        let extraction = TextExtractor::default().extract_detailed(&html, URL);
        assert_eq!(extraction.method, ExtractionMethod::Fallback);
        assert_eq!(extraction.text, COOKIE_BANNER_MARKER);
    }

    #[test]
    fn test_card_page_keeps_all_cards() {
        let html = r#"<html><body>
            <header><a href="/">Jewel</a></header>
            <main>
                <h2>Attractions</h2>
                <p>Jewel has gardens, walking trails, and play areas spread over five storeys.</p>
                <article><p>Card: Canopy Bridge</p></article>
                <article><p>Card: Hedge Maze and Mirror Maze</p></article>
                <article><p>Card: Shiseido Forest Valley</p></article>
            </main>
        </body></html>"#;

        let extraction = TextExtractor::default().extract_detailed(html, URL);
        assert_eq!(extraction.method, ExtractionMethod::Primary);
        assert!(extraction.text.contains("five storeys"));
        assert!(extraction.text.contains("Card: Canopy Bridge"));
        assert!(extraction.text.contains("Card: Hedge Maze and Mirror Maze"));
        assert!(extraction.text.contains("Card: Shiseido Forest Valley"));
    }

    #[test]
    fn test_empty_page() {
        let extraction = TextExtractor::default().extract_detailed("<html><body></body></html>", URL);
        assert_eq!(extraction.method, ExtractionMethod::Fallback);
        assert!(extraction.text.is_empty());
    }

    #[test]
    fn test_arbitrary_markup_never_panics() {
        let inputs = [
            "<<<>>>",
            "<p",
            "</div></div></div>",
            "<table><p>misplaced</table>",
            "\u{0000}<html>\u{feff}",
            "<svg><p>inside svg</p></svg>",
        ];
        for html in inputs {
            let _ = extract_text(html, URL);
        }
    }
}
