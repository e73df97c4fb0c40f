use scraper::Html;

/// Reduce a pre-rendered HTML fragment to plain text for the terminal
pub fn strip_tags(html: &str) -> String {
    Html::parse_fragment(html)
        .root_element()
        .text()
        .collect::<String>()
}
