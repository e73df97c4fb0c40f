use itertools::Itertools;

use crate::utils::html::strip_tags;

/// Spending insights, one plain-text line per message
pub fn render_feed(feed: &[String]) -> String {
    feed.iter()
        .map(|message| format!("- {}", strip_tags(message)))
        .join("\n")
}
