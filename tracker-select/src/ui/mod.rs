pub mod components;

use crate::state::AppState;
use components::*;

/// Pure render of the whole page - never mutates state
pub fn render_page(state: &AppState) -> String {
    let mut sections = vec![
        selection_bar::render_selection_bar(state),
        transactions_table::render_transactions_table(&state.page),
    ];

    if let Some(summary) = state.analytics.as_ref() {
        sections.push(analytics::render_analytics(summary));
    }

    if !state.feed.is_empty() {
        sections.push(format!(
            "Spending insights\n{}",
            feed::render_feed(&state.feed)
        ));
    }

    if let Some(open) = modals::render_modals(&state.modals) {
        sections.push(open);
    }

    if !state.notifications.is_empty() {
        let lines: Vec<String> = state
            .notifications
            .iter()
            .map(notifications::render_notification)
            .collect();
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NotificationKind;
    use crate::state::selection::SelectionSet;
    use tracker_api::endpoints::{analytics::AnalyticsSummary, TransactionId};

    fn ids(raw: &[i64]) -> Vec<TransactionId> {
        raw.iter().copied().map(TransactionId::new).collect()
    }

    #[test]
    fn renders_selection_and_rows() {
        let selection: SelectionSet = ids(&[2]).into_iter().collect();
        let mut state = AppState::with_selection(selection.clone());
        state.page.bind(ids(&[1, 2]), &selection);

        let page = render_page(&state);
        assert!(page.starts_with("1 transaction selected (1)"));
        assert!(page.contains("[ ] select all\n[ ] #1\n[x] #2"));
    }

    #[test]
    fn hides_bulk_actions_without_selection() {
        let state = AppState::new();
        assert_eq!(
            selection_bar::render_selection_bar(&state),
            "No transactions selected"
        );
    }

    #[test]
    fn renders_empty_state_after_last_row_removed() {
        let mut state = AppState::new();
        state.page.bind(ids(&[1]), &SelectionSet::new());
        state.page.remove_rows(&ids(&[1]));

        assert!(render_page(&state).contains("No transactions yet. Add your first one above!"));
    }

    #[test]
    fn renders_open_modals_only() {
        let mut state = AppState::new();
        assert!(!render_page(&state).contains("Import window open"));

        state.modals.import_open = true;
        state.modals.export_options_visible = true;
        let page = render_page(&state);
        assert!(page.contains("Import window open\nExport options shown"));
        assert!(!page.contains("Search help open"));
    }

    #[test]
    fn renders_summaries_and_notifications() {
        let mut state = AppState::new();
        state.analytics = Some(AnalyticsSummary {
            transactions_count: 4,
            expense_count: 3,
            income_count: 1,
        });
        state.feed = vec!["You spent <b>$5</b> on Food &amp; Drinks".to_string()];
        state.notify(NotificationKind::Success, "Transaction deleted successfully");
        state.notify(NotificationKind::Warning, "Error updating analytics");

        let page = render_page(&state);
        assert!(page.contains("Transactions: 4  Expenses: 3  Income: 1"));
        assert!(page.contains("- You spent $5 on Food & Drinks"));
        assert!(page.contains("✓ Transaction deleted successfully\n! Error updating analytics"));
    }
}
