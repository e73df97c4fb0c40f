use crate::state::AppState;

/// Count label, plus the bulk actions while anything is selected
pub fn render_selection_bar(state: &AppState) -> String {
    let summary = state.selection.summary_text();
    if state.bulk_actions_visible() {
        format!(
            "{} ({})  |  delete-selected  clear",
            summary,
            state.selection.len()
        )
    } else {
        summary
    }
}
