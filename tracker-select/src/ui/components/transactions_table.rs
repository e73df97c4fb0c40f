use itertools::Itertools;

use super::empty_state::render_empty_state;
use crate::state::PageState;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Header checkbox followed by one line per bound row
pub fn render_transactions_table(page: &PageState) -> String {
    let Some(rows) = page.rows.as_ref() else {
        return "(no rows shown, pass --rows to bind table rows)".to_string();
    };

    if page.is_empty_state() {
        return render_empty_state();
    }

    let header = format!("{} select all", checkbox(page.select_all_checked));
    let body = rows
        .iter()
        .map(|row| format!("{} #{}", checkbox(row.checked), row.id))
        .join("\n");
    format!("{}\n{}", header, body)
}
