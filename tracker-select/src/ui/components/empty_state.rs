//! Shared empty state message for the transactions table.

pub const EMPTY_STATE_MESSAGE: &str = "No transactions yet. Add your first one above!";

pub fn render_empty_state() -> String {
    EMPTY_STATE_MESSAGE.to_string()
}
