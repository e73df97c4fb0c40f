use crate::events::DeleteTarget;

/// Question asked before a delete is sent
pub fn confirmation_prompt(target: &DeleteTarget) -> String {
    match target {
        DeleteTarget::One(_) => "Are you sure you want to delete this transaction?".to_string(),
        DeleteTarget::Many(ids) => format!(
            "Are you sure you want to delete {} transaction(s)?",
            ids.len()
        ),
        DeleteTarget::All => {
            "Are you sure you want to delete ALL transactions? This action cannot be undone."
                .to_string()
        }
    }
}

/// Prompt plus the accepted answers, as shown on the terminal
pub fn render_delete_confirmation(target: &DeleteTarget) -> String {
    format!("{} [y/N] ", confirmation_prompt(target))
}
