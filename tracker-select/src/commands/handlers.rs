use crate::cli::Command;
use crate::events::{AppCommand, DeleteTarget};

/// Map a command-line action to the AppCommands it stands for
///
/// Rows are bound separately, before these run. Deletes only *request*
/// confirmation here; the caller decides whether to confirm.
pub fn handle_cli_command(command: &Command) -> Vec<AppCommand> {
    match command {
        Command::Status => Vec::new(),
        Command::Select { ids } => ids
            .iter()
            .map(|&id| AppCommand::ToggleRow { id, selected: true })
            .collect(),
        Command::Unselect { ids } => ids
            .iter()
            .map(|&id| AppCommand::ToggleRow {
                id,
                selected: false,
            })
            .collect(),
        Command::SelectAll => vec![AppCommand::SetSelectAllCheckbox { checked: true }],
        Command::UnselectAll => vec![AppCommand::SetSelectAllCheckbox { checked: false }],
        Command::Clear => vec![AppCommand::ClearSelection],
        Command::Delete { id } => vec![AppCommand::RequestDelete(DeleteTarget::One(*id))],
        Command::DeleteSelected => vec![AppCommand::RequestDeleteSelected],
        Command::DeleteAll => vec![AppCommand::RequestDelete(DeleteTarget::All)],
        Command::Refresh => vec![AppCommand::RefreshSummaries],
        Command::Reload => vec![AppCommand::ReloadSelection],
    }
}

/// Answer to a confirmation prompt; anything but "y"/"yes" cancels
pub fn handle_confirmation_answer(answer: &str) -> AppCommand {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => AppCommand::ConfirmDelete,
        _ => AppCommand::CancelDelete,
    }
}
