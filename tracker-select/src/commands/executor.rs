use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::{AppCommand, DeleteTarget};
use crate::state::selection::SelectionDelta;
use crate::state::AppState;

/// Execute a command, spawning background tasks for remote work
///
/// Returns the selection change to persist, if any.
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) -> Option<SelectionDelta> {
    match command {
        AppCommand::ConfirmDelete => {
            let target = begin_delete(state)?;

            let data_loader = data_loader.clone();
            let task_name = format!("delete {}", target);
            let future = async move {
                data_loader.delete(target).await;
            };

            task_manager.spawn_task(task_name, future);
            None
        }

        AppCommand::RefreshSummaries => {
            let data_loader = data_loader.clone();
            let future = async move {
                data_loader.refresh_summaries().await;
            };

            task_manager.spawn_task("refresh_summaries".to_string(), future);
            None
        }

        command => execute_command_sync(command, state),
    }
}

/// Take the pending confirmation and count it as in flight
///
/// Returns `None` when nothing was awaiting confirmation.
pub fn begin_delete(state: &mut AppState) -> Option<DeleteTarget> {
    let Some(target) = state.pending_confirmation.take() else {
        tracing::debug!("Confirm without a pending delete, ignoring");
        return None;
    };

    tracing::info!("Deleting {}", target);
    state.deletes_in_flight += 1;
    Some(target)
}

/// Execute a command synchronously (state transitions only, no background tasks)
///
/// Used by `execute_command` for everything that does not touch the network,
/// and directly by the testing module.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<SelectionDelta> {
    match command {
        // Table rows
        AppCommand::BindRows { ids } => {
            tracing::debug!("Binding {} rows", ids.len());
            state.page.bind(ids, &state.selection);
            None
        }
        AppCommand::ToggleRow { id, selected } => {
            let delta = state.selection.toggle(id, selected);
            state.page.sync_checkboxes(&state.selection);
            Some(delta)
        }
        AppCommand::SetSelectAllCheckbox { checked } => {
            let row_ids = state.page.row_ids();
            let delta = if checked {
                state.selection.select_all(row_ids)
            } else {
                state.selection.remove_all(row_ids)
            };
            state.page.select_all_checked = checked;
            state.page.sync_checkboxes(&state.selection);
            Some(delta)
        }
        AppCommand::SelectAllRows => {
            let delta = state.selection.select_all(state.page.row_ids());
            state.page.select_all_checked = true;
            state.page.sync_checkboxes(&state.selection);
            Some(delta)
        }
        AppCommand::ClearSelection => {
            let delta = state.selection.clear();
            state.page.select_all_checked = false;
            state.page.sync_checkboxes(&state.selection);
            Some(delta)
        }
        AppCommand::ReloadSelection => {
            // Needs the store; AppCore handles it before dispatching here
            tracing::debug!("ReloadSelection reached the executor, ignoring");
            None
        }

        // Deletion
        AppCommand::RequestDelete(target) => {
            request_delete(state, target);
            None
        }
        AppCommand::RequestDeleteSelected => {
            let selected = state.selection.ids();
            request_delete(state, DeleteTarget::Many(selected));
            None
        }
        AppCommand::CancelDelete => {
            if let Some(target) = state.pending_confirmation.take() {
                tracing::debug!("Cancelled delete of {}", target);
            }
            None
        }
        remote @ (AppCommand::ConfirmDelete | AppCommand::RefreshSummaries) => {
            tracing::debug!("{:?} needs a background task, ignoring in sync mode", remote);
            None
        }

        // Page chrome
        AppCommand::ShowImportWindow => {
            state.modals.import_open = true;
            None
        }
        AppCommand::CloseImportWindow => {
            state.modals.import_open = false;
            None
        }
        AppCommand::ShowSearchInfo => {
            state.modals.search_info_open = true;
            None
        }
        AppCommand::CloseSearchInfo => {
            state.modals.search_info_open = false;
            None
        }
        AppCommand::ToggleExportOptions => {
            state.modals.export_options_visible = !state.modals.export_options_visible;
            None
        }
        AppCommand::ExpireNotifications { now } => {
            state.notifications.retain(|n| !n.is_expired(now));
            None
        }
    }
}

fn request_delete(state: &mut AppState, target: DeleteTarget) {
    if matches!(&target, DeleteTarget::Many(ids) if ids.is_empty()) {
        tracing::debug!("Nothing selected, not requesting bulk delete");
        return;
    }
    tracing::debug!("Awaiting confirmation to delete {}", target);
    state.pending_confirmation = Some(target);
}
