use tracker_api::endpoints::{MutationAck, TransactionId};
use tracker_select::events::{AppCommand, DeleteFailure, DeleteTarget};
use tracker_select::state::NotificationKind;
use tracker_select::storage::{KeyValueStore, MemoryStore, SELECTION_KEY};
use tracker_select::testing::{tx_ids, RemoteCall, TestApp};
use tracker_select::ui::render_page;

fn ack(message: &str) -> MutationAck {
    MutationAck {
        message: Some(message.to_string()),
        deleted_count: None,
    }
}

#[test]
fn test_starts_from_stored_selection() {
    let app = TestApp::with_stored_selection("[3, 1]");
    assert_eq!(app.selected(), vec![1, 3]);
    assert_eq!(app.state().selection.summary_text(), "2 transactions selected");
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let app = TestApp::with_stored_selection("not json");
    assert!(app.selected().is_empty());
    assert_eq!(app.state().selection.summary_text(), "No transactions selected");
}

#[test]
fn test_toggle_sequence_persists_last_state() {
    let mut app = TestApp::new();
    app.bind_rows(&[1, 2, 3]);

    app.toggle(1, true);
    app.toggle(2, true);
    app.toggle(1, false);
    app.toggle(3, true);
    app.toggle(3, true);

    app.assert_selected(&[2, 3]);
    assert_eq!(app.stored_raw().as_deref(), Some("[2,3]"));
}

#[test]
fn test_select_all_then_clear() {
    let mut app = TestApp::new();
    app.bind_rows(&[1, 2, 3]);

    app.dispatch(AppCommand::SelectAllRows);
    app.assert_selected(&[1, 2, 3]);
    assert!(app.state().page.select_all_checked);

    app.dispatch(AppCommand::ClearSelection);
    app.assert_selected(&[]);
    assert!(!app.state().bulk_actions_visible());
    assert_eq!(app.stored_raw().as_deref(), Some("[]"));
}

#[test]
fn test_rebinding_rows_restores_checkboxes() {
    let mut app = TestApp::with_stored_selection("[2]");
    app.bind_rows(&[1, 2]);
    app.bind_rows(&[2, 3]);

    let rows = app.state().page.rows.clone().unwrap();
    assert_eq!(rows[0].id, TransactionId::new(2));
    assert!(rows[0].checked);
    assert!(!rows[1].checked);
}

#[test]
fn test_delete_one_success() {
    let mut app = TestApp::with_stored_selection("[5, 6]");
    app.bind_rows(&[5, 6]);

    app.delete(DeleteTarget::One(TransactionId::new(5)));
    assert_eq!(
        app.remote_calls(),
        &[RemoteCall::Delete(DeleteTarget::One(TransactionId::new(5)))]
    );
    assert_eq!(app.state().deletes_in_flight, 1);

    app.resolve_delete(Ok(ack("Transaction deleted successfully")));

    app.assert_selected(&[6]);
    assert_eq!(app.state().page.row_ids(), tx_ids(&[6]));
    assert_eq!(app.state().deletes_in_flight, 0);
    assert!(app.state().analytics.is_some());
    app.assert_last_notification("Transaction deleted successfully");
}

#[test]
fn test_delete_one_rejected_leaves_selection() {
    let mut app = TestApp::with_stored_selection("[5]");
    app.bind_rows(&[5]);

    app.delete(DeleteTarget::One(TransactionId::new(5)));
    app.resolve_delete(Err(DeleteFailure::Rejected(Some(
        "Transaction is locked".to_string(),
    ))));

    app.assert_selected(&[5]);
    assert_eq!(app.state().page.row_ids(), tx_ids(&[5]));
    assert!(app.state().analytics.is_none());
    app.assert_last_notification("Error deleting transaction: Transaction is locked");
}

#[test]
fn test_network_failure_leaves_selection() {
    let mut app = TestApp::with_stored_selection("[1, 2]");
    app.bind_rows(&[1, 2]);

    app.dispatch(AppCommand::RequestDeleteSelected);
    app.dispatch(AppCommand::ConfirmDelete);
    app.resolve_delete(Err(DeleteFailure::Network));

    app.assert_selected(&[1, 2]);
    app.assert_last_notification("Network error. Please try again.");
    assert_eq!(
        app.state().notifications.last().unwrap().kind,
        NotificationKind::Error
    );
}

#[test]
fn test_delete_many_removes_requested_ids() {
    let mut app = TestApp::with_stored_selection("[1, 2, 3]");
    app.bind_rows(&[1, 2, 3]);

    app.dispatch(AppCommand::RequestDeleteSelected);
    assert_eq!(
        app.state().pending_confirmation,
        Some(DeleteTarget::Many(tx_ids(&[1, 2, 3])))
    );
    app.dispatch(AppCommand::ConfirmDelete);
    app.resolve_delete(Ok(ack("3 transaction(s) deleted successfully")));

    app.assert_selected(&[]);
    assert!(app.state().page.is_empty_state());
    assert!(render_page(app.state()).contains("No transactions yet. Add your first one above!"));
}

#[test]
fn test_delete_many_keeps_other_ids() {
    let mut app = TestApp::with_stored_selection("[1, 2, 3, 4]");
    app.bind_rows(&[1, 2, 3, 4]);

    app.delete(DeleteTarget::Many(tx_ids(&[1, 2, 3])));
    app.resolve_delete(Ok(ack("3 transaction(s) deleted successfully")));

    app.assert_selected(&[4]);
    assert_eq!(app.state().page.row_ids(), tx_ids(&[4]));
}

#[test]
fn test_delete_all_clears_selection_unconditionally() {
    let mut app = TestApp::with_stored_selection("[1, 99]");
    app.bind_rows(&[1, 2]);

    app.delete(DeleteTarget::All);
    app.resolve_delete(Ok(ack("2 transaction(s) deleted successfully")));

    app.assert_selected(&[]);
    assert!(app.state().page.is_empty_state());
}

#[test]
fn test_delete_all_rejected_without_reason() {
    let mut app = TestApp::with_stored_selection("[1]");
    app.delete(DeleteTarget::All);
    app.resolve_delete(Err(DeleteFailure::Rejected(None)));

    app.assert_selected(&[1]);
    app.assert_last_notification("Error: Failed to delete transactions");
}

#[test]
fn test_cancelled_delete_sends_nothing() {
    let mut app = TestApp::with_stored_selection("[1]");
    app.dispatch(AppCommand::RequestDelete(DeleteTarget::All));
    app.dispatch(AppCommand::CancelDelete);
    app.dispatch(AppCommand::ConfirmDelete);

    assert!(app.remote_calls().is_empty());
    app.assert_selected(&[1]);
}

#[test]
fn test_empty_bulk_delete_is_not_requested() {
    let mut app = TestApp::new();
    app.dispatch(AppCommand::RequestDeleteSelected);
    app.dispatch(AppCommand::ConfirmDelete);
    assert!(app.remote_calls().is_empty());
}

#[test]
fn test_double_submission_issues_two_requests() {
    let mut app = TestApp::with_stored_selection("[7]");
    app.delete(DeleteTarget::One(TransactionId::new(7)));
    app.delete(DeleteTarget::One(TransactionId::new(7)));
    assert_eq!(app.remote_calls().len(), 2);
    assert_eq!(app.state().deletes_in_flight, 2);

    app.resolve_delete(Ok(ack("Transaction deleted successfully")));
    app.resolve_delete(Err(DeleteFailure::Rejected(None)));

    app.assert_selected(&[]);
    assert_eq!(app.state().deletes_in_flight, 0);
}

#[test]
fn test_persist_keeps_ids_written_by_another_writer() {
    let store = MemoryStore::with_entry(SELECTION_KEY, "[1]");
    let mut app = TestApp::with_store(store.clone());

    // Another tab stores 9 behind our back
    store.set(SELECTION_KEY, "[1,9]").unwrap();
    app.toggle(2, true);

    assert_eq!(app.selected(), vec![1, 2]);
    assert_eq!(app.stored(), vec![1, 2, 9]);

    app.reload_selection();
    assert_eq!(app.selected(), vec![1, 2, 9]);
}

#[test]
fn test_reload_command_adopts_store() {
    let store = MemoryStore::new();
    let mut app = TestApp::with_store(store.clone());
    app.bind_rows(&[4, 5]);

    store.set(SELECTION_KEY, "[5]").unwrap();
    app.dispatch(AppCommand::ReloadSelection);

    assert_eq!(app.selected(), vec![5]);
    assert!(app.state().page.rows.as_ref().unwrap()[1].checked);
}

#[test]
fn test_refresh_is_recorded() {
    let mut app = TestApp::new();
    app.dispatch(AppCommand::RefreshSummaries);
    assert_eq!(app.remote_calls(), &[RemoteCall::RefreshSummaries]);
}

#[test]
fn test_modal_commands_show_on_page() {
    let mut app = TestApp::new();
    app.dispatch(AppCommand::ShowSearchInfo);
    app.dispatch(AppCommand::ToggleExportOptions);
    assert!(render_page(app.state()).contains("Search help open\nExport options shown"));

    app.dispatch(AppCommand::CloseSearchInfo);
    app.dispatch(AppCommand::ToggleExportOptions);
    assert!(!render_page(app.state()).contains("open"));
}
