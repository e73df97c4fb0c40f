use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent, DeleteFailure, DeleteTarget};
use crate::state::selection::SelectionDelta;
use crate::state::AppState;
use crate::storage::{self, KeyValueStore, MemoryStore, SELECTION_KEY};
use tracker_api::endpoints::{analytics::AnalyticsSummary, MutationAck, TransactionId};

/// A request the app would have sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Delete(DeleteTarget),
    RefreshSummaries,
}

/// Mock data event handler for tests (no real async tasks)
///
/// Remote commands are recorded instead of sent; everything else goes
/// through execute_command_sync.
#[derive(Debug, Default)]
pub struct MockDataHandler {
    pub calls: Vec<RemoteCall>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(
        &mut self,
        command: AppCommand,
        state: &mut AppState,
    ) -> Option<SelectionDelta> {
        match command {
            AppCommand::ConfirmDelete => {
                if let Some(target) = executor::begin_delete(state) {
                    self.calls.push(RemoteCall::Delete(target));
                }
                None
            }
            AppCommand::RefreshSummaries => {
                self.calls.push(RemoteCall::RefreshSummaries);
                None
            }
            command => executor::execute_command_sync(command, state),
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler, MemoryStore>,
}

impl TestApp {
    /// Create a new test app over an empty store
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Create a test app that starts from whatever `store` holds
    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new(), store),
        }
    }

    /// Create a test app whose store holds `raw` under the selection key
    pub fn with_stored_selection(raw: &str) -> Self {
        Self::with_store(MemoryStore::with_entry(SELECTION_KEY, raw))
    }

    pub fn dispatch(&mut self, command: AppCommand) {
        self.core.dispatch(command);
    }

    pub fn bind_rows(&mut self, ids: &[i64]) {
        self.dispatch(AppCommand::BindRows { ids: tx_ids(ids) });
    }

    pub fn toggle(&mut self, id: i64, selected: bool) {
        self.dispatch(AppCommand::ToggleRow {
            id: TransactionId::new(id),
            selected,
        });
    }

    /// Request and immediately confirm a delete
    pub fn delete(&mut self, target: DeleteTarget) {
        self.dispatch(AppCommand::RequestDelete(target));
        self.dispatch(AppCommand::ConfirmDelete);
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Answer the oldest unanswered delete, then the summary refreshes the
    /// live loader would send after a success
    pub fn resolve_delete(&mut self, outcome: Result<MutationAck, DeleteFailure>) {
        let target = self
            .take_delete_call()
            .expect("no delete request was issued");
        let succeeded = outcome.is_ok();
        self.send_data_event(DataEvent::DeleteFinished { target, outcome });

        if succeeded {
            self.send_data_event(DataEvent::AnalyticsLoaded {
                summary: AnalyticsSummary::default(),
            });
            self.send_data_event(DataEvent::FeedLoaded { feed: Vec::new() });
        }
    }

    pub fn remote_calls(&self) -> &[RemoteCall] {
        &self.core.handler().calls
    }

    fn take_delete_call(&mut self) -> Option<DeleteTarget> {
        let calls = &mut self.core.handler_mut().calls;
        let index = calls
            .iter()
            .position(|call| matches!(call, RemoteCall::Delete(_)))?;
        match calls.remove(index) {
            RemoteCall::Delete(target) => Some(target),
            RemoteCall::RefreshSummaries => None,
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn store(&self) -> &MemoryStore {
        self.core.store()
    }

    pub fn reload_selection(&mut self) {
        self.core.reload_selection();
    }

    /// Selected ids, ascending
    pub fn selected(&self) -> Vec<i64> {
        self.state().selection.iter().map(|id| id.inner()).collect()
    }

    /// Selected ids as currently written to the store, ascending
    pub fn stored(&self) -> Vec<i64> {
        storage::load_selection(self.store())
            .iter()
            .map(|id| id.inner())
            .collect()
    }

    /// Raw value under the selection key
    pub fn stored_raw(&self) -> Option<String> {
        self.store()
            .get(SELECTION_KEY)
            .expect("memory store is readable")
    }

    /// Assert the in-memory selection matches `expected` and was persisted
    pub fn assert_selected(&self, expected: &[i64]) {
        assert_eq!(self.selected(), expected, "in-memory selection");
        assert_eq!(self.stored(), expected, "stored selection");
    }

    pub fn assert_last_notification(&self, expected: &str) {
        let last = self
            .state()
            .notifications
            .last()
            .map(|n| n.message.as_str());
        assert_eq!(last, Some(expected), "last notification");
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn tx_ids(raw: &[i64]) -> Vec<TransactionId> {
    raw.iter().copied().map(TransactionId::new).collect()
}
