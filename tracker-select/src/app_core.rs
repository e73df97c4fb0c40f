use crate::events::{AppCommand, DataEvent};
use crate::state::selection::SelectionDelta;
use crate::state::{reducer, AppState};
use crate::storage::{self, KeyValueStore};

/// Trait for handling command execution (production = real loader + tasks, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't spawn background tasks or make API calls.
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    ///
    /// Returns the selection change the command made, if any.
    fn execute_with_context(
        &mut self,
        command: AppCommand,
        state: &mut AppState,
    ) -> Option<SelectionDelta>;
}

/// Testable application core without terminal or network dependencies
///
/// Generic over H (handler) and S (store). Every selection change coming out
/// of a command or a data event is committed to the store before the call
/// returns.
pub struct AppCore<H: DataEventHandler, S: KeyValueStore> {
    ui_state: AppState,
    handler: H,
    store: S,
}

impl<H: DataEventHandler, S: KeyValueStore> AppCore<H, S> {
    /// Create a core whose selection starts from what the store holds
    pub fn new(handler: H, store: S) -> Self {
        let selection = storage::load_selection(&store);
        tracing::info!("Starting with {} selected transactions", selection.len());
        Self {
            ui_state: AppState::with_selection(selection),
            handler,
            store,
        }
    }

    /// Execute a command and persist the selection change it made
    pub fn dispatch(&mut self, command: AppCommand) {
        tracing::debug!("Executing command: {:?}", command);
        if matches!(command, AppCommand::ReloadSelection) {
            self.reload_selection();
            return;
        }

        if let Some(delta) = self.handler.execute_with_context(command, &mut self.ui_state) {
            self.commit(&delta);
        }
    }

    /// Apply a background result and persist the selection change it made
    pub fn handle_data_event(&mut self, event: DataEvent) {
        tracing::debug!("Received data event: {:?}", event);
        if let Some(delta) = reducer::reduce_data_event(&mut self.ui_state, event) {
            self.commit(&delta);
        }
    }

    /// Adopt whatever the store holds now, e.g. after another writer changed it
    pub fn reload_selection(&mut self) {
        let selection = storage::load_selection(&self.store);
        tracing::info!("Reloaded {} selected transactions", selection.len());
        self.ui_state.replace_selection(selection);
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn commit(&mut self, delta: &SelectionDelta) {
        if delta.is_empty() {
            return;
        }
        if let Err(e) = storage::commit_delta(&self.store, delta) {
            // The in-memory selection stays authoritative for this session
            tracing::error!("Failed to persist selection: {}", e);
        }
    }
}
