pub mod reducer;
pub mod selection;

use chrono::{DateTime, Duration, Local};
use tracker_api::endpoints::{analytics::AnalyticsSummary, TransactionId};

use crate::events::DeleteTarget;
use selection::SelectionSet;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::seconds(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

/// Transient message shown on top of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Local::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.created_at >= NOTIFICATION_TTL
    }
}

/// A row checkbox mirrored from the selection set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBinding {
    pub id: TransactionId,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// `None` until the table has been bound
    pub rows: Option<Vec<RowBinding>>,
    pub select_all_checked: bool,
}

impl PageState {
    /// (Re)bind the visible rows; checkboxes follow the selection
    pub fn bind(&mut self, ids: Vec<TransactionId>, selection: &SelectionSet) {
        self.rows = Some(
            ids.into_iter()
                .map(|id| RowBinding {
                    id,
                    checked: selection.contains(id),
                })
                .collect(),
        );
    }

    pub fn row_ids(&self) -> Vec<TransactionId> {
        self.rows
            .iter()
            .flatten()
            .map(|row| row.id)
            .collect()
    }

    pub fn sync_checkboxes(&mut self, selection: &SelectionSet) {
        for row in self.rows.iter_mut().flatten() {
            row.checked = selection.contains(row.id);
        }
    }

    pub fn remove_rows(&mut self, ids: &[TransactionId]) {
        if let Some(rows) = self.rows.as_mut() {
            rows.retain(|row| !ids.contains(&row.id));
        }
    }

    pub fn clear_rows(&mut self) {
        if let Some(rows) = self.rows.as_mut() {
            rows.clear();
        }
        self.select_all_checked = false;
    }

    /// The table was bound and has no rows left
    pub fn is_empty_state(&self) -> bool {
        self.rows.as_ref().is_some_and(|rows| rows.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub import_open: bool,
    pub search_info_open: bool,
    pub export_options_visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub selection: SelectionSet,
    pub page: PageState,

    // Summary views
    pub analytics: Option<AnalyticsSummary>,
    pub feed: Vec<String>,

    // Deletion
    pub pending_confirmation: Option<DeleteTarget>,
    pub deletes_in_flight: usize,

    // UI state
    pub notifications: Vec<Notification>,
    pub modals: ModalState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: SelectionSet) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Swap in a freshly loaded selection and mirror it into the checkboxes
    pub fn replace_selection(&mut self, selection: SelectionSet) {
        self.selection = selection;
        self.page.sync_checkboxes(&self.selection);
    }

    pub fn bulk_actions_visible(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification::new(kind, message);
        match kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Warning => tracing::warn!("{}", notification.message),
            NotificationKind::Error => tracing::error!("{}", notification.message),
        }
        self.notifications.push(notification);
    }
}
