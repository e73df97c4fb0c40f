use chrono::{DateTime, Local};
use std::fmt::Display;
use tracker_api::endpoints::{analytics::AnalyticsSummary, MutationAck, TransactionId};
use tracker_api::TrackerApiError;

/// Rows a delete request covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    One(TransactionId),
    Many(Vec<TransactionId>),
    All,
}

impl DeleteTarget {
    pub fn ids(&self) -> &[TransactionId] {
        match self {
            DeleteTarget::One(id) => std::slice::from_ref(id),
            DeleteTarget::Many(ids) => ids,
            DeleteTarget::All => &[],
        }
    }
}

impl Display for DeleteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteTarget::One(id) => write!(f, "transaction {}", id),
            DeleteTarget::Many(ids) => write!(f, "{} transaction(s)", ids.len()),
            DeleteTarget::All => f.write_str("all transactions"),
        }
    }
}

/// Why a delete did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFailure {
    /// No usable response came back
    Network,
    /// The server refused, with its reason when it gave one
    Rejected(Option<String>),
}

impl DeleteFailure {
    pub fn from_api_error(error: &TrackerApiError) -> Self {
        match error {
            TrackerApiError::Rejected { status, reason } => {
                if reason.is_none() && status.as_u16() == 404 {
                    DeleteFailure::Rejected(Some("Transaction not found".to_string()))
                } else {
                    DeleteFailure::Rejected(reason.clone())
                }
            }
            _ => DeleteFailure::Network,
        }
    }
}

pub type DeleteOutcome = Result<MutationAck, DeleteFailure>;

/// Commands to execute (user actions → state transitions or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Table rows
    BindRows { ids: Vec<TransactionId> },
    ToggleRow { id: TransactionId, selected: bool },
    SetSelectAllCheckbox { checked: bool },
    SelectAllRows,
    ClearSelection,
    ReloadSelection,

    // Deletion
    RequestDelete(DeleteTarget),
    RequestDeleteSelected,
    ConfirmDelete,
    CancelDelete,

    // Summary views
    RefreshSummaries,

    // Page chrome
    ShowImportWindow,
    CloseImportWindow,
    ShowSearchInfo,
    CloseSearchInfo,
    ToggleExportOptions,
    ExpireNotifications { now: DateTime<Local> },
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    DeleteFinished {
        target: DeleteTarget,
        outcome: DeleteOutcome,
    },

    AnalyticsLoaded {
        summary: AnalyticsSummary,
    },
    AnalyticsFailed {
        error: String,
    },

    FeedLoaded {
        feed: Vec<String>,
    },
    FeedFailed {
        error: String,
    },
}
