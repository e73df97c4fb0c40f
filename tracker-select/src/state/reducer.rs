use super::{selection::SelectionDelta, AppState, NotificationKind};
use crate::events::{DataEvent, DeleteFailure, DeleteTarget};

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const DEFAULT_DELETE_MESSAGE: &str = "Transaction deleted successfully";
pub const ANALYTICS_ERROR_MESSAGE: &str = "Error updating analytics";
pub const FEED_ERROR_MESSAGE: &str = "Failed to load spending insights";

/// Pure state transition function for data events
///
/// Returns the selection change to persist, if any.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) -> Option<SelectionDelta> {
    match event {
        DataEvent::DeleteFinished { target, outcome } => {
            state.deletes_in_flight = state.deletes_in_flight.saturating_sub(1);

            match outcome {
                Ok(ack) => {
                    tracing::info!("Deleted {}", target);
                    let delta = remove_deleted(state, &target);
                    let message = ack.message.unwrap_or_else(|| match target {
                        DeleteTarget::One(_) => DEFAULT_DELETE_MESSAGE.to_string(),
                        DeleteTarget::Many(ref ids) => {
                            format!("{} transaction(s) deleted successfully", ids.len())
                        }
                        DeleteTarget::All => format!(
                            "{} transaction(s) deleted successfully",
                            ack.deleted_count.unwrap_or(0)
                        ),
                    });
                    state.notify(NotificationKind::Success, message);
                    Some(delta)
                }
                Err(failure) => {
                    // Selection and rows stay as they were
                    let message = failure_message(&target, &failure);
                    state.notify(NotificationKind::Error, message);
                    None
                }
            }
        }

        DataEvent::AnalyticsLoaded { summary } => {
            tracing::debug!("Analytics refreshed: {:?}", summary);
            state.analytics = Some(summary);
            None
        }
        DataEvent::AnalyticsFailed { error } => {
            tracing::warn!("Analytics refresh failed: {}", error);
            state.notify(NotificationKind::Warning, ANALYTICS_ERROR_MESSAGE);
            None
        }

        DataEvent::FeedLoaded { feed } => {
            tracing::debug!("Feed refreshed with {} messages", feed.len());
            state.feed = feed;
            None
        }
        DataEvent::FeedFailed { error } => {
            tracing::warn!("Feed refresh failed: {}", error);
            state.notify(NotificationKind::Warning, FEED_ERROR_MESSAGE);
            None
        }
    }
}

/// Drop deleted ids from the selection and their rows from the table
fn remove_deleted(state: &mut AppState, target: &DeleteTarget) -> SelectionDelta {
    match target {
        DeleteTarget::All => {
            state.page.clear_rows();
            state.selection.clear()
        }
        DeleteTarget::One(_) | DeleteTarget::Many(_) => {
            let ids = target.ids();
            state.page.remove_rows(ids);
            let delta = state.selection.remove_all(ids.iter().copied());
            state.page.sync_checkboxes(&state.selection);
            delta
        }
    }
}

pub fn failure_message(target: &DeleteTarget, failure: &DeleteFailure) -> String {
    let reason = match failure {
        DeleteFailure::Network => return NETWORK_ERROR_MESSAGE.to_string(),
        DeleteFailure::Rejected(reason) => reason.as_deref(),
    };

    match target {
        DeleteTarget::One(_) => format!(
            "Error deleting transaction: {}",
            reason.unwrap_or("Unknown error")
        ),
        DeleteTarget::Many(_) => format!("Error: {}", reason.unwrap_or("Unknown error")),
        DeleteTarget::All => format!(
            "Error: {}",
            reason.unwrap_or("Failed to delete transactions")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::SelectionSet;
    use tracker_api::endpoints::{analytics::AnalyticsSummary, MutationAck, TransactionId};

    fn ids(raw: &[i64]) -> Vec<TransactionId> {
        raw.iter().copied().map(TransactionId::new).collect()
    }

    fn state_with(selected: &[i64], rows: &[i64]) -> AppState {
        let selection: SelectionSet = ids(selected).into_iter().collect();
        let mut state = AppState::with_selection(selection.clone());
        state.page.bind(ids(rows), &selection);
        state.deletes_in_flight = 1;
        state
    }

    fn ack(message: Option<&str>) -> MutationAck {
        MutationAck {
            message: message.map(str::to_string),
            deleted_count: None,
        }
    }

    #[test]
    fn test_delete_one_success_removes_id_and_row() {
        let mut state = state_with(&[5, 6], &[5, 6, 7]);
        let delta = reduce_data_event(
            &mut state,
            DataEvent::DeleteFinished {
                target: DeleteTarget::One(TransactionId::new(5)),
                outcome: Ok(ack(None)),
            },
        )
        .unwrap();

        assert_eq!(state.selection.ids(), ids(&[6]));
        assert_eq!(state.page.row_ids(), ids(&[6, 7]));
        assert!(delta.removed.contains(&TransactionId::new(5)));
        assert_eq!(state.deletes_in_flight, 0);
        assert_eq!(state.notifications[0].message, DEFAULT_DELETE_MESSAGE);
        assert_eq!(state.notifications[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_delete_one_rejected_keeps_selection() {
        let mut state = state_with(&[5], &[5]);
        let delta = reduce_data_event(
            &mut state,
            DataEvent::DeleteFinished {
                target: DeleteTarget::One(TransactionId::new(5)),
                outcome: Err(DeleteFailure::Rejected(None)),
            },
        );

        assert!(delta.is_none());
        assert_eq!(state.selection.ids(), ids(&[5]));
        assert_eq!(state.page.row_ids(), ids(&[5]));
        assert_eq!(
            state.notifications[0].message,
            "Error deleting transaction: Unknown error"
        );
    }

    #[test]
    fn test_delete_many_keeps_unrequested_ids() {
        let mut state = state_with(&[1, 2, 3, 4], &[1, 2, 3, 4]);
        reduce_data_event(
            &mut state,
            DataEvent::DeleteFinished {
                target: DeleteTarget::Many(ids(&[1, 2, 3])),
                outcome: Ok(ack(Some("3 transaction(s) deleted successfully"))),
            },
        );

        assert_eq!(state.selection.ids(), ids(&[4]));
        assert_eq!(state.page.row_ids(), ids(&[4]));
        assert!(state.page.rows.as_ref().unwrap()[0].checked);
    }

    #[test]
    fn test_delete_all_clears_everything() {
        let mut state = state_with(&[1, 9], &[1, 2]);
        state.page.select_all_checked = true;
        let delta = reduce_data_event(
            &mut state,
            DataEvent::DeleteFinished {
                target: DeleteTarget::All,
                outcome: Ok(MutationAck {
                    message: None,
                    deleted_count: Some(2),
                }),
            },
        )
        .unwrap();

        assert!(delta.cleared);
        assert!(state.selection.is_empty());
        assert!(state.page.is_empty_state());
        assert!(!state.page.select_all_checked);
        assert_eq!(
            state.notifications[0].message,
            "2 transaction(s) deleted successfully"
        );
    }

    #[test]
    fn test_network_failure_message() {
        for target in [
            DeleteTarget::One(TransactionId::new(1)),
            DeleteTarget::Many(ids(&[1])),
            DeleteTarget::All,
        ] {
            assert_eq!(
                failure_message(&target, &DeleteFailure::Network),
                NETWORK_ERROR_MESSAGE
            );
        }
    }

    #[test]
    fn test_rejection_messages_per_target() {
        let locked = DeleteFailure::Rejected(Some("locked".to_string()));
        assert_eq!(
            failure_message(&DeleteTarget::One(TransactionId::new(1)), &locked),
            "Error deleting transaction: locked"
        );
        assert_eq!(
            failure_message(&DeleteTarget::Many(ids(&[1])), &locked),
            "Error: locked"
        );
        assert_eq!(
            failure_message(&DeleteTarget::All, &DeleteFailure::Rejected(None)),
            "Error: Failed to delete transactions"
        );
    }

    #[test]
    fn test_refresh_failures_warn_without_touching_data() {
        let mut state = state_with(&[1], &[1]);
        state.analytics = Some(AnalyticsSummary {
            transactions_count: 1,
            expense_count: 1,
            income_count: 0,
        });
        state.feed = vec!["old".to_string()];

        reduce_data_event(
            &mut state,
            DataEvent::AnalyticsFailed {
                error: "timeout".to_string(),
            },
        );
        reduce_data_event(
            &mut state,
            DataEvent::FeedFailed {
                error: "timeout".to_string(),
            },
        );

        assert_eq!(state.analytics.unwrap().transactions_count, 1);
        assert_eq!(state.feed, vec!["old".to_string()]);
        let messages: Vec<_> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec![ANALYTICS_ERROR_MESSAGE, FEED_ERROR_MESSAGE]);
        assert!(state
            .notifications
            .iter()
            .all(|n| n.kind == NotificationKind::Warning));
    }

    #[test]
    fn test_summaries_loaded() {
        let mut state = AppState::new();
        reduce_data_event(
            &mut state,
            DataEvent::AnalyticsLoaded {
                summary: AnalyticsSummary {
                    transactions_count: 4,
                    expense_count: 3,
                    income_count: 1,
                },
            },
        );
        reduce_data_event(
            &mut state,
            DataEvent::FeedLoaded {
                feed: vec!["insight".to_string()],
            },
        );

        assert_eq!(state.analytics.unwrap().expense_count, 3);
        assert_eq!(state.feed.len(), 1);
        assert!(state.notifications.is_empty());
    }
}
