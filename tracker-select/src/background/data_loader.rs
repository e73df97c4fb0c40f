use crate::events::{DataEvent, DeleteFailure, DeleteTarget};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracker_api::{Client, Request};

/// Runs remote requests and reports the results as DataEvents
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Issue the delete, report the outcome, then refresh the summaries if it
    /// went through
    pub async fn delete(&self, target: DeleteTarget) {
        tracing::info!("Sending delete request for {}", target);

        let result = match &target {
            DeleteTarget::One(id) => {
                self.api_client
                    .mutate(Request::transactions().delete(*id))
                    .await
            }
            DeleteTarget::Many(ids) => {
                self.api_client
                    .mutate(Request::transactions().bulk_delete(ids.clone()))
                    .await
            }
            DeleteTarget::All => {
                self.api_client
                    .mutate(Request::transactions().delete_all())
                    .await
            }
        };

        let outcome = result.map_err(|e| {
            tracing::error!("Failed to delete {}: {}", target, e);
            DeleteFailure::from_api_error(&e)
        });
        let succeeded = outcome.is_ok();

        let _ = self
            .data_tx
            .send(DataEvent::DeleteFinished { target, outcome });

        if succeeded {
            self.refresh_summaries().await;
        }
    }

    /// Reload the analytics summary and the insights feed concurrently
    pub async fn refresh_summaries(&self) {
        tokio::join!(self.load_analytics(), self.load_feed());
    }

    pub async fn load_analytics(&self) {
        tracing::debug!("Fetching analytics summary");
        let event = match self.api_client.send(Request::analytics().summary()).await {
            Ok(summary) => DataEvent::AnalyticsLoaded { summary },
            Err(e) => DataEvent::AnalyticsFailed {
                error: e.to_string(),
            },
        };
        let _ = self.data_tx.send(event);
    }

    pub async fn load_feed(&self) {
        tracing::debug!("Fetching feed messages");
        let event = match self.api_client.send(Request::feed().messages()).await {
            Ok(response) => DataEvent::FeedLoaded {
                feed: response.feed,
            },
            Err(e) => DataEvent::FeedFailed {
                error: e.to_string(),
            },
        };
        let _ = self.data_tx.send(event);
    }
}
