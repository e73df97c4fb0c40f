use crate::endpoints::{
    TransactionId,
    analytics::GetAnalytics,
    feed::GetFeedMessages,
    transactions::{BulkDeleteTransactions, DeleteTransaction},
};

pub struct TransactionRepository;

impl TransactionRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn delete(&self, transaction_id: TransactionId) -> DeleteTransaction {
        DeleteTransaction::new(transaction_id)
    }

    pub fn bulk_delete(&self, transaction_ids: Vec<TransactionId>) -> BulkDeleteTransactions {
        BulkDeleteTransactions::new(transaction_ids)
    }

    pub fn delete_all(&self) -> BulkDeleteTransactions {
        BulkDeleteTransactions::all()
    }
}

pub struct AnalyticsRepository;

impl AnalyticsRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn summary(&self) -> GetAnalytics {
        GetAnalytics
    }
}

pub struct FeedRepository;

impl FeedRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn messages(&self) -> GetFeedMessages {
        GetFeedMessages
    }
}
