use super::{ApiRequest, MutationResponse, RequestData, TransactionId};
use reqwest::Method;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTransaction {
    pub transaction_id: TransactionId,
}

impl DeleteTransaction {
    pub fn new(transaction_id: TransactionId) -> Self {
        Self { transaction_id }
    }
}

impl ApiRequest for DeleteTransaction {
    type Response = MutationResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/delete/{}/", self.transaction_id).into()
    }
}

/// What a bulk delete covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkDeleteScope {
    Ids(Vec<TransactionId>),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDeleteTransactions {
    scope: BulkDeleteScope,
}

impl BulkDeleteTransactions {
    pub fn new(transaction_ids: Vec<TransactionId>) -> Self {
        Self {
            scope: BulkDeleteScope::Ids(transaction_ids),
        }
    }

    pub fn all() -> Self {
        Self {
            scope: BulkDeleteScope::All,
        }
    }

    pub fn scope(&self) -> &BulkDeleteScope {
        &self.scope
    }
}

impl ApiRequest for BulkDeleteTransactions {
    type Response = MutationResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/bulk-delete/".into()
    }

    fn data(&self) -> RequestData {
        match &self.scope {
            BulkDeleteScope::Ids(ids) => RequestData::Form(
                ids.iter()
                    .map(|id| ("transaction_ids", id.to_string()))
                    .collect(),
            ),
            BulkDeleteScope::All => RequestData::Form(vec![("delete_all", "true".to_string())]),
        }
    }
}
