use super::ApiRequest;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Row counts shown above the transactions table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub transactions_count: u64,
    pub expense_count: u64,
    pub income_count: u64,
}

#[derive(Debug, Clone, Default)]
pub struct GetAnalytics;

impl ApiRequest for GetAnalytics {
    type Response = AnalyticsSummary;

    fn endpoint(&self) -> Cow<'_, str> {
        "/analytics/".into()
    }
}
