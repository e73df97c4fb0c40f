use super::ApiRequest;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Spending insights, each entry is a pre-rendered HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub feed: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetFeedMessages;

impl ApiRequest for GetFeedMessages {
    type Response = FeedResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/feed-messages/".into()
    }
}
