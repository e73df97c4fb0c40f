pub mod analytics;
pub mod feed;
pub mod transactions;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Server-side primary key of a transaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TransactionId> for i64 {
    fn from(value: TransactionId) -> Self {
        value.0
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// Payload attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestData {
    Empty,
    /// `application/x-www-form-urlencoded` fields, keys may repeat
    Form(Vec<(&'static str, String)>),
}

pub trait ApiRequest {
    type Response: DeserializeOwned;
    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData {
        RequestData::Empty
    }

    /// Anything but a GET changes server state and needs the anti-forgery token
    fn is_mutating(&self) -> bool {
        Self::METHOD != Method::GET
    }
}

/// Response shape shared by every mutating endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub deleted_count: Option<u64>,
}

/// A mutation the server accepted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationAck {
    pub message: Option<String>,
    pub deleted_count: Option<u64>,
}
