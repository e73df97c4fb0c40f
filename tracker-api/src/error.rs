use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum TrackerApiError {
    /// No response was received (connection refused, timeout, TLS, ...)
    Transport(reqwest::Error),
    /// The server answered and refused the operation
    Rejected {
        status: StatusCode,
        reason: Option<String>,
    },
    /// The server answered with something other than the expected JSON
    Decode { status: StatusCode, body: String },
    InvalidUrl(String),
    Build(reqwest::Error),
}

impl TrackerApiError {
    /// Build the error for a non-success response, pulling the reason out of
    /// the JSON body when the server sent one.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let reason = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message));
        TrackerApiError::Rejected { status, reason }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, TrackerApiError::Transport(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TrackerApiError::Rejected { status, .. } | TrackerApiError::Decode { status, .. } => {
                Some(*status)
            }
            TrackerApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Human readable reason given by the server, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            TrackerApiError::Rejected { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for TrackerApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerApiError::Transport(e) => write!(f, "Network error: {}", e),
            TrackerApiError::Rejected { status, reason } => write!(
                f,
                "({}) {}",
                status,
                reason.as_deref().unwrap_or("request rejected")
            ),
            TrackerApiError::Decode { status, .. } => {
                write!(f, "({}) unexpected response body", status)
            }
            TrackerApiError::InvalidUrl(url) => write!(f, "Invalid server url: {}", url),
            TrackerApiError::Build(e) => write!(f, "Failed to build HTTP client: {}", e),
        }
    }
}

impl std::error::Error for TrackerApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerApiError::Transport(e) | TrackerApiError::Build(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
