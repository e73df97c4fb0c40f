pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::{ErrorBody, TrackerApiError};
use endpoints::{ApiRequest, MutationAck, MutationResponse, RequestData};
use macros::setter;
use repositories::*;
pub use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Marks a request as programmatic rather than a page navigation
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    csrf_token: SecretString,
}

impl Client {
    pub fn new(base_url: &str, csrf_token: &str) -> Result<Self, TrackerApiError> {
        ClientBuilder::new(base_url).csrf_token(csrf_token).build()
    }

    pub fn builder(base_url: &str) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, TrackerApiError>
    where
        R: ApiRequest,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        tracing::debug!("{} {}", R::METHOD, url);

        let mut builder = self
            .inner
            .request(R::METHOD, &url)
            .header(REQUESTED_WITH_HEADER, "XMLHttpRequest");
        if request.is_mutating() {
            builder = builder.header(CSRF_HEADER, self.csrf_token.expose_secret());
        }
        if let RequestData::Form(fields) = request.data() {
            builder = builder.form(&fields);
        }

        let response = builder.send().await.map_err(TrackerApiError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(TrackerApiError::Transport)?;
        decode_body(status, body)
    }

    /// Send a mutating request and turn `success: false` into an error
    pub async fn mutate<R>(&self, request: R) -> Result<MutationAck, TrackerApiError>
    where
        R: ApiRequest<Response = MutationResponse>,
    {
        let response = self.send(request).await?;
        if response.success {
            Ok(MutationAck {
                message: response.message,
                deleted_count: response.deleted_count,
            })
        } else {
            Err(TrackerApiError::Rejected {
                status: StatusCode::OK,
                reason: response.error.or(response.message),
            })
        }
    }
}

fn decode_body<T>(status: StatusCode, body: String) -> Result<T, TrackerApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !status.is_success() {
        return Err(TrackerApiError::from_status(status, &body));
    }
    serde_json::from_str(&body).map_err(|_| TrackerApiError::Decode { status, body })
}

pub struct ClientBuilder {
    base_url: String,
    csrf_token: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    setter!(csrf_token: String);
    setter!(timeout: Duration);
    setter!(opt user_agent: String);

    pub fn build(self) -> Result<Client, TrackerApiError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TrackerApiError::InvalidUrl(self.base_url));
        }

        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_deref().unwrap_or(APP_USER_AGENT))
            .build()
            .map_err(TrackerApiError::Build)?;

        Ok(Client {
            inner,
            base_url: self.base_url,
            csrf_token: SecretString::from(self.csrf_token),
        })
    }
}

pub struct Request;

impl Request {
    pub fn new() -> Self {
        Self {}
    }

    pub fn transactions() -> TransactionRepository {
        TransactionRepository::new()
    }

    pub fn analytics() -> AnalyticsRepository {
        AnalyticsRepository::new()
    }

    pub fn feed() -> FeedRepository {
        FeedRepository::new()
    }
}
