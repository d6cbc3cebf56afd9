//! HTTP client for the intake API. One method per endpoint, no retries.

use crate::model::{Application, NewApplication, Statistics};
use crate::response::{HealthBody, MessageBody};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Client bound to a server origin, e.g. `http://localhost:3000`. Paths are
/// resolved under `<origin>/api`.
#[derive(Clone, Debug)]
pub struct IntakeClient {
    http: Client,
    api_base: String,
}

impl IntakeClient {
    pub fn new(origin: &str) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::with_client(http, origin)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, TLS).
    pub fn with_client(http: Client, origin: &str) -> Result<Self, ClientError> {
        let origin = origin.trim_end_matches('/');
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(origin.to_string()));
        }
        Ok(IntakeClient {
            http,
            api_base: format!("{}/api", origin),
        })
    }

    pub async fn create_application(&self, body: &NewApplication) -> Result<MessageBody, ClientError> {
        self.send(self.request(Method::POST, "/applications").json(body)).await
    }

    pub async fn list_applications(&self) -> Result<Vec<Application>, ClientError> {
        self.send(self.request(Method::GET, "/applications")).await
    }

    pub async fn get_application(&self, id: i64) -> Result<Application, ClientError> {
        self.send(self.request(Method::GET, &format!("/applications/{}", id))).await
    }

    pub async fn approve_application(&self, id: i64) -> Result<MessageBody, ClientError> {
        self.send(self.request(Method::PUT, &format!("/applications/{}/approve", id))).await
    }

    pub async fn reject_application(&self, id: i64) -> Result<MessageBody, ClientError> {
        self.send(self.request(Method::PUT, &format!("/applications/{}/reject", id))).await
    }

    pub async fn statistics(&self) -> Result<Statistics, ClientError> {
        self.send(self.request(Method::GET, "/statistics")).await
    }

    pub async fn health(&self) -> Result<HealthBody, ClientError> {
        self.send(self.request(Method::GET, "/health")).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.api_base, path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&text)
        .map(|e| e.error)
        .unwrap_or(text);
    tracing::debug!(status = %status, message = %message, "request failed");
    Err(ClientError::Status { status, message })
}
