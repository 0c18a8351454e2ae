//! Access to the REST backend
//!
//! Every endpoint answers with the [`ApiResponse`] envelope. Pages and
//! controllers talk to the backend through [`ApiClient`] so the transport can
//! be swapped for an in-memory fake in tests.

mod http;

pub use http::HttpApi;

use contracts::shared::api_response::{ApiResponse, PaginationMeta};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Envelope with a not yet decoded `data` payload
pub type Envelope = ApiResponse<Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One backend call; `path` is relative to the API base and may carry a query
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(to_body(body)?),
        })
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::Put,
            path: path.into(),
            body: Some(to_body(body)?),
        })
    }

    /// Path without the query string
    pub fn route(&self) -> &str {
        self.path.split('?').next().unwrap_or_default()
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure or an HTTP error without a readable envelope
    #[error("{0}")]
    Transport(String),
    /// The backend answered `success: false`
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[allow(async_fn_in_trait)]
pub trait ApiClient: Clone + Send + Sync + 'static {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, ApiError>;
}

/// Sends a request and turns `success: false` into [`ApiError::Rejected`]
pub async fn execute<A: ApiClient>(api: &A, request: ApiRequest) -> Result<Envelope, ApiError> {
    let envelope = api.send(request).await?;
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ApiError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| "Request failed".to_string()),
        ))
    }
}

/// Sends a request and decodes `data` together with the pagination block
pub async fn fetch_data<T, A>(
    api: &A,
    request: ApiRequest,
) -> Result<(T, Option<PaginationMeta>), ApiError>
where
    T: DeserializeOwned,
    A: ApiClient,
{
    let envelope = execute(api, request).await?;
    let data = serde_json::from_value(envelope.data.unwrap_or(Value::Null))
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((data, envelope.pagination))
}

/// `GET path` decoded into a single record
pub async fn fetch_one<T, A>(api: &A, path: impl Into<String>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    A: ApiClient,
{
    fetch_data(api, ApiRequest::get(path)).await.map(|(data, _)| data)
}
