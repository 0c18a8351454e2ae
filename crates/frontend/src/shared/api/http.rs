use gloo_net::http::Request;

use super::{ApiClient, ApiError, ApiRequest, Envelope, Method};
use crate::shared::api_utils::join_url;
use crate::system::auth::storage::{LocalSessionStore, SessionStore, TOKEN_KEY};

/// Browser transport: `fetch` through gloo-net with the stored bearer token
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
    store: LocalSessionStore,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            store: LocalSessionStore,
        }
    }

    fn auth_header(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {}", token))
    }
}

impl ApiClient for HttpApi {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, ApiError> {
        let url = join_url(&self.base, &request.path);
        log::debug!("{:?} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(auth_header) = self.auth_header() {
            builder = builder.header("Authorization", &auth_header);
        }

        let prepared = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?,
        };

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let ok = response.ok();
        let status = response.status();
        let status_text = response.status_text();

        // Error responses still carry the envelope with the backend's message
        match response.json::<Envelope>().await {
            Ok(envelope) => {
                if !ok {
                    log::warn!("{} answered {} {}", url, status, status_text);
                }
                Ok(envelope)
            }
            Err(e) if ok => Err(ApiError::Decode(e.to_string())),
            Err(_) => Err(ApiError::Transport(format!(
                "Request failed: {} {}",
                status, status_text
            ))),
        }
    }
}
