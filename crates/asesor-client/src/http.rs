use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::ApiConfig;
use crate::error::{extract_message, ApiError, Result, FALLBACK_ERROR_MESSAGE};

/// Shared HTTP transport: base URL, JSON defaults, bearer-token injection.
///
/// Cloning shares the session store, so one login covers every handle.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Build a request against the API base URL, attaching the bearer token
    /// when a session is active.
    pub async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(token) = self.token.read().await.as_deref() {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Map a non-success response to a standardized error. A 401 also
    /// invalidates the stored session token.
    pub async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| extract_message(&body))
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        if status == StatusCode::UNAUTHORIZED {
            warn!("unauthorized response, clearing session token");
            self.set_token(None).await;
            return Err(ApiError::Unauthorized { message });
        }

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
