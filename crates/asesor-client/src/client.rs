// Platform API client: auth and workspace operations

use reqwest::Method;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::http::HttpClient;
use crate::types::{Envelope, LoginData, Workspace, WorkspaceList};

/// Client for the assistant platform API.
///
/// Holds the session token internally; `login` establishes it and every
/// subsequent request carries it. Clones share the session.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: HttpClient,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Authenticate and store the session token. The response may carry the
    /// token under `data.token` or the legacy `data.accessToken`.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .request(Method::POST, "/auth/login")
            .await
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let response = self.http.check(response).await?;

        let body: Envelope<LoginData> = response.json().await?;
        let token = body.data.into_token().ok_or(ApiError::MissingToken)?;

        debug!("login succeeded, session established");
        self.http.set_token(Some(token)).await;
        Ok(())
    }

    /// Drop the stored session token.
    pub async fn logout(&self) {
        self.http.set_token(None).await;
    }

    pub async fn has_session(&self) -> bool {
        self.http.has_token().await
    }

    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        let response = self
            .http
            .request(Method::GET, "/workspaces")
            .await
            .send()
            .await?;
        let response = self.http.check(response).await?;

        let body: Envelope<WorkspaceList> = response.json().await?;
        Ok(body.data.workspaces)
    }

    /// Create a workspace. The caller is expected to refetch the list; the
    /// response body is not inspected.
    pub async fn create_workspace(&self, name: &str) -> Result<()> {
        let response = self
            .http
            .request(Method::POST, "/workspaces")
            .await
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        self.http.check(response).await?;
        Ok(())
    }
}
