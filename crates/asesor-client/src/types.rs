use serde::{Deserialize, Serialize};

/// A workspace as returned by the platform API. Some deployments identify
/// workspaces by `public_id` instead of `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,

    pub name: String,
}

impl Workspace {
    /// Stable identifier: `id` when present, else `public_id`.
    pub fn key(&self) -> &str {
        if !self.id.is_empty() {
            return &self.id;
        }
        self.public_id.as_deref().unwrap_or("")
    }
}

/// All API bodies arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginData {
    token: Option<String>,

    // Older deployments used this field name
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

impl LoginData {
    pub fn into_token(self) -> Option<String> {
        self.token.or(self.access_token)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WorkspaceList {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}
