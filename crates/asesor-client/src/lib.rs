pub mod assistant;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod http;
pub mod types;

pub use assistant::AssistantChat;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use flow::View;
pub use types::Workspace;
