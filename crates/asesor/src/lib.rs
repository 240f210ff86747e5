//! # Asesor
//!
//! Client toolkit for the assistant platform: authentication, workspace
//! selection, and streaming chat over an SSE-framed HTTP API.
//!
//! ## Overview
//!
//! Asesor gives a front-end everything it needs to talk to the platform:
//!
//! - **Authenticate** with email/password and keep the session token
//! - **List and create workspaces**
//! - **Chat with the assistant**, receiving the reply incrementally
//! - **Decode SSE streams** with exact record semantics (terminator
//!   sentinel, error events, multi-line payloads)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asesor::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new(&ApiConfig::from_env())?;
//!     client.login("lawyer@example.com", "secret").await?;
//!
//!     let workspaces = client.list_workspaces().await?;
//!     let workspace = &workspaces[0];
//!
//!     client
//!         .stream_message(workspace.key(), "Hello!", &mut |chunk| {
//!             print!("{chunk}");
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Asesor is organized into focused crates:
//!
//! - **`asesor-stream`**: incremental SSE decoder (records, terminator,
//!   error events, partial reads)
//! - **`asesor-client`**: typed async HTTP client (auth, workspaces,
//!   assistant chat) and the explicit view-flow state machine
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use asesor_client::{
    ApiClient, ApiConfig, ApiError, AssistantChat, View, Workspace,
};

pub use asesor_stream::{
    chunk_stream, decode_stream, LineBuffer, SseDecoder, StreamError,
};
