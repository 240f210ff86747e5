//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use asesor::prelude::*;
//! ```

pub use crate::{
    ApiClient, ApiConfig, ApiError, AssistantChat, View, Workspace,
    SseDecoder, StreamError, decode_stream,
};
