//! Incremental decoder for SSE-framed assistant responses.
//!
//! The assistant API streams its replies as `event:`/`data:` records over the
//! response body, terminated by a `[DONE]` sentinel. This crate turns that
//! byte stream into ordered text chunks.

pub mod buffer;
pub mod decoder;
pub mod error;
pub mod stream;

pub use buffer::LineBuffer;
pub use decoder::SseDecoder;
pub use error::{Result, StreamError};
pub use stream::{chunk_stream, decode_stream};
