use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    /// The server emitted an explicit `event: error` record.
    #[error("assistant error: {message}")]
    Protocol { message: String },

    /// The stream closed before the `[DONE]` terminator was seen.
    #[error("response stream was interrupted")]
    Interrupted,

    /// Reading from the underlying byte stream failed.
    #[error("stream transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, StreamError>;
