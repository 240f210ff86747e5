use std::pin::Pin;

use futures::{Stream, StreamExt};
use tracing::error;

use crate::decoder::SseDecoder;
use crate::error::{Result, StreamError};

/// Decode an SSE-framed byte stream, invoking `on_chunk` synchronously for
/// each emitted text fragment, in arrival order.
///
/// The stream is taken by value: it is dropped on every exit path, including
/// cancellation of the returned future, so the underlying reader is always
/// released. Transport failures are logged and re-raised unchanged.
pub async fn decode_stream<S, B, E, F>(stream: S, mut on_chunk: F) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    F: FnMut(&str),
{
    let mut byte_chunks = Box::pin(stream);
    let mut decoder = SseDecoder::new();

    while let Some(next) = byte_chunks.next().await {
        let block = next.map_err(|e| {
            let source = e.into();
            error!("error processing response stream: {source}");
            StreamError::Transport(source)
        })?;

        decoder.feed(block.as_ref(), &mut on_chunk)?;
    }

    decoder.finish(&mut on_chunk)
}

/// Adapter exposing the decoded fragments as a stream of owned strings.
///
/// Fragments completed before a failure are yielded ahead of the error;
/// the stream ends after the first error item.
pub fn chunk_stream<S, B, E>(stream: S) -> Pin<Box<dyn Stream<Item = Result<String>> + Send>>
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync>> + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut byte_chunks = Box::pin(stream);
        let mut decoder = SseDecoder::new();
        let mut pending: Vec<String> = Vec::new();

        while let Some(next) = byte_chunks.next().await {
            match next {
                Ok(block) => {
                    let result =
                        decoder.feed(block.as_ref(), |chunk: &str| pending.push(chunk.to_owned()));
                    for chunk in pending.drain(..) {
                        yield Ok(chunk);
                    }
                    if let Err(e) = result {
                        yield Err(e);
                        return;
                    }
                }
                Err(e) => {
                    let source = e.into();
                    error!("error processing response stream: {source}");
                    yield Err(StreamError::Transport(source));
                    return;
                }
            }
        }

        let result = decoder.finish(|chunk: &str| pending.push(chunk.to_owned()));
        for chunk in pending.drain(..) {
            yield Ok(chunk);
        }
        if let Err(e) = result {
            yield Err(e);
        }
    })
}
