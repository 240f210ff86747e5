use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use reqwest::Method;

use asesor_stream::{chunk_stream, decode_stream};

use crate::client::ApiClient;
use crate::error::Result;

/// Streaming chat against the assistant.
///
/// `stream_message` is the low-latency path: the callback receives each text
/// fragment as soon as its record completes. `send_message` collects the
/// fragments into the full reply.
#[async_trait]
pub trait AssistantChat: Send + Sync {
    /// Send a message and receive the reply incrementally.
    async fn stream_message(
        &self,
        workspace_id: &str,
        message: &str,
        on_chunk: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<()>;

    /// Send a message and receive the reply as a stream of owned fragments.
    async fn open_message_stream(
        &self,
        workspace_id: &str,
        message: &str,
    ) -> Result<Pin<Box<dyn Stream<Item = asesor_stream::Result<String>> + Send>>>;

    /// Send a message and collect the full reply.
    async fn send_message(&self, workspace_id: &str, message: &str) -> Result<String> {
        let mut reply = String::new();
        self.stream_message(workspace_id, message, &mut |chunk: &str| {
            reply.push_str(chunk)
        })
        .await?;
        Ok(reply)
    }
}

#[async_trait]
impl AssistantChat for ApiClient {
    async fn stream_message(
        &self,
        workspace_id: &str,
        message: &str,
        on_chunk: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<()> {
        let response = self
            .http
            .request(Method::POST, "/assistant/chat")
            .await
            .json(&serde_json::json!({
                "workspace_id": workspace_id,
                "message": message,
            }))
            .send()
            .await?;
        let response = self.http.check(response).await?;

        decode_stream(response.bytes_stream(), |chunk| on_chunk(chunk)).await?;
        Ok(())
    }

    async fn open_message_stream(
        &self,
        workspace_id: &str,
        message: &str,
    ) -> Result<Pin<Box<dyn Stream<Item = asesor_stream::Result<String>> + Send>>> {
        let response = self
            .http
            .request(Method::POST, "/assistant/chat")
            .await
            .json(&serde_json::json!({
                "workspace_id": workspace_id,
                "message": message,
            }))
            .send()
            .await?;
        let response = self.http.check(response).await?;

        Ok(chunk_stream(response.bytes_stream()))
    }
}
