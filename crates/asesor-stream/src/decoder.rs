use tracing::debug;

use crate::buffer::LineBuffer;
use crate::error::{Result, StreamError};

const DONE_SENTINEL: &str = "[DONE]";
const DEFAULT_ERROR_MESSAGE: &str = "assistant returned an error";

/// Event type of the record being assembled. Any `event:` label other than
/// `error` maps to `Message`; an empty label resets to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum EventType {
    #[default]
    Message,
    Error,
}

impl EventType {
    fn from_label(label: &str) -> Self {
        if label == "error" {
            Self::Error
        } else {
            Self::Message
        }
    }
}

/// State for one decode invocation over an SSE-framed byte stream.
///
/// Records are groups of `event:`/`data:` lines separated by blank lines.
/// A record whose payload is `[DONE]` terminates the stream; an
/// `event: error` record aborts it. Everything else is emitted to the
/// caller line by line, in arrival order.
pub struct SseDecoder {
    lines: LineBuffer,
    event_type: EventType,
    data_lines: Vec<String>,
    done_seen: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self {
            lines: LineBuffer::with_capacity(4096),
            event_type: EventType::Message,
            data_lines: Vec::new(),
            done_seen: false,
        }
    }

    /// Ingest one binary block, emitting a chunk per completed payload line.
    ///
    /// Fails only on an `event: error` record; chunks emitted before the
    /// failing record have already been handed to `on_chunk`.
    pub fn feed(&mut self, bytes: &[u8], mut on_chunk: impl FnMut(&str)) -> Result<()> {
        self.lines.extend(bytes);

        while let Some(line) = self.lines.next_line() {
            if line.is_empty() {
                self.flush_record(&mut on_chunk)?;
                continue;
            }
            self.handle_field_line(&line);
        }

        Ok(())
    }

    /// Signal end-of-stream: interpret a trailing unterminated line, flush
    /// the last record, and verify the `[DONE]` terminator was seen.
    pub fn finish(mut self, mut on_chunk: impl FnMut(&str)) -> Result<()> {
        if let Some(tail) = self.lines.take_remainder() {
            if !tail.is_empty() {
                self.handle_field_line(&tail);
            }
        }

        self.flush_record(&mut on_chunk)?;

        if !self.done_seen {
            return Err(StreamError::Interrupted);
        }
        Ok(())
    }

    fn handle_field_line(&mut self, line: &str) {
        if let Some(label) = line.strip_prefix("event:") {
            self.event_type = EventType::from_label(label.trim());
            return;
        }

        if let Some(content) = line.strip_prefix("data:") {
            // Only a single leading space is part of the framing
            let content = content.strip_prefix(' ').unwrap_or(content);
            self.data_lines.push(content.to_string());
        }

        // Any other field (id:, retry:, comments) is not part of the protocol
    }

    /// Flush the assembled record. The joined payload is used only to detect
    /// the terminator and to build error messages; emission is per original
    /// line, with an empty payload line becoming a lone newline.
    fn flush_record(&mut self, on_chunk: &mut impl FnMut(&str)) -> Result<()> {
        let event_type = self.event_type;
        let data = std::mem::take(&mut self.data_lines);
        self.event_type = EventType::Message;

        if data.is_empty() {
            return Ok(());
        }

        let joined = data.join("\n");
        if joined.trim() == DONE_SENTINEL {
            debug!("terminator record received");
            self.done_seen = true;
            return Ok(());
        }

        if event_type == EventType::Error {
            let message = if joined.is_empty() {
                DEFAULT_ERROR_MESSAGE.to_string()
            } else {
                joined
            };
            return Err(StreamError::Protocol { message });
        }

        for part in &data {
            if part.is_empty() {
                on_chunk("\n");
            } else {
                on_chunk(part);
            }
        }

        Ok(())
    }
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::new()
    }
}
