use std::collections::VecDeque;

/// Byte buffer that yields complete `\n`-terminated lines.
///
/// Bytes stay raw until a full line is available, so a multi-byte UTF-8
/// sequence arriving split across reads is never decoded in halves. Invalid
/// sequences inside a complete line are replaced, not fatal.
pub struct LineBuffer {
    buffer: VecDeque<u8>,
}

impl LineBuffer {
    /// Create a new buffer with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Add bytes to the buffer
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Extract the next complete line, without its `\n` and with at most one
    /// trailing `\r` stripped. Returns None until a full line is buffered.
    pub fn next_line(&mut self) -> Option<String> {
        let newline_pos = self.buffer.iter().position(|&b| b == b'\n')?;

        let mut line_bytes: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
        line_bytes.pop();
        if line_bytes.last() == Some(&b'\r') {
            line_bytes.pop();
        }

        Some(String::from_utf8_lossy(&line_bytes).into_owned())
    }

    /// Drain the unterminated tail once the stream has ended. One trailing
    /// `\r` is stripped, matching `next_line`.
    pub fn take_remainder(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }

        let mut rest: Vec<u8> = self.buffer.drain(..).collect();
        if rest.last() == Some(&b'\r') {
            rest.pop();
        }

        Some(String::from_utf8_lossy(&rest).into_owned())
    }

    /// Current buffer size
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_buffer_basic() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"line1\nline2\n");
        assert!(!buffer.is_empty());

        assert_eq!(buffer.next_line().unwrap(), "line1");
        assert_eq!(buffer.next_line().unwrap(), "line2");
        assert!(buffer.next_line().is_none());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_partial_line() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"partial");
        assert!(buffer.next_line().is_none());

        buffer.extend(b" line\n");
        assert_eq!(buffer.next_line().unwrap(), "partial line");
    }

    #[test]
    fn test_crlf_stripped_once() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"data: hi\r\n\r\n");
        assert_eq!(buffer.next_line().unwrap(), "data: hi");
        assert_eq!(buffer.next_line().unwrap(), "");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"  spaced  \n");
        assert_eq!(buffer.next_line().unwrap(), "  spaced  ");
    }

    #[test]
    fn test_split_multibyte_codepoint() {
        let mut buffer = LineBuffer::with_capacity(64);

        // "é" is 0xC3 0xA9; deliver it one byte at a time
        buffer.extend(&[0xC3]);
        assert!(buffer.next_line().is_none());
        buffer.extend(&[0xA9, b'\n']);
        assert_eq!(buffer.next_line().unwrap(), "é");
    }

    #[test]
    fn test_remainder_after_end() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"data: tail");
        assert!(buffer.next_line().is_none());
        assert_eq!(buffer.take_remainder().unwrap(), "data: tail");
        assert!(buffer.take_remainder().is_none());
    }
}
