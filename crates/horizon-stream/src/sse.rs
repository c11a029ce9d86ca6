//! Incremental Server-Sent-Events framing.
//!
//! The parser is pure: it buffers raw bytes and yields complete frames
//! regardless of how the transport chunks the stream.

/// One parsed SSE frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    /// The `id:` field, carrying the resumption cursor when present.
    pub id: Option<String>,
    /// The `event:` field, when present.
    pub event: Option<String>,
    /// The concatenated `data:` lines, joined with `\n`.
    pub data: String,
}

impl SseFrame {
    /// Whether the payload is a control string rather than a resource.
    ///
    /// Horizon signals liveness with payloads like `"hello"`; anything
    /// that is not a JSON object is treated as control.
    pub fn is_control(&self) -> bool {
        !self.data.trim_start().starts_with('{')
    }
}

/// Incremental parser over an SSE byte stream.
#[derive(Debug, Default)]
pub struct SseParser {
    buf: Vec<u8>,
}

impl SseParser {
    /// An empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes; returns every frame the chunk completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buf.extend_from_slice(chunk);
        let mut frames = Vec::new();
        while let Some(end) = find_frame_end(&self.buf) {
            let raw: Vec<u8> = self.buf.drain(..end).collect();
            if let Some(frame) = parse_frame(&raw) {
                frames.push(frame);
            }
        }
        frames
    }
}

/// Index one past the blank line terminating the first complete frame.
fn find_frame_end(buf: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i + 1 < buf.len() {
        if buf[i] == b'\n' {
            if buf[i + 1] == b'\n' {
                return Some(i + 2);
            }
            if buf[i + 1] == b'\r' && buf.get(i + 2) == Some(&b'\n') {
                return Some(i + 3);
            }
        }
        i += 1;
    }
    None
}

fn parse_frame(raw: &[u8]) -> Option<SseFrame> {
    let text = String::from_utf8_lossy(raw);
    let mut id = None;
    let mut event = None;
    let mut data_lines: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "id" => id = Some(value.to_string()),
            "event" => event = Some(value.to_string()),
            "data" => data_lines.push(value.to_string()),
            // `retry:` suggests a reconnect delay; the delay is a
            // client-side option here.
            _ => {}
        }
    }

    if id.is_none() && event.is_none() && data_lines.is_empty() {
        return None;
    }
    Some(SseFrame {
        id,
        event,
        data: data_lines.join("\n"),
    })
}
