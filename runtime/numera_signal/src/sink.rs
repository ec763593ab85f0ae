//! Diagnostic sinks for default handlers.
//!
//! Default handlers report conditions (division by zero, incompatible
//! comparisons) without failing the call. Where those reports go is
//! configurable:
//! - stderr (default)
//! - an in-memory buffer, for tests and transcript capture
//! - nowhere, for callers that only observe through listeners

use std::sync::Arc;

use parking_lot::Mutex;

/// Sink that writes each report to stderr.
#[derive(Default)]
pub struct StderrSink;

impl StderrSink {
    /// Write one report line.
    pub fn report(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Sink that captures reports into a buffer, one line per report.
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        BufferSink {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append one report line to the buffer.
    pub fn report(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// All captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Discard captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic sink with enum dispatch.
pub enum SinkImpl {
    /// Writes to stderr (default).
    Stderr(StderrSink),
    /// Captures to a buffer (tests, transcripts).
    Buffer(BufferSink),
    /// Discards every report.
    Silent,
}

impl SinkImpl {
    /// Write one report line.
    pub fn report(&self, msg: &str) {
        match self {
            Self::Stderr(s) => s.report(msg),
            Self::Buffer(s) => s.report(msg),
            Self::Silent => {}
        }
    }

    /// All captured output.
    ///
    /// Empty for sinks that do not capture (stderr, silent).
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(s) => s.get_output(),
            Self::Stderr(_) | Self::Silent => String::new(),
        }
    }

    /// Discard captured output. No-op for non-capturing sinks.
    pub fn clear(&self) {
        if let Self::Buffer(s) = self {
            s.clear();
        }
    }
}

/// Shared sink handle, cloneable across subjects.
pub type SharedSink = Arc<SinkImpl>;

/// Create the default stderr sink.
pub fn stderr_sink() -> SharedSink {
    Arc::new(SinkImpl::Stderr(StderrSink))
}

/// Create a capturing sink for tests and transcripts.
pub fn buffer_sink() -> SharedSink {
    Arc::new(SinkImpl::Buffer(BufferSink::new()))
}

/// Create a sink that discards every report.
pub fn silent_sink() -> SharedSink {
    Arc::new(SinkImpl::Silent)
}
