// src/writer.rs

//! The per-run output buffer.
//!
//! Units write diagnostic output through an [`OutputBuffer`] while they run.
//! The runner truncates the buffer before each executed unit so that the
//! buffer window only ever holds one unit's output, and dumps it to the
//! underlying sink only when that unit fails. Output from passing units is
//! discarded silently.

use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

/// Append-only event sink with truncate (reset-and-discard) and dump
/// (flush-and-preserve) operations.
pub trait OutputBuffer: Send + Sync {
    fn append(&self, text: &str);
    fn truncate(&self);
    fn dump(&self);
}

/// [`OutputBuffer`] implementation that buffers in memory and dumps to an
/// `io::Write` sink.
pub struct BufferingWriter<W: Write + Send> {
    inner: Mutex<Inner<W>>,
}

struct Inner<W> {
    buffer: String,
    sink: W,
}

impl<W: Write + Send> BufferingWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            inner: Mutex::new(Inner {
                buffer: String::new(),
                sink,
            }),
        }
    }
}

impl<W: Write + Send> OutputBuffer for BufferingWriter<W> {
    fn append(&self, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.buffer.push_str(text);
        inner.buffer.push('\n');
    }

    fn truncate(&self) {
        self.inner.lock().unwrap().buffer.clear();
    }

    fn dump(&self) {
        let mut inner = self.inner.lock().unwrap();
        let Inner { buffer, sink } = &mut *inner;
        // Sink errors are logged, never propagated: nothing may escape a run.
        if let Err(err) = sink.write_all(buffer.as_bytes()).and_then(|()| sink.flush()) {
            warn!(error = %err, "failed to dump buffered output to sink");
        }
    }
}
