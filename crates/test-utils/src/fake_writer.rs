use std::sync::Mutex;

use specrun::OutputBuffer;

/// An [`OutputBuffer`] that records its operations as a flat event stream.
///
/// Appended text is recorded verbatim; truncate and dump are recorded as
/// the markers `"TRUNCATE"` and `"DUMP"`, so tests can assert the exact
/// buffer policy the runner applied.
#[derive(Default)]
pub struct FakeWriter {
    events: Mutex<Vec<String>>,
}

impl FakeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_stream(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl OutputBuffer for FakeWriter {
    fn append(&self, text: &str) {
        self.events.lock().unwrap().push(text.to_string());
    }

    fn truncate(&self) {
        self.events.lock().unwrap().push("TRUNCATE".to_string());
    }

    fn dump(&self) {
        self.events.lock().unwrap().push("DUMP".to_string());
    }
}
