use std::sync::{Arc, Mutex};

use super::Sink;
use crate::{OwnedRecord, Record};

/// A sink for testing that stores every delivered record in memory.
///
/// Useful in unit and integration tests that need to verify which records a
/// sequence of log calls produced.
#[derive(Debug)]
pub struct TestSink {
    /// Shared vector storing all delivered records.
    pub records: Arc<Mutex<Vec<OwnedRecord>>>,
}

impl TestSink {
    /// Creates a new test sink and returns both the sink and a handle to the
    /// record storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fanlog::sink::TestSink;
    ///
    /// let (sink, records) = TestSink::new();
    /// // Register the sink, log, then inspect `records`.
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<OwnedRecord>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                records: records.clone(),
            },
            records,
        )
    }
}

impl Sink for TestSink {
    fn write(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push(record.to_owned());
    }
}
