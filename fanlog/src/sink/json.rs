//! Machine-readable console sink.

use std::io;

use super::Sink;
use crate::Record;

/// Sink writing each record as one JSON object per line to stdout.
///
/// # Examples
///
/// ```rust
/// fanlog::add_sink(&fanlog::sink::JSON);
/// ```
#[derive(Debug, Default)]
pub struct Json(());

impl Json {
    /// Creates the sink; it carries no state of its own.
    #[must_use]
    pub const fn new() -> Self {
        Json(())
    }
}

/// The shared [`Json`] instance.
pub static JSON: Json = Json::new();

impl Sink for Json {
    fn write(&self, record: &Record<'_>) {
        format_record(record, io::stdout());
    }
}

fn format_record(record: &Record<'_>, mut output: impl io::Write) {
    // A record serializes infallibly (plain struct, string keys); any error
    // here is the stream's, and the stream's failures stay with the sink.
    if serde_json::to_writer(&mut output, record).is_ok() {
        let _ = output.write_all(b"\n");
    }
}
