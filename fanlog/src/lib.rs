//! # `fanlog`
//!
//! A minimal leveled logging core: every log call fans out to a dynamic set
//! of registered sinks, safely under concurrent access.
//!
//! The crate deliberately stays small.
//! One process-wide registry holds the sinks, one exclusive lock guards it
//! for mutation and dispatch alike, and a log call delivers one formatted
//! record to every registered sink, synchronously and in registration order.
//! Everything else belongs to the sinks: where records end up, how they are
//! filtered, and what happens when a write fails.
//!
//! ## Basic Usage
//!
//! Register a sink, then log:
//!
//! ```rust
//! fanlog::add_sink(&fanlog::sink::STDERR_ANSI);
//!
//! fanlog::info!("server listening on {}", "0.0.0.0:8080");
//! fanlog::warning!("config file missing, using defaults");
//! ```
//!
//! The builtin console sinks print `[<tag>] <file>:<line> <message>` with the
//! bracketed tag colored by level on the ANSI variants.
//!
//! ## Custom Sinks
//!
//! A sink is any `'static` value implementing [`sink::Sink`]:
//!
//! ```rust
//! use fanlog::Record;
//! use fanlog::sink::Sink;
//!
//! #[derive(Debug)]
//! struct Collector(std::sync::Mutex<Vec<String>>);
//!
//! impl Sink for Collector {
//!     fn write(&self, record: &Record<'_>) {
//!         self.0.lock().unwrap().push(record.message.to_string());
//!     }
//! }
//!
//! static COLLECTED: Collector = Collector(std::sync::Mutex::new(Vec::new()));
//!
//! fanlog::add_sink(&COLLECTED);
//! fanlog::error!("kept for later");
//! fanlog::remove_sink(&COLLECTED);
//! ```
//!
//! Registration order is dispatch order, duplicates deliver twice, and
//! removing a sink that was never registered is a no-op.
//!
//! ## Concurrency
//!
//! Any thread may log or mutate the registry at any time.
//! A dispatch holds the registry lock for the whole fan-out, so it never
//! observes a half-applied registration change and two concurrent log calls
//! never interleave their sink invocations.
//! Sinks run on the logging thread; a sink doing blocking I/O stalls the
//! caller for that long.
//!
//! ## Release Builds
//!
//! [`debug!`] calls compile to nothing in release builds: no formatting, no
//! lock, no dispatch.
//! All other levels are always live.

mod level;
#[doc(hidden)]
pub mod log;
mod macros;
mod record;
mod registry;
pub mod sink;

pub use level::Level;
pub use record::{OwnedRecord, Record};
pub use registry::{add_sink, remove_sink};
