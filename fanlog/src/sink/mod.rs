//! The sink trait and the builtin sink catalog.
//!
//! A sink is an opaque callable that receives one [`Record`] per log call and
//! presents or persists it however it likes: console, file, OS debug channel.
//! Sinks are registered with [`add_sink`][crate::add_sink] and removed with
//! [`remove_sink`][crate::remove_sink]; during a log call every registered
//! sink is invoked synchronously, in registration order.
//!
//! # Builtin Sinks
//!
//! Each ready-made sink is exported as a shared `static` instance so that the
//! reference passed to `add_sink` has a stable address for later removal:
//!
//! - [`STDOUT_ANSI`] / [`STDERR_ANSI`] - colored console output
//! - [`STDOUT_MONO`] / [`STDERR_MONO`] - plain console output
//! - [`JSON`] - one JSON object per record on stdout
//! - [`Filtered`] - wraps another sink behind a predicate
//! - [`NULL`] - discards every record
//! - `DEBUG_OUTPUT` - the Windows debugger channel (Windows only)

mod console;
#[cfg(windows)]
mod debug_output;
mod filtered;
mod json;
mod null;
mod test_sink;

use core::fmt::Debug;

pub use console::{
    STDERR_ANSI, STDERR_MONO, STDOUT_ANSI, STDOUT_MONO, StderrAnsi, StderrMono, StdoutAnsi,
    StdoutMono,
};
#[cfg(windows)]
pub use debug_output::{DEBUG_OUTPUT, DebugOutput};
pub use filtered::Filtered;
pub use json::{JSON, Json};
pub use null::{NULL, Null};
#[doc(hidden)]
pub use test_sink::TestSink;

use crate::Record;

/// Trait for delivering one log record to an output.
///
/// Implementors define what happens to a record: writing, forwarding, or
/// dropping it.
/// The registry never inspects the record on a sink's behalf; filtering
/// belongs inside the sink (see [`Filtered`]).
///
/// Delivery is synchronous and runs while the registry lock is held, so a
/// slow sink stalls the logging caller.
/// I/O failures are the sink's own concern and must not panic the dispatch
/// unless the sink deliberately chooses to; the builtin sinks swallow write
/// errors.
///
/// # Examples
///
/// ```rust
/// use fanlog::Record;
/// use fanlog::sink::Sink;
///
/// #[derive(Debug)]
/// struct CustomSink;
///
/// impl Sink for CustomSink {
///     fn write(&self, record: &Record<'_>) {
///         eprintln!("{}: {}", record.level.tag(), record.message);
///     }
/// }
/// ```
pub trait Sink: Debug {
    /// Delivers one record.
    ///
    /// Called once per log call for every registered occurrence of the sink,
    /// with the same record each time.
    fn write(&self, record: &Record<'_>);
}

/// A registered sink reference.
///
/// The registry stores these by address; the same reference passed to
/// [`remove_sink`][crate::remove_sink] later identifies the entry to remove.
/// References are valid by construction, so the "null sink" contract
/// violation of callback-pointer registries cannot be expressed.
pub type SinkRef = &'static (dyn Sink + Sync);
