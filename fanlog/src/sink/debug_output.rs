//! The Windows debugger output channel.

use windows_sys::Win32::System::Diagnostics::Debug::OutputDebugStringA;

use super::Sink;
use crate::Record;

/// Sink writing to the Windows debugger channel via `OutputDebugStringA`.
///
/// Unlike the console sinks this keeps the full source path, so a debugger
/// can resolve it back to the file.
/// Output lands in an attached debugger's output window, or nowhere when no
/// debugger listens.
///
/// # Examples
///
/// ```rust
/// fanlog::add_sink(&fanlog::sink::DEBUG_OUTPUT);
/// ```
#[derive(Debug, Default)]
pub struct DebugOutput(());

impl DebugOutput {
    /// Creates the sink; it carries no state of its own.
    #[must_use]
    pub const fn new() -> Self {
        DebugOutput(())
    }
}

/// The shared [`DebugOutput`] instance.
pub static DEBUG_OUTPUT: DebugOutput = DebugOutput::new();

impl Sink for DebugOutput {
    fn write(&self, record: &Record<'_>) {
        let mut line = format!(
            "[{tag}] {file}:{line} {message}\r\n",
            tag = record.level.tag(),
            file = record.file,
            line = record.line,
            message = record.message,
        )
        .into_bytes();

        // The channel takes a NUL-terminated string; a message containing an
        // interior NUL truncates there.
        line.push(0);

        // SAFETY: `line` is NUL-terminated and outlives the call.
        unsafe { OutputDebugStringA(line.as_ptr()) };
    }
}
