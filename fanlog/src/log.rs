//! Dispatch entry point used by the logging macros.

use std::fmt;

use crate::{Level, Record, registry};

/// Formats the message and fans the resulting record out to every registered
/// sink.
///
/// Prefer the macros; they capture `file`/`line` at the call site.
///
/// Formatting happens exactly once, before the registry lock is taken, so a
/// slow format never extends the critical section.
#[doc(hidden)]
pub fn log(level: Level, file: &'static str, line: u32, args: fmt::Arguments<'_>) {
    let storage;
    let message = match args.as_str() {
        // A bare literal needs no formatting pass and no allocation.
        Some(literal) => literal,
        None => {
            storage = fmt::format(args);
            &storage
        }
    };

    registry::dispatch(&Record {
        level,
        file,
        line,
        message,
    });
}
