//! A sink that discards everything.

use super::Sink;
use crate::Record;

/// Sink that drops every record.
///
/// Useful as a placeholder while wiring up registration logic and as a
/// baseline when measuring sink overhead.
#[derive(Debug, Default)]
pub struct Null(());

impl Null {
    /// Creates the sink; it carries no state of its own.
    #[must_use]
    pub const fn new() -> Self {
        Null(())
    }
}

/// The shared [`Null`] instance.
pub static NULL: Null = Null::new();

impl Sink for Null {
    #[inline]
    fn write(&self, _record: &Record<'_>) {}
}
