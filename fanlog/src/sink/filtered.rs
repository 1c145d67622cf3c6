//! Predicate-based filtering as a sink wrapper.

use super::Sink;
use crate::Record;

/// Sink that forwards to an inner sink only the records a predicate accepts.
///
/// The registry itself never filters; a sink that wants to see a subset of
/// records wraps the selection logic.
/// `Filtered` covers the common case where the selection is a pure function
/// of the record, level-based routing in particular.
///
/// # Examples
///
/// Deliver only warnings and above to the console:
///
/// ```rust
/// use fanlog::Level;
/// use fanlog::sink::{Filtered, STDERR_ANSI};
///
/// static IMPORTANT: Filtered = Filtered::new(
///     |record| record.level >= Level::Warning,
///     &STDERR_ANSI,
/// );
///
/// fanlog::add_sink(&IMPORTANT);
/// ```
#[derive(Debug)]
pub struct Filtered {
    predicate: fn(&Record<'_>) -> bool,
    inner: &'static (dyn Sink + Sync),
}

impl Filtered {
    /// Creates a filtering wrapper around `inner`.
    ///
    /// `const`, so a `Filtered` can live in a `static` and be registered
    /// directly.
    #[must_use]
    pub const fn new(predicate: fn(&Record<'_>) -> bool, inner: &'static (dyn Sink + Sync)) -> Self {
        Self { predicate, inner }
    }
}

impl Sink for Filtered {
    fn write(&self, record: &Record<'_>) {
        if (self.predicate)(record) {
            self.inner.write(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Filtered;
    use crate::sink::{Sink, TestSink};
    use crate::{Level, Record};

    #[test]
    fn forwards_only_accepted_records() {
        let (inner, captured) = TestSink::new();
        let filtered = Filtered::new(
            |record| record.level == Level::Error,
            Box::leak(Box::new(inner)),
        );

        for level in [Level::Debug, Level::Error, Level::Info, Level::Error] {
            filtered.write(&Record {
                level,
                file: "lib.rs",
                line: 1,
                message: "x",
            });
        }

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert!(captured.iter().all(|record| record.level == Level::Error));
    }
}
