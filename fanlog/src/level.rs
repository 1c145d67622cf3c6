//! Log severity levels and their terminal presentation.

use serde::{Deserialize, Serialize};

/// Log message severity levels.
///
/// These levels follow standard logging conventions, ordered from most verbose
/// to most critical.
/// The core uses them for dispatch and presentation only; it never filters on
/// them.
/// A sink that wants level-based filtering wraps a predicate, see
/// [`Filtered`][crate::sink::Filtered].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Level {
    /// The "debug" level.
    ///
    /// Designates lower priority information.
    /// Calls through [`debug!`][crate::debug] are compiled out of release
    /// builds entirely.
    Debug,

    /// The "info" level.
    ///
    /// Designates useful information.
    Info,

    /// The "warning" level.
    ///
    /// Designates hazardous situations.
    Warning,

    /// The "error" level.
    ///
    /// Designates very serious errors.
    Error,

    /// The "critical" level.
    ///
    /// Designates failures that will likely be followed by a crash or an
    /// abort.
    Critical,
}

impl Level {
    /// Returns the short lowercase tag used by the builtin sinks, e.g.
    /// `"warn"` for [`Level::Warning`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warn",
            Level::Error => "error",
            Level::Critical => "crit",
        }
    }

    /// Returns the ANSI SGR parameter string the colored builtin sinks wrap
    /// the bracketed tag in, e.g. `"1;32"` (bold green) for [`Level::Info`].
    ///
    /// The full escape sequence is `\x1b[<code>m…\x1b[0m`; only the
    /// parameters are returned so custom sinks can compose their own
    /// sequences.
    #[must_use]
    pub const fn ansi_color(self) -> &'static str {
        match self {
            Level::Debug => "1;34",    // bold blue
            Level::Info => "1;32",     // bold green
            Level::Warning => "1;33",  // bold yellow
            Level::Error => "1;31",    // bold red
            Level::Critical => "1;41", // bold white on red background
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::Level;

    #[test_case(Level::Debug, "debug", "1;34")]
    #[test_case(Level::Info, "info", "1;32")]
    #[test_case(Level::Warning, "warn", "1;33")]
    #[test_case(Level::Error, "error", "1;31")]
    #[test_case(Level::Critical, "crit", "1;41")]
    fn presentation(level: Level, tag: &str, color: &str) {
        assert_eq!(level.tag(), tag);
        assert_eq!(level.ansi_color(), color);
    }

    #[test]
    fn ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }
}
