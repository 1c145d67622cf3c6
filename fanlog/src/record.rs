//! The log record passed to sinks during one dispatch.

use serde::{Deserialize, Serialize};

use crate::Level;

/// One log call's worth of data, borrowed for the duration of a single
/// fan-out.
///
/// A record is constructed per call, passed by reference to every registered
/// sink, and discarded when the dispatch returns.
/// Sinks that need to keep a record beyond the call (queues, test capture)
/// convert it with [`Record::to_owned`].
///
/// `message` carries its length in the slice; it is plain text with no
/// terminator semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    /// The severity level of this record.
    pub level: Level,

    /// The call site's source file, as produced by `file!()`.
    pub file: &'a str,

    /// The call site's source line, as produced by `line!()`.
    pub line: u32,

    /// The formatted message text.
    pub message: &'a str,
}

impl Record<'_> {
    /// Copies the borrowed record into an [`OwnedRecord`] with no remaining
    /// lifetime ties to the dispatch.
    #[must_use]
    pub fn to_owned(&self) -> OwnedRecord {
        OwnedRecord {
            level: self.level,
            file: self.file.into(),
            line: self.line,
            message: self.message.into(),
        }
    }
}

/// The owned mirror of [`Record`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRecord {
    /// The severity level of this record.
    pub level: Level,

    /// The call site's source file.
    pub file: String,

    /// The call site's source line.
    pub line: u32,

    /// The formatted message text.
    pub message: String,
}
