//! Console sinks for the two standard output streams.

use std::io;

use super::Sink;
use crate::Record;

/// How [`format_record`] renders the level tag.
#[derive(Copy, Clone, Debug)]
enum Style {
    /// Wrap the bracketed tag in ANSI SGR codes.
    Ansi,
    /// Plain text, no escape sequences.
    Mono,
}

/// Writes one record as a single console line.
///
/// The layout is `[<tag>] <basename>:<line> <message>` followed by CRLF, with
/// the bracketed tag wrapped in `\x1b[<code>m…\x1b[0m` for [`Style::Ansi`].
/// Write errors are swallowed; a closed or redirected stream loses records
/// without affecting the dispatch.
fn format_record(record: &Record<'_>, style: Style, mut output: impl io::Write) {
    // `file!()` carries the separators of whichever host compiled the call
    // site, so split on both.
    let basename = record
        .file
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(record.file);

    let tag = record.level.tag();

    let result = match style {
        Style::Ansi => {
            let color = record.level.ansi_color();
            write!(
                output,
                "\x1b[{color}m[{tag}]\x1b[0m {basename}:{line} {message}\r\n",
                line = record.line,
                message = record.message,
            )
        }
        Style::Mono => write!(
            output,
            "[{tag}] {basename}:{line} {message}\r\n",
            line = record.line,
            message = record.message,
        ),
    };

    // The sink owns its failure policy: attempted delivery, not guaranteed.
    let _ = result;
}

macro_rules! console_sink {
    ($name:ident, $instance:ident, $style:ident, $stream:path, $doc_stream:literal, $doc_style:literal) => {
        #[doc = concat!("Sink writing ", $doc_style, " lines to ", $doc_stream, ".")]
        ///
        #[doc = concat!(
            "Register the shared [`", stringify!($instance),
            "`] instance; its address is what a later removal matches on."
        )]
        ///
        /// # Examples
        ///
        /// ```rust
        #[doc = concat!("fanlog::add_sink(&fanlog::sink::", stringify!($instance), ");")]
        /// ```
        #[derive(Debug, Default)]
        pub struct $name(());

        impl $name {
            /// Creates the sink; it carries no state of its own.
            #[must_use]
            pub const fn new() -> Self {
                $name(())
            }
        }

        impl Sink for $name {
            fn write(&self, record: &Record<'_>) {
                format_record(record, Style::$style, $stream());
            }
        }

        #[doc = concat!("The shared [`", stringify!($name), "`] instance.")]
        pub static $instance: $name = $name::new();
    };
}

console_sink!(StdoutAnsi, STDOUT_ANSI, Ansi, io::stdout, "stdout", "colored");
console_sink!(StdoutMono, STDOUT_MONO, Mono, io::stdout, "stdout", "plain");
console_sink!(StderrAnsi, STDERR_ANSI, Ansi, io::stderr, "stderr", "colored");
console_sink!(StderrMono, STDERR_MONO, Mono, io::stderr, "stderr", "plain");

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Style, format_record};
    use crate::{Level, Record};

    fn rendered(record: &Record<'_>, style: Style) -> String {
        let mut output = Vec::new();
        format_record(record, style, &mut output);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn ansi_layout() {
        let record = Record {
            level: Level::Info,
            file: "src/main.rs",
            line: 42,
            message: "Hello world",
        };

        assert_eq!(
            rendered(&record, Style::Ansi),
            "\x1b[1;32m[info]\x1b[0m main.rs:42 Hello world\r\n",
        );
    }

    #[test]
    fn mono_layout() {
        let record = Record {
            level: Level::Critical,
            file: "src/net/socket.rs",
            line: 7,
            message: "connection lost",
        };

        assert_eq!(
            rendered(&record, Style::Mono),
            "[crit] socket.rs:7 connection lost\r\n",
        );
    }

    #[test]
    fn every_level_tag_and_color() {
        let expected = [
            (Level::Debug, "\x1b[1;34m[debug]\x1b[0m lib.rs:1 x\r\n"),
            (Level::Info, "\x1b[1;32m[info]\x1b[0m lib.rs:1 x\r\n"),
            (Level::Warning, "\x1b[1;33m[warn]\x1b[0m lib.rs:1 x\r\n"),
            (Level::Error, "\x1b[1;31m[error]\x1b[0m lib.rs:1 x\r\n"),
            (Level::Critical, "\x1b[1;41m[crit]\x1b[0m lib.rs:1 x\r\n"),
        ];

        for (level, line) in expected {
            let record = Record {
                level,
                file: "lib.rs",
                line: 1,
                message: "x",
            };

            assert_eq!(rendered(&record, Style::Ansi), line);
        }
    }

    #[test]
    fn windows_path_separators() {
        let record = Record {
            level: Level::Warning,
            file: r"src\gui\panel.rs",
            line: 360,
            message: "redraw stalled",
        };

        assert_eq!(
            rendered(&record, Style::Mono),
            "[warn] panel.rs:360 redraw stalled\r\n",
        );
    }
}
