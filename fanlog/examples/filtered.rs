#![expect(missing_docs, reason = "example")]

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use fanlog::sink::{Filtered, STDERR_ANSI, Sink};
use fanlog::{Level, Record};

/// A custom sink appending plain lines to a file, opened lazily on the first
/// record.
#[derive(Debug)]
struct FileSink {
    path: &'static str,
    file: Mutex<Option<File>>,
}

impl FileSink {
    const fn new(path: &'static str) -> Self {
        Self {
            path,
            file: Mutex::new(None),
        }
    }
}

impl Sink for FileSink {
    fn write(&self, record: &Record<'_>) {
        let mut guard = self.file.lock().unwrap();
        let file = guard.get_or_insert_with(|| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path)
                .expect("open log file")
        });

        let basename = record
            .file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(record.file);

        let _ = writeln!(
            file,
            "[{}] {}:{} {}",
            record.level.tag(),
            basename,
            record.line,
            record.message,
        );
    }
}

static WARNINGS: FileSink = FileSink::new("warnings.log");
static ERRORS: FileSink = FileSink::new("errors.log");
static CRITICAL: FileSink = FileSink::new("critical.log");

static WARNINGS_ONLY: Filtered = Filtered::new(|record| record.level == Level::Warning, &WARNINGS);
static ERRORS_ONLY: Filtered = Filtered::new(|record| record.level == Level::Error, &ERRORS);
static CRITICAL_ONLY: Filtered = Filtered::new(|record| record.level == Level::Critical, &CRITICAL);

fn main() {
    fanlog::add_sink(&STDERR_ANSI);
    fanlog::add_sink(&WARNINGS_ONLY);
    fanlog::add_sink(&ERRORS_ONLY);
    fanlog::add_sink(&CRITICAL_ONLY);

    fanlog::info!("Hello world!");

    fanlog::warning!("this message will go to warnings.log");
    fanlog::error!("this message will go to errors.log");
    fanlog::critical!("this message will go to critical.log");
}
