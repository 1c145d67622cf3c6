#![expect(missing_docs, reason = "example")]

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use fanlog::Record;
use fanlog::sink::{STDERR_ANSI, Sink};

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

static CUSTOM: FileSink = FileSink::new("custom_sink.log");

fn main() {
    fanlog::add_sink(&STDERR_ANSI);

    fanlog::info!("Hello world!");

    fanlog::add_sink(&CUSTOM);

    fanlog::warning!("this message will also go to custom_sink.log");
    fanlog::error!("and this one as well!");

    fanlog::remove_sink(&STDERR_ANSI);

    fanlog::critical!("this message will only go to custom_sink.log");
}
