#![expect(missing_docs, reason = "example")]

fn main() {
    fanlog::add_sink(&fanlog::sink::STDERR_ANSI);

    fanlog::debug!("Hello world");
    fanlog::info!("Hello world");
    fanlog::warning!("Hello world");
    fanlog::error!("Hello world");
    fanlog::critical!("Hello world");
}
