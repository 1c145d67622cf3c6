//! The process-wide sink registry and fan-out dispatch.
//!
//! One exclusive lock guards the registry for both mutation and dispatch:
//! registration changes never race with an in-flight fan-out, and each
//! dispatch observes a consistent registry from first sink to last.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Record;
use crate::sink::SinkRef;

/// Registered sinks, in registration order.
///
/// Const-initialized, so the registry exists (empty) from the first
/// instruction of the process with no initialization-order hazard.
static SINKS: Mutex<Vec<SinkRef>> = Mutex::new(Vec::new());

fn sinks() -> MutexGuard<'static, Vec<SinkRef>> {
    // A sink that panicked mid-dispatch poisons the mutex while the guard
    // unwinds.
    // The vector itself is never left mid-mutation, so the marker is
    // discarded and logging continues to work.
    SINKS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registers a sink.
///
/// The sink is appended to the registration order and receives every record
/// logged after this call returns.
/// Registering the same sink twice is allowed and causes duplicate delivery;
/// one [`remove_sink`] call strips both entries.
///
/// # Examples
///
/// ```rust
/// fanlog::add_sink(&fanlog::sink::STDERR_ANSI);
///
/// fanlog::info!("visible on stderr");
/// ```
pub fn add_sink(sink: SinkRef) {
    sinks().push(sink);
}

/// Unregisters a sink.
///
/// Every entry registered from the same reference is removed; entries are
/// matched by address, not by value.
/// Removing a sink that was never registered is a no-op, not an error.
///
/// # Examples
///
/// ```rust
/// use fanlog::sink::STDERR_MONO;
///
/// fanlog::add_sink(&STDERR_MONO);
/// fanlog::remove_sink(&STDERR_MONO);
///
/// fanlog::info!("delivered to no one");
/// ```
pub fn remove_sink(sink: SinkRef) {
    // Compare data pointers only: vtable addresses for the same object can
    // differ between codegen units.
    sinks().retain(|registered| !core::ptr::addr_eq(*registered, sink));
}

/// Delivers one record to every registered sink, in registration order.
///
/// The lock is held across the whole fan-out, so concurrent log calls do not
/// interleave their sink invocations and no sink observes a registry mutated
/// mid-dispatch.
/// If a sink panics, the panic propagates to the logging caller, the guard
/// releases the lock during unwinding, and the remaining sinks of this
/// dispatch are skipped.
pub(crate) fn dispatch(record: &Record<'_>) {
    for sink in sinks().iter() {
        sink.write(record);
    }
}
