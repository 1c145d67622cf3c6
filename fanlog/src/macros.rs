//! Macros for leveled logging.
//!
//! - `log!`: Generic logging macro that accepts a level
//! - `debug!`: Logs debug-level messages, debug builds only
//! - `info!`: Logs informational messages
//! - `warning!`: Logs warning messages
//! - `error!`: Logs error messages
//! - `critical!`: Logs critical messages
//!
//! Every macro captures the call site's `file!()`/`line!()` and accepts a
//! `format!`-style template, so malformed template/argument pairs are
//! compile errors.

/// Logs a message with the specified level.
///
/// This is the base macro the level-specific macros build upon.
/// The template and arguments are checked at compile time and formatted once
/// before any sink runs.
///
/// # Examples
///
/// ```rust
/// use fanlog::Level;
///
/// fanlog::log!(Level::Info, "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($args:tt)*) => {
        $crate::log::log(
            $level,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($args)*),
        )
    };
}

/// Logs a debug-level message, in debug builds only.
///
/// In release builds the call expands to nothing: no formatting, no lock, no
/// dispatch.
/// The arguments are discarded before type checking, matching the zero
/// overhead of a disabled debug channel.
///
/// # Examples
///
/// ```rust
/// fanlog::debug!("frame took {}ms", 16);
/// ```
#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::log!($crate::Level::Debug, $($args)*)
        }
    }};
}

/// Logs an info-level message.
///
/// # Examples
///
/// ```rust
/// fanlog::info!("service started");
/// ```
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Info, $($args)*)
    };
}

/// Logs a warning-level message.
///
/// # Examples
///
/// ```rust
/// let attempts = 3;
/// fanlog::warning!("retrying, attempt {attempts}");
/// ```
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Warning, $($args)*)
    };
}

/// Logs an error-level message.
///
/// # Examples
///
/// ```rust
/// fanlog::error!("connection refused by {}", "10.0.0.1:9000");
/// ```
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Error, $($args)*)
    };
}

/// Logs a critical-level message.
///
/// Meant for messages printed right before a fatal error or crash.
///
/// # Examples
///
/// ```rust
/// fanlog::critical!("out of file descriptors");
/// ```
#[macro_export]
macro_rules! critical {
    ($($args:tt)*) => {
        $crate::log!($crate::Level::Critical, $($args)*)
    };
}
