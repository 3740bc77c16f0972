//! Logging macros.
//!
//! These forward to `tracing` when the `tracing` feature is enabled, and expand to nothing
//! otherwise.

/// Emits a `TRACE` level event.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }};
}

/// Emits a `DEBUG` level event.
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    }};
}
