//! Logging abstraction layer
//!
//! This module provides logging macros that work with both `log` and `tracing` crates.
//! Only the levels the crate emits are defined: `trace`, `debug` and `warn`.
//!
//! # Features
//!
//! - `log` (default) - Uses the standard `log` crate
//! - `tracing` - Uses the `tracing` crate for structured logging
//!
//! Choose one feature at compile time. They are mutually exclusive.
//!
//! # Usage
//!
//! ```ignore
//! use gpui_route_stack::{debug_log, trace_log};
//!
//! debug_log!("push {:?} (depth {})", route, depth);
//! trace_log!("pop on empty stack ignored");
//! ```

/// Trace-level logging (no-op mutations, render passes)
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Debug-level logging
///
/// Every effective stack mutation is logged at this level.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Warn-level logging
///
/// Used for requests the stack tolerates but clamps.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
