//! crates/logging/src/tracing_macros.rs
//! Convenience macros for subsystem-targeted tracing.
//!
//! These macros wrap the standard tracing macros with the targets that
//! `StepperLayer` maps onto verbosity flags. The calling
//! crate must depend on `tracing`.

/// Emit a padding trace.
///
/// # Example
/// ```ignore
/// trace_padding!(zero_bits = layout.zero_bits, "padded message");
/// ```
#[macro_export]
macro_rules! trace_padding {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "shastep::padding", $($arg)*);
    };
}

/// Emit a schedule expansion trace.
///
/// # Example
/// ```ignore
/// trace_schedule!(computed = 17, "expanded schedule");
/// ```
#[macro_export]
macro_rules! trace_schedule {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "shastep::schedule", $($arg)*);
    };
}

/// Emit a compression trace.
///
/// # Example
/// ```ignore
/// trace_compress!(from = 0, to = 63, "ran compression rounds");
/// ```
#[macro_export]
macro_rules! trace_compress {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "shastep::compress", $($arg)*);
    };
}

/// Emit a clock resolution trace.
///
/// # Example
/// ```ignore
/// trace_clock!(clock = 57, "evaluated clock position");
/// ```
#[macro_export]
macro_rules! trace_clock {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "shastep::clock", $($arg)*);
    };
}

/// Emit a digest trace.
///
/// # Example
/// ```ignore
/// trace_digest!(h0 = state.words()[0], "folded block into hash state");
/// ```
#[macro_export]
macro_rules! trace_digest {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "shastep::digest", $($arg)*);
    };
}

/// Emit an input decoding trace.
///
/// # Example
/// ```ignore
/// trace_input!(bits = message.len(), "decoded {} input", base);
/// ```
#[macro_export]
macro_rules! trace_input {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "shastep::input", $($arg)*);
    };
}

/// Emit a playback progress trace.
///
/// # Example
/// ```ignore
/// trace_progress!(clock, last, "frame");
/// ```
#[macro_export]
macro_rules! trace_progress {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "shastep::progress", $($arg)*);
    };
}
