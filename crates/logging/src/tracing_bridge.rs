//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity flag system.
//!
//! This module provides a tracing subscriber layer that maps tracing events
//! onto the info and debug flags. Engine code uses the `trace_*!` macros (or
//! plain tracing macros with a `shastep::` target) and the layer decides,
//! from the per-thread [`VerbosityConfig`], whether the event is recorded.
//!
//! # Architecture
//!
//! - [`StepperLayer`]: A tracing-subscriber layer that filters and records events
//! - Events are mapped to flags based on the last segment of their target
//! - Recorded events land in the per-thread buffer read by [`drain_events`](crate::drain_events)
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//!
//! tracing::info!(target: "shastep::digest", "final digest ready");
//! tracing::debug!(target: "shastep::padding", zero_bits = 423, "padded message");
//! ```

use std::fmt::{self, Write as _};

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that bridges tracing events to the verbosity flags.
///
/// The layer holds no state of its own: every event is checked against the
/// configuration installed for the emitting thread with [`init`](crate::init).
#[derive(Clone, Copy, Debug, Default)]
pub struct StepperLayer;

impl StepperLayer {
    /// Create the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The flag-bearing segment of a target: `shastep::padding` yields `padding`.
    fn subsystem(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        match Self::subsystem(target) {
            "input" | "encoding" => Some(InfoFlag::Input),
            "digest" => Some(InfoFlag::Digest),
            "progress" | "play" => Some(InfoFlag::Progress),
            _ => None,
        }
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        match Self::subsystem(target) {
            "padding" | "pad" => Some(DebugFlag::Padding),
            "schedule" => Some(DebugFlag::Schedule),
            "compress" | "compression" => Some(DebugFlag::Compress),
            "clock" => Some(DebugFlag::Clock),
            _ => None,
        }
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO | Level::DEBUG => 1,
            Level::TRACE => 2,
        }
    }
}

impl<S> Layer<S> for StepperLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        // Try to map to debug flag first (more specific)
        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            if debug_gte(debug_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                if let Some(message) = visitor.finish() {
                    emit_debug(debug_flag, verbosity_level, message);
                }
            }
            return;
        }

        if let Some(info_flag) = Self::target_to_info_flag(target) {
            if info_gte(info_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                if let Some(message) = visitor.finish() {
                    emit_info(info_flag, verbosity_level, message);
                }
            }
        }
    }
}

/// Visitor that renders an event as `message key=value ...`.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> Option<String> {
        match (self.message, self.fields.is_empty()) {
            (Some(message), true) => Some(message),
            (Some(message), false) => Some(format!("{message} {}", self.fields)),
            (None, false) => Some(self.fields),
            (None, true) => None,
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push_field(field.name(), format_args!("{value}"));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push_field(field.name(), format_args!("{value}"));
    }
}

/// Initialize tracing with the given verbosity configuration.
///
/// The configuration is always installed for the calling thread. The global
/// subscriber can only be set once per process; the return value reports
/// whether this call installed it.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(VerbosityConfig::from_verbose_level(1));
/// tracing::info!(target: "shastep::input", "decoded message");
/// ```
pub fn init_tracing(config: VerbosityConfig) -> bool {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    tracing_subscriber::registry()
        .with(StepperLayer::new())
        .try_init()
        .is_ok()
}

/// Initialize tracing with an extra filter in front of the verbosity layer.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let config = VerbosityConfig::from_verbose_level(2);
/// init_tracing_with_filter(config, EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(config: VerbosityConfig, filter: F) -> bool
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(StepperLayer::new())
        .try_init()
        .is_ok()
}
