#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system used across the workspace.
//! Diagnostics are grouped into info categories ([`InfoFlag`]) and debug
//! categories ([`DebugFlag`]), each carrying an independent level. A
//! [`VerbosityConfig`] is built from the `-v` count and refined with
//! `--info`/`--debug` tokens such as `digest2` or `compress`.
//!
//! # Design
//!
//! Engine code emits ordinary `tracing` events through the `trace_*!` macros,
//! which attach a `shastep::<subsystem>` target. With the `tracing` feature
//! enabled, [`StepperLayer`] maps each target onto a flag, consults the
//! per-thread configuration and records accepted events into a per-thread
//! buffer. Front ends drain that buffer with [`drain_events`] or stream it
//! through a [`DiagnosticSink`].
//!
//! # Invariants
//!
//! - Configuration and the event buffer are thread-local; events recorded on
//!   one thread are never visible from another.
//! - A flag token without a numeric suffix means level 1.
//!
//! # Examples
//!
//! ```
//! use logging::{DebugFlag, InfoFlag, VerbosityConfig, debug_gte, info_gte, init};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flag("schedule").unwrap();
//! init(config);
//!
//! assert!(info_gte(InfoFlag::Digest, 1));
//! assert!(debug_gte(DebugFlag::Schedule, 1));
//! assert!(!debug_gte(DebugFlag::Compress, 1));
//! ```

mod config;
mod levels;
mod sink;
mod thread_local;
mod tracing_macros;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use sink::DiagnosticSink;
pub use thread_local::{
    DiagnosticEvent, debug_gte, drain_events, emit_debug, emit_info, info_gte, init,
};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{StepperLayer, init_tracing, init_tracing_with_filter};
