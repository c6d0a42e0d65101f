#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of `shastep`. It decodes a
//! message given as text, binary or hex, positions a [`stepper::Stepper`] at
//! a clock, phase start or the terminal position, and prints the snapshot as
//! a text report or JSON. `--play` walks every remaining clock position and
//! prints one line (or one JSON object) per frame.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error. A [`clap`](https://docs.rs/clap/) builder
//! command performs the parse; `SHASTEP_BASE` and `SHASTEP_INTERVAL_MS`
//! provide defaults the command line overrides. Verbosity flags are handed
//! to the `logging` crate, whose tracing layer records engine diagnostics
//! that are drained to standard error between frames.
//!
//! # Invariants
//!
//! - `run` never panics; every failure yields exit code `1` and a single
//!   `shastep error: ...` line on standard error.
//! - `--help` and `--version` write only to standard output.
//! - Clock arguments are clamped rather than rejected.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["shastep", "--end", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! let report = String::from_utf8(stdout).unwrap();
//! assert!(report.contains("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
//! ```

mod frontend;
mod out_format;

pub use frontend::{BASE_ENV, INTERVAL_ENV, LOG_ENV, exit_code_from, run};
pub use out_format::{OutputFormat, OutputFormatParseError};

/// Parsing entry points exposed for integration tests.
///
/// Not part of the stable public API.
pub mod test_utils {
    pub use crate::frontend::{ParsedArgs, StartPosition, parse_args};
}
