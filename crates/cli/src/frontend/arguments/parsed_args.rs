use encoding::InputBase;
use stepper::Phase;

use crate::out_format::OutputFormat;

/// Where inspection or playback starts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StartPosition {
    /// Clock zero.
    #[default]
    Start,
    /// An explicit clock, clamped into the message's timeline.
    Clock(i64),
    /// The terminal clock position.
    End,
    /// The first sub-step of `phase` in `block`.
    Phase {
        /// Zero-based block index.
        block: u64,
        /// Phase to jump to.
        phase: Phase,
    },
}

/// Parsed command-line arguments for the front end.
///
/// Environment defaults are already folded in: a field only holds a built-in
/// default when neither the command line nor the environment supplied one.
///
/// **Warning**: This type is exposed via `cli::test_utils` for integration
/// tests only. It is not part of the stable public API.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedArgs {
    /// `--help` / `-h`
    pub show_help: bool,
    /// `--version` / `-V`
    pub show_version: bool,
    /// The message operand; empty when omitted.
    pub message: String,
    /// Input base of the message.
    pub base: InputBase,
    /// Starting clock position.
    pub position: StartPosition,
    /// `--play`
    pub play: bool,
    /// Delay between playback frames in milliseconds.
    pub interval_ms: u64,
    /// Output format.
    pub format: OutputFormat,
    /// `--convert BASE`
    pub convert: Option<InputBase>,
    /// `--last-clock`
    pub last_clock: bool,
    /// Number of `-v` occurrences.
    pub verbose: u8,
    /// `--info` values, in command-line order.
    pub info: Vec<String>,
    /// `--debug` values, in command-line order.
    pub debug: Vec<String>,
}
