//! crates/stepper/src/error.rs
//!
//! Error type shared by the padding, schedule and compression stages.

use thiserror::Error;

/// Errors reported by the stepping engine.
///
/// Clock values are never an error: out-of-range positions are clamped by
/// [`Timeline`](crate::Timeline). Every variant here is a precondition the
/// caller violated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum StepperError {
    /// The message bit length (or the padded length derived from it) does not
    /// fit the 64-bit length field.
    #[error("message length of {bits} bits cannot be encoded in the 64-bit length field")]
    LengthOverflow {
        /// Bit length that triggered the overflow.
        bits: u128,
    },
    /// A compression round index beyond 63 was requested.
    #[error("compression round {round} is outside 0..=63")]
    RoundOutOfRange {
        /// Requested round index.
        round: usize,
    },
    /// A compression round needs a schedule word that has not been expanded yet.
    #[error("round {round} reads w[{round}] but only {computed} schedule words are computed")]
    ScheduleIncomplete {
        /// Round that requested the missing word.
        round: usize,
        /// Number of schedule words available.
        computed: usize,
    },
    /// A block index past the end of the padded message was requested.
    #[error("block {block} does not exist; the padded message has {block_count} blocks")]
    BlockOutOfRange {
        /// Requested block index.
        block: u64,
        /// Number of blocks available.
        block_count: u64,
    },
}
