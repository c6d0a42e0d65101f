//! crates/stepper/src/clock.rs
//!
//! Maps a global clock position onto `(block, phase, sub-step)`.
//!
//! Every block runs through the same fixed local cycle described by
//! [`PHASE_TABLE`]. The cumulative sub-step counts of the table define the
//! phase boundaries, so a clock value is located by splitting it into a block
//! index (`clock / CYCLE_LENGTH`) and a local position (`clock % CYCLE_LENGTH`)
//! and walking the table once.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BLOCK_WORDS, ROUNDS};
use crate::error::StepperError;
use crate::padding::PaddingLayout;

/// Phases of one block's local cycle, in execution order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// Presentational walk through the already computed padding.
    Padding,
    /// The block is parsed into schedule words 0..=15.
    Chunking,
    /// One sub-step per derived schedule word, 16..=63.
    Schedule,
    /// Working registers and round constants are introduced.
    Initialization,
    /// One sub-step per compression round, 0..=63.
    Compression,
    /// Registers are folded into the hash state and rendered.
    Digest,
}

/// Ordered `(phase, sub-step count)` pairs making up one block's cycle.
pub const PHASE_TABLE: [(Phase, u64); 6] = [
    (Phase::Padding, 5),
    (Phase::Chunking, 1),
    (Phase::Schedule, (ROUNDS - BLOCK_WORDS) as u64),
    (Phase::Initialization, 3),
    (Phase::Compression, ROUNDS as u64),
    (Phase::Digest, 4),
];

/// Number of clock positions spent on each block.
pub const CYCLE_LENGTH: u64 = cycle_length();

const fn cycle_length() -> u64 {
    let mut total = 0;
    let mut index = 0;
    while index < PHASE_TABLE.len() {
        total += PHASE_TABLE[index].1;
        index += 1;
    }
    total
}

const PADDING_TITLES: [&str; 5] = [
    "Message to bits",
    "Add '1' marker",
    "Pad with zeros",
    "Add length",
    "Block ready",
];
const INITIALIZATION_TITLES: [&str; 3] = [
    "Initialize working variables",
    "Round constants",
    "Compression overview",
];
const DIGEST_TITLES: [&str; 4] = [
    "Compression complete",
    "Update hash values",
    "Concatenate",
    "Final hash",
];

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Self; 6] = [
        Self::Padding,
        Self::Chunking,
        Self::Schedule,
        Self::Initialization,
        Self::Compression,
        Self::Digest,
    ];

    /// Number of sub-steps the phase occupies per block.
    #[must_use]
    pub const fn steps(self) -> u64 {
        PHASE_TABLE[self as usize].1
    }

    /// Local cycle position of the phase's first sub-step.
    #[must_use]
    pub const fn offset(self) -> u64 {
        let mut offset = 0;
        let mut index = 0;
        while index < self as usize {
            offset += PHASE_TABLE[index].1;
            index += 1;
        }
        offset
    }

    /// Lowercase identifier, also accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Chunking => "chunking",
            Self::Schedule => "schedule",
            Self::Initialization => "initialization",
            Self::Compression => "compression",
            Self::Digest => "digest",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a phase name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown phase '{0}' (expected padding, chunking, schedule, initialization, compression or digest)")]
pub struct ParsePhaseError(String);

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "padding" | "pad" => Ok(Self::Padding),
            "chunking" | "chunk" => Ok(Self::Chunking),
            "schedule" => Ok(Self::Schedule),
            "initialization" | "init" => Ok(Self::Initialization),
            "compression" | "compress" => Ok(Self::Compression),
            "digest" => Ok(Self::Digest),
            _ => Err(ParsePhaseError(s.to_owned())),
        }
    }
}

/// Splits a local cycle position into its phase and sub-step.
///
/// Positions past the end of the cycle resolve to the last digest sub-step.
#[must_use]
pub fn locate_local(local: u64) -> (Phase, u64) {
    let mut remaining = local.min(CYCLE_LENGTH - 1);
    for (phase, steps) in PHASE_TABLE {
        if remaining < steps {
            return (phase, remaining);
        }
        remaining -= steps;
    }
    (Phase::Digest, Phase::Digest.steps() - 1)
}

/// Pure forward transition; never clamps so that `retreat(advance(c)) == c`.
#[inline]
#[must_use]
pub const fn advance(clock: u64) -> u64 {
    clock.saturating_add(1)
}

/// Pure backward transition, saturating at zero.
#[inline]
#[must_use]
pub const fn retreat(clock: u64) -> u64 {
    clock.saturating_sub(1)
}

/// Final valid clock position for a message of `message_bits` bits.
pub fn last_valid_clock(message_bits: u64) -> Result<u64, StepperError> {
    Ok(Timeline::for_bit_length(message_bits)?.last_clock())
}

/// A resolved clock position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cursor {
    /// The (clamped) global clock value.
    pub clock: u64,
    /// Index of the active block.
    pub block: u64,
    /// Phase of the active block.
    pub phase: Phase,
    /// Sub-step within the phase.
    pub step: u64,
}

impl Cursor {
    /// Position inside the block's local cycle.
    #[must_use]
    pub const fn local(&self) -> u64 {
        self.phase.offset() + self.step
    }

    /// The schedule word being computed, during the schedule phase.
    #[must_use]
    pub const fn current_word(&self) -> Option<usize> {
        match self.phase {
            Phase::Schedule => Some(BLOCK_WORDS + self.step as usize),
            _ => None,
        }
    }

    /// The compression round being computed, during the compression phase.
    #[must_use]
    pub const fn current_round(&self) -> Option<usize> {
        match self.phase {
            Phase::Compression => Some(self.step as usize),
            _ => None,
        }
    }

    /// Highest schedule index populated at this position, if any.
    #[must_use]
    pub const fn schedule_bound(&self) -> Option<usize> {
        match self.phase {
            Phase::Padding => None,
            Phase::Chunking => Some(BLOCK_WORDS - 1),
            Phase::Schedule => Some(BLOCK_WORDS + self.step as usize),
            Phase::Initialization | Phase::Compression | Phase::Digest => Some(ROUNDS - 1),
        }
    }

    /// Short human-readable title of the sub-step.
    #[must_use]
    pub fn step_title(&self) -> &'static str {
        let step = self.step as usize;
        match self.phase {
            Phase::Padding => PADDING_TITLES[step.min(PADDING_TITLES.len() - 1)],
            Phase::Chunking => "Parse block into words",
            Phase::Schedule => "Compute schedule word",
            Phase::Initialization => {
                INITIALIZATION_TITLES[step.min(INITIALIZATION_TITLES.len() - 1)]
            }
            Phase::Compression => "Compression round",
            Phase::Digest => DIGEST_TITLES[step.min(DIGEST_TITLES.len() - 1)],
        }
    }
}

/// The clock range of one message, defined by its block count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timeline {
    block_count: u64,
}

impl Timeline {
    /// Timeline over `block_count` blocks; a count of zero is raised to one.
    #[must_use]
    pub const fn new(block_count: u64) -> Self {
        Self {
            block_count: if block_count == 0 { 1 } else { block_count },
        }
    }

    /// Timeline of a message of `message_bits` bits.
    pub fn for_bit_length(message_bits: u64) -> Result<Self, StepperError> {
        Ok(Self::new(PaddingLayout::for_bit_length(message_bits)?.block_count))
    }

    /// Number of blocks on the timeline.
    #[must_use]
    pub const fn block_count(&self) -> u64 {
        self.block_count
    }

    /// The terminal clock position.
    #[must_use]
    pub const fn last_clock(&self) -> u64 {
        self.block_count * CYCLE_LENGTH - 1
    }

    /// Clamps an unsigned clock into `[0, last_clock]`.
    #[must_use]
    pub const fn clamp_clock(&self, clock: u64) -> u64 {
        if clock > self.last_clock() {
            self.last_clock()
        } else {
            clock
        }
    }

    /// Clamps a signed clock into `[0, last_clock]`; negative values become zero.
    #[must_use]
    pub fn clamp(&self, clock: i64) -> u64 {
        u64::try_from(clock).map_or(0, |clock| self.clamp_clock(clock))
    }

    /// Resolves `target` as a jump destination.
    #[must_use]
    pub fn jump(&self, target: i64) -> u64 {
        self.clamp(target)
    }

    /// Reports whether `clock` is at (or past) the terminal position.
    #[must_use]
    pub const fn is_terminal(&self, clock: u64) -> bool {
        clock >= self.last_clock()
    }

    /// Resolves a clock value into block, phase and sub-step.
    #[must_use]
    pub fn locate(&self, clock: u64) -> Cursor {
        let clock = self.clamp_clock(clock);
        let (phase, step) = locate_local(clock % CYCLE_LENGTH);
        Cursor {
            clock,
            block: clock / CYCLE_LENGTH,
            phase,
            step,
        }
    }

    /// First clock position of `phase` within `block` (block clamped to the last).
    #[must_use]
    pub fn phase_start(&self, block: u64, phase: Phase) -> u64 {
        let block = block.min(self.block_count - 1);
        block * CYCLE_LENGTH + phase.offset()
    }

    /// Fraction of the timeline covered at `clock`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, clock: u64) -> f64 {
        let last = self.last_clock();
        if last == 0 {
            return 1.0;
        }
        self.clamp_clock(clock) as f64 / last as f64
    }
}
