//! crates/stepper/src/stepper.rs
//!
//! Interactive driver that owns a clock and re-evaluates on demand.

use crate::bits::BitString;
use crate::clock::{self, Phase, Timeline};
use crate::error::StepperError;
use crate::padding::{PaddedMessage, pad};
use crate::snapshot::{StepSnapshot, evaluate_padded};

/// A message bound to a clock position within `[0, last_clock]`.
///
/// The stepper keeps only the padded message and the clock. Each call to
/// [`snapshot`](Self::snapshot) re-derives the state from scratch, so moving
/// backwards, seeking and replaying always agree with stepping forwards.
#[derive(Clone, Debug)]
pub struct Stepper {
    padded: PaddedMessage,
    timeline: Timeline,
    clock: u64,
}

impl Stepper {
    /// Pads `message` and positions the clock at zero.
    pub fn new(message: &BitString) -> Result<Self, StepperError> {
        Ok(Self::from_padded(pad(message)?))
    }

    /// Wraps an already padded message.
    #[must_use]
    pub fn from_padded(padded: PaddedMessage) -> Self {
        let timeline = Timeline::new(padded.block_count());
        Self {
            padded,
            timeline,
            clock: 0,
        }
    }

    /// Current clock position.
    #[must_use]
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Terminal clock position.
    #[must_use]
    pub const fn last_clock(&self) -> u64 {
        self.timeline.last_clock()
    }

    /// Timeline the clock moves along.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The padded message being stepped through.
    #[must_use]
    pub const fn padded(&self) -> &PaddedMessage {
        &self.padded
    }

    /// Moves one position forward, stopping at the terminal position.
    pub fn advance(&mut self) -> u64 {
        self.clock = self.timeline.clamp_clock(clock::advance(self.clock));
        self.clock
    }

    /// Moves one position back, stopping at zero.
    pub fn retreat(&mut self) -> u64 {
        self.clock = clock::retreat(self.clock);
        self.clock
    }

    /// Moves to `target`, clamped into the timeline.
    pub fn jump(&mut self, target: i64) -> u64 {
        self.clock = self.timeline.jump(target);
        self.clock
    }

    /// Moves to the first sub-step of `phase` in `block`.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::BlockOutOfRange`] when `block` is not part of
    /// the padded message; the clock is left where it was.
    pub fn jump_to_phase(&mut self, block: u64, phase: Phase) -> Result<u64, StepperError> {
        let block_count = self.timeline.block_count();
        if block >= block_count {
            return Err(StepperError::BlockOutOfRange { block, block_count });
        }
        self.clock = self.timeline.phase_start(block, phase);
        Ok(self.clock)
    }

    /// Moves to the terminal position.
    pub fn run_to_completion(&mut self) -> u64 {
        self.clock = self.timeline.last_clock();
        self.clock
    }

    /// Moves back to clock zero.
    pub fn reset(&mut self) {
        self.clock = 0;
    }

    /// Fraction of the timeline reached.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.timeline.progress(self.clock)
    }

    /// Reports whether the clock sits at the terminal position.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.timeline.is_terminal(self.clock)
    }

    /// Evaluates the current clock position.
    pub fn snapshot(&self) -> Result<StepSnapshot, StepperError> {
        evaluate_padded(&self.padded, self.clock)
    }

    /// Iterates snapshots from the current position through the terminal one.
    ///
    /// The stepper itself is not moved.
    #[must_use]
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            padded: &self.padded,
            next: Some(self.clock),
            last: self.timeline.last_clock(),
        }
    }
}

/// Iterator over consecutive snapshots, produced by [`Stepper::frames`].
#[derive(Debug)]
pub struct Frames<'a> {
    padded: &'a PaddedMessage,
    next: Option<u64>,
    last: u64,
}

impl Iterator for Frames<'_> {
    type Item = Result<StepSnapshot, StepperError>;

    fn next(&mut self) -> Option<Self::Item> {
        let clock = self.next?;
        self.next = (clock < self.last).then(|| clock::advance(clock));
        Some(evaluate_padded(self.padded, clock))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |clock| usize::try_from(self.last - clock + 1).unwrap_or(usize::MAX));
        (remaining, Some(remaining))
    }
}
