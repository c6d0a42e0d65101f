//! crates/stepper/src/snapshot.rs
//!
//! Reconstruction of the full algorithm state at a clock position.
//!
//! Evaluation never reuses state from an earlier call. Every snapshot is
//! re-derived from the padded message: completed blocks are compressed in
//! full and folded, then the active block is driven exactly as far as the
//! clock's phase and sub-step require.

use crate::bits::BitString;
use crate::clock::{Cursor, Phase, Timeline};
use crate::compression::{RoundTerms, WorkingRegisters, compress_rounds};
use crate::constants::{ROUND_CONSTANTS, ROUNDS};
use crate::digest::HashState;
use crate::error::StepperError;
use crate::padding::{Block, PaddedMessage, PaddingLayout, pad};
use crate::schedule::{MessageSchedule, WordDerivation};

/// Observable state of the computation at one clock position.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepSnapshot {
    /// Clock position after clamping.
    pub clock: u64,
    /// Terminal clock position of this message.
    pub last_clock: u64,
    /// Index of the active block.
    pub block: u64,
    /// Number of blocks in the padded message.
    pub block_count: u64,
    /// Phase of the active block.
    pub phase: Phase,
    /// Sub-step within the phase.
    pub step: u64,
    /// Presentational title of the sub-step.
    pub title: &'static str,
    /// Schedule word being computed during the schedule phase.
    pub current_word: Option<usize>,
    /// Compression round being computed during the compression phase.
    pub current_round: Option<usize>,
    /// The active block's schedule, populated up to the computed bound.
    pub schedule: MessageSchedule,
    /// Working registers after the most recent executed round.
    pub registers: WorkingRegisters,
    /// Working registers before the most recent executed round.
    pub previous_registers: WorkingRegisters,
    /// Running hash state.
    pub hash_state: HashState,
    /// Hash state before the most recent fold.
    pub previous_hash_state: HashState,
    /// Breakdown of the schedule word being computed.
    pub word_terms: Option<WordDerivation>,
    /// Breakdown of the compression round being computed.
    pub round_terms: Option<RoundTerms>,
    /// How the message was padded.
    pub padding: PaddingLayout,
    /// Set only at the terminal clock position.
    pub complete: bool,
    /// Final lowercase hex digest, present only when `complete`.
    pub digest: Option<String>,
}

impl StepSnapshot {
    /// Fraction of the timeline reached, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.last_clock == 0 {
            return 1.0;
        }
        self.clock as f64 / self.last_clock as f64
    }
}

/// Pads `message` and evaluates it at `clock`.
///
/// Clocks past the terminal position are clamped to it.
pub fn evaluate(message: &BitString, clock: u64) -> Result<StepSnapshot, StepperError> {
    evaluate_padded(&pad(message)?, clock)
}

/// Evaluates an already padded message at `clock`.
pub fn evaluate_padded(padded: &PaddedMessage, clock: u64) -> Result<StepSnapshot, StepperError> {
    let timeline = Timeline::new(padded.block_count());
    let cursor = timeline.locate(clock);

    let mut hash_state = HashState::INITIAL;
    let mut previous_hash_state = HashState::INITIAL;
    for index in 0..cursor.block {
        let block = block_at(padded, index)?;
        let registers = run_block(&block, &hash_state)?;
        previous_hash_state = hash_state;
        hash_state = hash_state.fold(&registers);
    }

    let block = block_at(padded, cursor.block)?;
    let active = drive_active_block(&block, &cursor, hash_state, previous_hash_state)?;

    logging::trace_clock!(
        clock = cursor.clock,
        block = cursor.block,
        phase = cursor.phase.name(),
        step = cursor.step,
        "evaluated clock position"
    );

    let complete = timeline.is_terminal(cursor.clock);
    Ok(StepSnapshot {
        clock: cursor.clock,
        last_clock: timeline.last_clock(),
        block: cursor.block,
        block_count: timeline.block_count(),
        phase: cursor.phase,
        step: cursor.step,
        title: cursor.step_title(),
        current_word: cursor.current_word(),
        current_round: cursor.current_round(),
        schedule: active.schedule,
        registers: active.registers,
        previous_registers: active.previous_registers,
        hash_state: active.hash_state,
        previous_hash_state: active.previous_hash_state,
        word_terms: active.word_terms,
        round_terms: active.round_terms,
        padding: padded.layout(),
        complete,
        digest: complete.then(|| active.hash_state.to_hex()),
    })
}

fn block_at(padded: &PaddedMessage, index: u64) -> Result<Block, StepperError> {
    padded.block(index).ok_or(StepperError::BlockOutOfRange {
        block: index,
        block_count: padded.block_count(),
    })
}

/// Compresses a whole block starting from `state` and returns the final registers.
fn run_block(block: &Block, state: &HashState) -> Result<WorkingRegisters, StepperError> {
    let schedule = MessageSchedule::expand(block, ROUNDS - 1);
    let outcome = compress_rounds(
        WorkingRegisters::from_hash_state(state),
        &schedule,
        &ROUND_CONSTANTS,
        0,
        ROUNDS - 1,
    )?;
    Ok(outcome.registers)
}

struct ActiveBlock {
    schedule: MessageSchedule,
    registers: WorkingRegisters,
    previous_registers: WorkingRegisters,
    hash_state: HashState,
    previous_hash_state: HashState,
    word_terms: Option<WordDerivation>,
    round_terms: Option<RoundTerms>,
}

fn drive_active_block(
    block: &Block,
    cursor: &Cursor,
    hash_state: HashState,
    previous_hash_state: HashState,
) -> Result<ActiveBlock, StepperError> {
    let initial = WorkingRegisters::from_hash_state(&hash_state);
    let mut active = ActiveBlock {
        schedule: MessageSchedule::empty(),
        registers: initial,
        previous_registers: initial,
        hash_state,
        previous_hash_state,
        word_terms: None,
        round_terms: None,
    };

    let Some(bound) = cursor.schedule_bound() else {
        return Ok(active);
    };
    active.schedule = MessageSchedule::expand(block, bound);

    match cursor.phase {
        Phase::Padding | Phase::Chunking | Phase::Initialization => {}
        Phase::Schedule => {
            active.word_terms = cursor
                .current_word()
                .and_then(|word| active.schedule.derivation(word));
        }
        Phase::Compression => {
            let round = cursor.current_round().unwrap_or(0);
            let outcome = compress_rounds(initial, &active.schedule, &ROUND_CONSTANTS, 0, round)?;
            active.registers = outcome.registers;
            active.previous_registers = outcome.before_last.unwrap_or(initial);
            active.round_terms = outcome.last_terms;
        }
        Phase::Digest => {
            let outcome =
                compress_rounds(initial, &active.schedule, &ROUND_CONSTANTS, 0, ROUNDS - 1)?;
            active.registers = outcome.registers;
            active.previous_registers = outcome.before_last.unwrap_or(initial);
            if cursor.step >= 1 {
                active.previous_hash_state = hash_state;
                active.hash_state = hash_state.fold(&outcome.registers);
            }
        }
    }
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CYCLE_LENGTH;

    fn abc() -> BitString {
        BitString::from_bytes(b"abc").expect("small input")
    }

    #[test]
    fn terminal_clock_yields_digest() {
        let snapshot = evaluate(&abc(), 124).expect("evaluates");
        assert!(snapshot.complete);
        assert_eq!(
            snapshot.digest.as_deref(),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn clock_past_end_is_clamped() {
        let snapshot = evaluate(&abc(), 9_999).expect("evaluates");
        assert_eq!(snapshot.clock, 124);
        assert!(snapshot.complete);
    }

    #[test]
    fn clock_zero_is_untouched_state() {
        let snapshot = evaluate(&abc(), 0).expect("evaluates");
        assert_eq!(snapshot.phase, Phase::Padding);
        assert_eq!(snapshot.schedule.computed_len(), 0);
        assert_eq!(snapshot.hash_state, HashState::INITIAL);
        assert_eq!(snapshot.previous_hash_state, HashState::INITIAL);
        assert_eq!(
            snapshot.registers,
            WorkingRegisters::from_hash_state(&HashState::INITIAL)
        );
        assert!(!snapshot.complete);
        assert!(snapshot.digest.is_none());
    }

    #[test]
    fn chunking_loads_block_words() {
        let snapshot = evaluate(&abc(), Phase::Chunking.offset()).expect("evaluates");
        assert_eq!(snapshot.schedule.computed_len(), 16);
        assert_eq!(snapshot.schedule.word(0), Some(0x6162_6380));
    }

    #[test]
    fn schedule_step_exposes_word_terms() {
        let snapshot = evaluate(&abc(), Phase::Schedule.offset() + 1).expect("evaluates");
        assert_eq!(snapshot.current_word, Some(17));
        assert_eq!(snapshot.schedule.computed_len(), 18);
        let terms = snapshot.word_terms.expect("word terms");
        assert_eq!(terms.index, 17);
        assert_eq!(terms.result, 0x000f_0000);
    }

    #[test]
    fn compression_step_runs_rounds_through_current() {
        let snapshot = evaluate(&abc(), Phase::Compression.offset()).expect("evaluates");
        assert_eq!(snapshot.current_round, Some(0));
        assert_eq!(snapshot.registers.a, 0x5d6a_ebcd);
        assert_eq!(
            snapshot.previous_registers,
            WorkingRegisters::from_hash_state(&HashState::INITIAL)
        );
        assert_eq!(snapshot.round_terms.map(|terms| terms.round), Some(0));
    }

    #[test]
    fn digest_folds_after_first_step() {
        let before = evaluate(&abc(), Phase::Digest.offset()).expect("evaluates");
        assert_eq!(before.hash_state, HashState::INITIAL);
        assert_eq!(before.registers.a, 0x506e_3058);

        let after = evaluate(&abc(), Phase::Digest.offset() + 1).expect("evaluates");
        assert_eq!(after.previous_hash_state, HashState::INITIAL);
        assert_eq!(
            after.hash_state.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(!after.complete);
    }

    #[test]
    fn second_block_starts_from_folded_state() {
        let message = BitString::from_bytes(&[0x61; 64]).expect("small input");
        let end_of_first = evaluate(&message, CYCLE_LENGTH - 1).expect("evaluates");
        let start_of_second = evaluate(&message, CYCLE_LENGTH).expect("evaluates");
        assert_eq!(start_of_second.block, 1);
        assert_eq!(start_of_second.hash_state, end_of_first.hash_state);
        assert_eq!(start_of_second.previous_hash_state, HashState::INITIAL);
        assert_eq!(
            start_of_second.registers,
            WorkingRegisters::from_hash_state(&end_of_first.hash_state)
        );
        assert!(!end_of_first.complete);
    }

    #[test]
    fn progress_reaches_one_at_end() {
        let snapshot = evaluate(&abc(), 124).expect("evaluates");
        assert!((snapshot.progress() - 1.0).abs() < f64::EPSILON);
    }
}
