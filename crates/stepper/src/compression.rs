//! crates/stepper/src/compression.rs
//!
//! The SHA-256 round function over the eight working registers.

use crate::constants::{ROUNDS, RoundConstants};
use crate::digest::HashState;
use crate::error::StepperError;
use crate::schedule::MessageSchedule;

/// `Σ0(a) = ROTR²(a) ⊕ ROTR¹³(a) ⊕ ROTR²²(a)`
#[inline]
#[must_use]
pub const fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// `Σ1(e) = ROTR⁶(e) ⊕ ROTR¹¹(e) ⊕ ROTR²⁵(e)`
#[inline]
#[must_use]
pub const fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// `Ch(e, f, g) = (e ∧ f) ⊕ (¬e ∧ g)`
#[inline]
#[must_use]
pub const fn choice(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// `Maj(a, b, c) = (a ∧ b) ⊕ (a ∧ c) ⊕ (b ∧ c)`
#[inline]
#[must_use]
pub const fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// The eight working registers `a..h`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorkingRegisters {
    /// Register `a`.
    pub a: u32,
    /// Register `b`.
    pub b: u32,
    /// Register `c`.
    pub c: u32,
    /// Register `d`.
    pub d: u32,
    /// Register `e`.
    pub e: u32,
    /// Register `f`.
    pub f: u32,
    /// Register `g`.
    pub g: u32,
    /// Register `h`.
    pub h: u32,
}

/// Intermediate values of one compression round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundTerms {
    /// Round index.
    pub round: usize,
    /// `Σ1(e)`
    pub big_sigma1: u32,
    /// `Ch(e, f, g)`
    pub choice: u32,
    /// `T1 = h + Σ1 + Ch + k[t] + w[t]`
    pub temp1: u32,
    /// `Σ0(a)`
    pub big_sigma0: u32,
    /// `Maj(a, b, c)`
    pub majority: u32,
    /// `T2 = Σ0 + Maj`
    pub temp2: u32,
}

impl WorkingRegisters {
    /// Register names in storage order.
    pub const NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

    /// Loads `a..h` from `H0..H7`, as done at the start of every block.
    #[must_use]
    pub const fn from_hash_state(state: &HashState) -> Self {
        Self::from_array(*state.words())
    }

    /// Builds registers from `[a, b, c, d, e, f, g, h]`.
    #[must_use]
    pub const fn from_array(words: [u32; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = words;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    /// Returns `[a, b, c, d, e, f, g, h]`.
    #[must_use]
    pub const fn to_array(&self) -> [u32; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// Computes the intermediate terms of round `round` without applying them.
    #[must_use]
    pub const fn terms(&self, round: usize, k: u32, w: u32) -> RoundTerms {
        let big_sigma1 = big_sigma1(self.e);
        let choice = choice(self.e, self.f, self.g);
        let temp1 = self
            .h
            .wrapping_add(big_sigma1)
            .wrapping_add(choice)
            .wrapping_add(k)
            .wrapping_add(w);
        let big_sigma0 = big_sigma0(self.a);
        let majority = majority(self.a, self.b, self.c);
        RoundTerms {
            round,
            big_sigma1,
            choice,
            temp1,
            big_sigma0,
            majority,
            temp2: big_sigma0.wrapping_add(majority),
        }
    }

    /// Applies one round using round constant `k` and schedule word `w`.
    #[must_use]
    pub const fn round(&self, k: u32, w: u32) -> Self {
        let terms = self.terms(0, k, w);
        Self {
            a: terms.temp1.wrapping_add(terms.temp2),
            b: self.a,
            c: self.b,
            d: self.c,
            e: self.d.wrapping_add(terms.temp1),
            f: self.e,
            g: self.f,
            h: self.g,
        }
    }
}

/// Result of running a range of compression rounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompressionOutcome {
    /// Registers after the last executed round.
    pub registers: WorkingRegisters,
    /// Registers as they were before the last executed round, if any ran.
    pub before_last: Option<WorkingRegisters>,
    /// Terms of the last executed round, if any ran.
    pub last_terms: Option<RoundTerms>,
}

/// Runs rounds `from..=to` over `registers`.
///
/// An empty range (`from > to`) returns the registers unchanged. Every round
/// in the range must have its schedule word computed.
pub fn compress_rounds(
    registers: WorkingRegisters,
    schedule: &MessageSchedule,
    constants: &RoundConstants,
    from: usize,
    to: usize,
) -> Result<CompressionOutcome, StepperError> {
    if to >= ROUNDS {
        return Err(StepperError::RoundOutOfRange { round: to });
    }

    let mut outcome = CompressionOutcome {
        registers,
        before_last: None,
        last_terms: None,
    };
    for round in from..=to {
        let w = schedule
            .word(round)
            .ok_or(StepperError::ScheduleIncomplete {
                round,
                computed: schedule.computed_len(),
            })?;
        let k = constants[round];
        let current = outcome.registers;
        outcome = CompressionOutcome {
            registers: current.round(k, w),
            before_last: Some(current),
            last_terms: Some(current.terms(round, k, w)),
        };
    }

    logging::trace_compress!(from, to, a = outcome.registers.a, "ran compression rounds");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitString;
    use crate::constants::ROUND_CONSTANTS;
    use crate::padding::pad;

    fn abc_schedule(upper: usize) -> MessageSchedule {
        let message = BitString::from_bytes(b"abc").expect("small input");
        let block = pad(&message).expect("pads").block(0).expect("one block");
        MessageSchedule::expand(&block, upper)
    }

    fn initial_registers() -> WorkingRegisters {
        WorkingRegisters::from_hash_state(&HashState::INITIAL)
    }

    #[test]
    fn first_round_of_abc_matches_fips_example() {
        let outcome = compress_rounds(
            initial_registers(),
            &abc_schedule(63),
            &ROUND_CONSTANTS,
            0,
            0,
        )
        .expect("round 0 runs");
        assert_eq!(
            outcome.registers.to_array(),
            [
                0x5d6aebcd, 0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xfa2a4622, 0x510e527f, 0x9b05688c,
                0x1f83d9ab,
            ]
        );
        assert_eq!(outcome.before_last, Some(initial_registers()));
        assert_eq!(outcome.last_terms.map(|terms| terms.round), Some(0));
    }

    #[test]
    fn all_rounds_of_abc_match_fips_example() {
        let outcome = compress_rounds(
            initial_registers(),
            &abc_schedule(63),
            &ROUND_CONSTANTS,
            0,
            63,
        )
        .expect("all rounds run");
        assert_eq!(
            outcome.registers.to_array(),
            [
                0x506e3058, 0xd39a2165, 0x04d24d6c, 0xb85e2ce9, 0x5ef50f24, 0xfb121210, 0x948d25b6,
                0x961f4894,
            ]
        );
    }

    #[test]
    fn split_ranges_compose() {
        let schedule = abc_schedule(63);
        let first = compress_rounds(initial_registers(), &schedule, &ROUND_CONSTANTS, 0, 31)
            .expect("first half");
        let second = compress_rounds(first.registers, &schedule, &ROUND_CONSTANTS, 32, 63)
            .expect("second half");
        let whole = compress_rounds(initial_registers(), &schedule, &ROUND_CONSTANTS, 0, 63)
            .expect("whole");
        assert_eq!(second.registers, whole.registers);
        assert_eq!(second.before_last, whole.before_last);
    }

    #[test]
    fn empty_range_leaves_registers_alone() {
        let outcome = compress_rounds(
            initial_registers(),
            &abc_schedule(63),
            &ROUND_CONSTANTS,
            5,
            4,
        )
        .expect("empty range");
        assert_eq!(outcome.registers, initial_registers());
        assert_eq!(outcome.before_last, None);
    }

    #[test]
    fn round_past_63_is_rejected() {
        let err = compress_rounds(
            initial_registers(),
            &abc_schedule(63),
            &ROUND_CONSTANTS,
            0,
            64,
        )
        .unwrap_err();
        assert_eq!(err, StepperError::RoundOutOfRange { round: 64 });
    }

    #[test]
    fn missing_schedule_word_is_rejected() {
        let err = compress_rounds(
            initial_registers(),
            &abc_schedule(20),
            &ROUND_CONSTANTS,
            0,
            30,
        )
        .unwrap_err();
        assert_eq!(
            err,
            StepperError::ScheduleIncomplete {
                round: 21,
                computed: 21
            }
        );
    }

    #[test]
    fn terms_feed_the_register_update() {
        let registers = initial_registers();
        let terms = registers.terms(7, ROUND_CONSTANTS[7], 0xdead_beef);
        let next = registers.round(ROUND_CONSTANTS[7], 0xdead_beef);
        assert_eq!(next.a, terms.temp1.wrapping_add(terms.temp2));
        assert_eq!(next.e, registers.d.wrapping_add(terms.temp1));
        assert_eq!(next.h, registers.g);
    }

    #[test]
    fn choice_and_majority_truth_tables() {
        assert_eq!(choice(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(majority(0b1100, 0b1010, 0b0110), 0b1110);
    }
}
