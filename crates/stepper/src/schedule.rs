//! crates/stepper/src/schedule.rs
//!
//! Message schedule expansion with support for stopping at any word index.

use crate::constants::{BLOCK_WORDS, ROUNDS};
use crate::padding::Block;

/// `σ0(x) = ROTR⁷(x) ⊕ ROTR¹⁸(x) ⊕ SHR³(x)`
#[inline]
#[must_use]
pub const fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// `σ1(x) = ROTR¹⁷(x) ⊕ ROTR¹⁹(x) ⊕ SHR¹⁰(x)`
#[inline]
#[must_use]
pub const fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// The four terms summed to produce schedule word `t` (for `t >= 16`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordDerivation {
    /// Index of the derived word.
    pub index: usize,
    /// `w[t-16]`
    pub w16: u32,
    /// `σ0(w[t-15])`
    pub sigma0: u32,
    /// `w[t-7]`
    pub w7: u32,
    /// `σ1(w[t-2])`
    pub sigma1: u32,
    /// Wrapping sum of the four terms.
    pub result: u32,
}

/// The 64-word message schedule of one block, possibly only partly expanded.
///
/// Only the first [`computed_len`](Self::computed_len) words are meaningful;
/// the remainder stay zero and [`word`](Self::word) reports them as `None`.
/// Words are always produced in increasing index order, so stopping early and
/// resuming later with [`extend_to`](Self::extend_to) yields exactly the words
/// a single full expansion would.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MessageSchedule {
    words: [u32; ROUNDS],
    computed: usize,
}

impl Default for MessageSchedule {
    fn default() -> Self {
        Self::empty()
    }
}

impl MessageSchedule {
    /// A schedule with no words computed.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            words: [0; ROUNDS],
            computed: 0,
        }
    }

    /// Loads the block into words 0..=15 and expands through `upper`.
    ///
    /// `upper` is clamped to 63; values below 15 still load all sixteen block
    /// words because parsing the block is a single step.
    #[must_use]
    pub fn expand(block: &Block, upper: usize) -> Self {
        let mut schedule = Self::empty();
        schedule.words[..BLOCK_WORDS].copy_from_slice(block.words());
        schedule.computed = BLOCK_WORDS;
        schedule.extend_to(upper);
        schedule
    }

    /// Continues the expansion until word `upper` (clamped to 63) is computed.
    ///
    /// Calling this on an empty schedule has no effect: there is no block to
    /// derive from.
    pub fn extend_to(&mut self, upper: usize) {
        if self.computed < BLOCK_WORDS {
            return;
        }
        let upper = upper.min(ROUNDS - 1);
        while self.computed <= upper {
            let t = self.computed;
            self.words[t] = self.derive(t).result;
            self.computed += 1;
        }
        logging::trace_schedule!(computed = self.computed, "expanded schedule");
    }

    /// Number of leading words that hold computed values.
    #[inline]
    #[must_use]
    pub const fn computed_len(&self) -> usize {
        self.computed
    }

    /// Reports whether all 64 words are computed.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.computed == ROUNDS
    }

    /// Returns word `t` when it has been computed.
    #[must_use]
    pub fn word(&self, t: usize) -> Option<u32> {
        (t < self.computed).then(|| self.words[t])
    }

    /// The computed prefix of the schedule.
    #[must_use]
    pub fn computed(&self) -> &[u32] {
        &self.words[..self.computed]
    }

    /// All 64 slots; slots past [`computed_len`](Self::computed_len) are zero.
    #[must_use]
    pub const fn words(&self) -> &[u32; ROUNDS] {
        &self.words
    }

    /// Explains how word `t` was (or would next be) derived.
    ///
    /// Returns `None` for block words (`t < 16`) and for words whose inputs
    /// are not yet computed.
    #[must_use]
    pub fn derivation(&self, t: usize) -> Option<WordDerivation> {
        (BLOCK_WORDS..ROUNDS)
            .contains(&t)
            .then_some(t)
            .filter(|&t| t <= self.computed)
            .map(|t| self.derive(t))
    }

    fn derive(&self, t: usize) -> WordDerivation {
        let w16 = self.words[t - 16];
        let sigma0 = small_sigma0(self.words[t - 15]);
        let w7 = self.words[t - 7];
        let sigma1 = small_sigma1(self.words[t - 2]);
        WordDerivation {
            index: t,
            w16,
            sigma0,
            w7,
            sigma1,
            result: w16
                .wrapping_add(sigma0)
                .wrapping_add(w7)
                .wrapping_add(sigma1),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MessageSchedule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MessageSchedule", 2)?;
        state.serialize_field("computed", &self.computed)?;
        state.serialize_field("words", self.computed())?;
        state.end()
    }
}
