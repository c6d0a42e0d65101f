//! crates/stepper/src/digest.rs
//!
//! Running hash state and the final hex rendering.

use std::fmt;

use crate::compression::WorkingRegisters;
use crate::constants::INITIAL_HASH;

/// The eight chained hash words `H0..H7`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HashState([u32; 8]);

impl Default for HashState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl HashState {
    /// `H(0)` from FIPS 180-4 section 5.3.3.
    pub const INITIAL: Self = Self(INITIAL_HASH);

    /// Wraps explicit hash words.
    #[must_use]
    pub const fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    /// Borrows `H0..H7`.
    #[must_use]
    pub const fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Adds the block's final registers into the state, word by word, mod 2³².
    #[must_use]
    pub fn fold(&self, registers: &WorkingRegisters) -> Self {
        let mut words = self.0;
        for (word, register) in words.iter_mut().zip(registers.to_array()) {
            *word = word.wrapping_add(register);
        }
        logging::trace_digest!(h0 = words[0], "folded block into hash state");
        Self(words)
    }

    /// 64 lowercase hex digits, eight per word, zero-padded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}
