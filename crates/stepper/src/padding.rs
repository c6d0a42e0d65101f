//! crates/stepper/src/padding.rs
//!
//! Message padding (FIPS 180-4 section 5.1.1) and block parsing.

use crate::bits::BitString;
use crate::constants::{
    BLOCK_BITS, BLOCK_BYTES, BLOCK_WORDS, LENGTH_FIELD_BITS, LENGTH_OFFSET_BITS,
};
use crate::error::StepperError;

/// Breakdown of how a message was padded.
///
/// The fields mirror the presentational padding sub-steps: the message bits,
/// the single marker bit, `zero_bits` zeros and the 64-bit length field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaddingLayout {
    /// Bit length of the original message (also the value of the length field).
    pub message_bits: u64,
    /// Number of zero bits inserted after the marker bit.
    pub zero_bits: u64,
    /// Number of 512-bit blocks in the padded message.
    pub block_count: u64,
}

impl PaddingLayout {
    /// Computes the layout for a message of `message_bits` bits.
    pub fn for_bit_length(message_bits: u64) -> Result<Self, StepperError> {
        let overflow = StepperError::LengthOverflow {
            bits: u128::from(message_bits),
        };
        let with_marker = message_bits.checked_add(1).ok_or(overflow)?;
        let zero_bits =
            (LENGTH_OFFSET_BITS + BLOCK_BITS - with_marker % BLOCK_BITS) % BLOCK_BITS;
        let total = u128::from(with_marker) + u128::from(zero_bits) + u128::from(LENGTH_FIELD_BITS);
        if total > u128::from(u64::MAX) {
            return Err(overflow);
        }
        Ok(Self {
            message_bits,
            zero_bits,
            block_count: (total / u128::from(BLOCK_BITS)) as u64,
        })
    }

    /// Total bit length after padding; always a positive multiple of 512.
    #[must_use]
    pub const fn padded_bits(&self) -> u64 {
        self.block_count * BLOCK_BITS
    }
}

/// A message after padding, ready to be split into blocks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaddedMessage {
    bits: BitString,
    layout: PaddingLayout,
}

impl PaddedMessage {
    /// The padded bits: message, marker, zeros and length field.
    #[must_use]
    pub const fn bits(&self) -> &BitString {
        &self.bits
    }

    /// Layout describing each padding segment.
    #[must_use]
    pub const fn layout(&self) -> PaddingLayout {
        self.layout
    }

    /// Number of 512-bit blocks; at least one, even for an empty message.
    #[must_use]
    pub const fn block_count(&self) -> u64 {
        self.layout.block_count
    }

    /// Returns block `index`, or `None` past the last block.
    #[must_use]
    pub fn block(&self, index: u64) -> Option<Block> {
        if index >= self.block_count() {
            return None;
        }
        let start = usize::try_from(index).ok()?.checked_mul(BLOCK_BYTES)?;
        let chunk = self.bits.as_bytes().get(start..start + BLOCK_BYTES)?;
        Some(Block::from_bytes(chunk))
    }

    /// Iterates over every block in order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        (0..self.block_count()).filter_map(|index| self.block(index))
    }
}

/// Pads `message` to a whole number of 512-bit blocks.
///
/// Appends a single `1` bit, the minimum number of `0` bits that brings the
/// length to 448 modulo 512, and the original bit length as a 64-bit
/// big-endian integer.
pub fn pad(message: &BitString) -> Result<PaddedMessage, StepperError> {
    let layout = PaddingLayout::for_bit_length(message.len())?;
    let mut bits = message.clone();
    bits.push(true);
    for _ in 0..layout.zero_bits {
        bits.push(false);
    }
    bits.push_bits(layout.message_bits, LENGTH_FIELD_BITS as u32);
    debug_assert_eq!(bits.len(), layout.padded_bits());

    logging::trace_padding!(
        message_bits = layout.message_bits,
        zero_bits = layout.zero_bits,
        blocks = layout.block_count,
        "padded message"
    );

    Ok(PaddedMessage { bits, layout })
}

/// One 512-bit block viewed as sixteen big-endian words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block {
    words: [u32; BLOCK_WORDS],
}

impl Block {
    /// Parses a 64-byte chunk into sixteen big-endian words.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is not exactly 64 bytes long.
    #[must_use]
    pub fn from_bytes(chunk: &[u8]) -> Self {
        assert_eq!(chunk.len(), BLOCK_BYTES, "a block is exactly 64 bytes");
        let mut words = [0_u32; BLOCK_WORDS];
        for (word, bytes) in words.iter_mut().zip(chunk.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self { words }
    }

    /// The sixteen words of the block.
    #[must_use]
    pub const fn words(&self) -> &[u32; BLOCK_WORDS] {
        &self.words
    }
}
