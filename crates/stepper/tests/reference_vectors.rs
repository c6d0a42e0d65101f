//! Reference digest tests for the stepping engine.
//!
//! This test module validates evaluation at the terminal clock against:
//! 1. FIPS 180-4 published vectors
//! 2. The `sha2` crate for assorted lengths around block boundaries
//! 3. Multi-block chaining of the hash state
//! 4. Phase boundaries that must expose specific intermediate state

use sha2::{Digest, Sha256};
use stepper::{
    BitString, CYCLE_LENGTH, HashState, Phase, Stepper, Timeline, WorkingRegisters, evaluate,
    last_valid_clock,
};

fn reference_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(64);
    for byte in digest {
        write!(&mut out, "{byte:02x}").expect("write! to String cannot fail");
    }
    out
}

fn final_digest(bytes: &[u8]) -> String {
    let message = BitString::from_bytes(bytes).expect("test input fits");
    let last = last_valid_clock(message.len()).expect("length is representable");
    evaluate(&message, last)
        .expect("evaluation succeeds")
        .digest
        .expect("terminal clock carries a digest")
}

// ============================================================================
// FIPS 180-4 Published Vectors
// ============================================================================

mod published_vectors {
    use super::*;

    #[test]
    fn empty_message() {
        assert_eq!(
            final_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            final_digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn two_block_vector() {
        assert_eq!(
            final_digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }
}

// ============================================================================
// Comparison With The sha2 Crate
// ============================================================================

mod sha2_comparison {
    use super::*;

    #[test]
    fn lengths_around_block_boundaries() {
        for len in [1_usize, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 200] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            assert_eq!(final_digest(&data), reference_hex(&data), "length {len}");
        }
    }

    #[test]
    fn text_with_multibyte_characters() {
        let text = "Grüße, 世界! SHA-256 step by step.";
        assert_eq!(final_digest(text.as_bytes()), reference_hex(text.as_bytes()));
    }
}

// ============================================================================
// Multi-Block Chaining
// ============================================================================

mod chaining {
    use super::*;

    #[test]
    fn folded_state_seeds_next_block_registers() {
        let data = [0x5a_u8; 150];
        let message = BitString::from_bytes(&data).expect("test input fits");
        let timeline = Timeline::for_bit_length(message.len()).expect("representable");
        assert_eq!(timeline.block_count(), 3);

        for block in 0..timeline.block_count() - 1 {
            let finished = evaluate(&message, (block + 1) * CYCLE_LENGTH - 1).expect("evaluates");
            let init = evaluate(&message, timeline.phase_start(block + 1, Phase::Initialization))
                .expect("evaluates");
            assert_eq!(init.block, block + 1);
            assert_eq!(init.hash_state, finished.hash_state);
            assert_eq!(
                init.registers,
                WorkingRegisters::from_hash_state(&finished.hash_state)
            );
        }
        assert_eq!(final_digest(&data), reference_hex(&data));
    }

    #[test]
    fn only_the_final_block_completes() {
        let message = BitString::from_bytes(&[0_u8; 64]).expect("test input fits");
        let first_end = evaluate(&message, CYCLE_LENGTH - 1).expect("evaluates");
        assert!(!first_end.complete);
        assert!(first_end.digest.is_none());
        let last = evaluate(&message, 2 * CYCLE_LENGTH - 1).expect("evaluates");
        assert!(last.complete);
    }
}

// ============================================================================
// Phase Boundaries
// ============================================================================

mod boundaries {
    use super::*;

    #[test]
    fn schedule_complete_registers_untouched_at_compression_boundary() {
        let message = BitString::from_bytes(b"boundary").expect("test input fits");
        let mut stepper = Stepper::new(&message).expect("pads");
        stepper
            .jump_to_phase(0, Phase::Initialization)
            .expect("block 0 exists");
        let snapshot = stepper.snapshot().expect("evaluates");

        assert!(snapshot.schedule.is_complete());
        assert_eq!(snapshot.schedule.computed().len(), 64);
        assert_eq!(
            snapshot.registers,
            WorkingRegisters::from_hash_state(&HashState::INITIAL)
        );
        assert_eq!(snapshot.registers, snapshot.previous_registers);
        assert!(snapshot.current_round.is_none());
    }

    #[test]
    fn last_schedule_step_computes_word_63() {
        let message = BitString::from_bytes(b"abc").expect("test input fits");
        let snapshot = evaluate(&message, Phase::Initialization.offset() - 1).expect("evaluates");
        assert_eq!(snapshot.phase, Phase::Schedule);
        assert_eq!(snapshot.current_word, Some(63));
        assert_eq!(snapshot.schedule.word(63), Some(0x12b1_edeb));
    }

    #[test]
    fn last_compression_step_runs_round_63() {
        let message = BitString::from_bytes(b"abc").expect("test input fits");
        let snapshot = evaluate(&message, Phase::Digest.offset() - 1).expect("evaluates");
        assert_eq!(snapshot.current_round, Some(63));
        assert_eq!(snapshot.registers.a, 0x506e_3058);
        assert_eq!(snapshot.hash_state, HashState::INITIAL);
    }

    #[test]
    fn unaligned_message_pads_bitwise() {
        let message: BitString = "1011".chars().map(|c| c == '1').collect();
        let snapshot = evaluate(&message, 0).expect("evaluates");
        assert_eq!(snapshot.padding.message_bits, 4);
        assert_eq!(snapshot.padding.zero_bits, 443);
    }
}
