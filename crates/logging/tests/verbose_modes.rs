//! Integration tests for verbose mode mappings.
//!
//! These tests verify that VerbosityConfig::from_verbose_level maps the
//! `-v`, `-vv`, `-vvv` and `-vvvv` counts onto cumulative info and debug
//! flag combinations, and that `--info`/`--debug` tokens refine them.

use logging::{DebugFlag, InfoFlag, VerbosityConfig, debug_gte, drain_events, info_gte, init};

// ============================================================================
// Verbose Level 0 (No -v flags)
// ============================================================================

/// Verifies level 0 enables nothing.
#[test]
fn verbose_level_0_is_silent() {
    init(VerbosityConfig::from_verbose_level(0));

    for flag in InfoFlag::ALL {
        assert!(!info_gte(flag, 1), "{flag:?}");
    }
    for flag in DebugFlag::ALL {
        assert!(!debug_gte(flag, 1), "{flag:?}");
    }
}

// ============================================================================
// Verbose Level 1 (-v)
// ============================================================================

/// Verifies level 1 reports input decoding and the digest only.
#[test]
fn verbose_level_1_reports_input_and_digest() {
    init(VerbosityConfig::from_verbose_level(1));

    assert!(info_gte(InfoFlag::Input, 1));
    assert!(info_gte(InfoFlag::Digest, 1));
    assert!(!info_gte(InfoFlag::Progress, 1));
    assert!(!debug_gte(DebugFlag::Padding, 1));
}

// ============================================================================
// Verbose Levels 2-4 (-vv .. -vvvv)
// ============================================================================

/// Each additional `-v` keeps everything the previous level enabled.
#[test]
fn verbose_levels_are_cumulative() {
    for level in 1..=5_u8 {
        let lower = VerbosityConfig::from_verbose_level(level - 1);
        let higher = VerbosityConfig::from_verbose_level(level);
        for flag in InfoFlag::ALL {
            assert!(higher.info.get(flag) >= lower.info.get(flag), "{flag:?} at {level}");
        }
        for flag in DebugFlag::ALL {
            assert!(higher.debug.get(flag) >= lower.debug.get(flag), "{flag:?} at {level}");
        }
    }
}

/// Verifies level 3 adds clock and schedule diagnostics but not rounds.
#[test]
fn verbose_level_3_adds_clock_and_schedule() {
    init(VerbosityConfig::from_verbose_level(3));

    assert!(info_gte(InfoFlag::Progress, 1));
    assert!(debug_gte(DebugFlag::Padding, 1));
    assert!(debug_gte(DebugFlag::Clock, 1));
    assert!(debug_gte(DebugFlag::Schedule, 1));
    assert!(!debug_gte(DebugFlag::Compress, 1));
}

/// Verifies level 4 enables every category.
#[test]
fn verbose_level_4_enables_everything() {
    init(VerbosityConfig::from_verbose_level(4));

    assert!(InfoFlag::ALL.iter().all(|&flag| info_gte(flag, 1)));
    assert!(DebugFlag::ALL.iter().all(|&flag| debug_gte(flag, 1)));
}

// ============================================================================
// Flag Tokens
// ============================================================================

/// Tokens applied after the verbose level override individual flags.
#[test]
fn tokens_refine_the_verbose_level() {
    let mut config = VerbosityConfig::from_verbose_level(1);
    config.apply_info_list("digest0").expect("valid token");
    config.apply_debug_list("compress2").expect("valid token");
    init(config);
    drain_events();

    assert!(!info_gte(InfoFlag::Digest, 1));
    assert!(info_gte(InfoFlag::Input, 1));
    assert!(debug_gte(DebugFlag::Compress, 2));
    assert!(drain_events().is_empty());
}

/// Unknown tokens are rejected with the flag name in the message.
#[test]
fn unknown_tokens_are_rejected() {
    let mut config = VerbosityConfig::default();

    let err = config.apply_info_list("input,copy").expect_err("unknown info flag");
    assert!(err.contains("copy"));
    let err = config.apply_debug_flag("recv2").expect_err("unknown debug flag");
    assert!(err.contains("recv"));
}
