//! Tests for environment variable influence on argument defaults.
//!
//! Validates that `SHASTEP_BASE` and `SHASTEP_INTERVAL_MS` supply defaults
//! when the matching option is absent, and that the command line wins.

use cli::test_utils::parse_args;
use cli::{BASE_ENV, INTERVAL_ENV};
use encoding::InputBase;
use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

// Restores the previous values on drop, even if the test panics.
struct EnvGuard {
    entries: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn new() -> Self {
        let lock = env_lock()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut guard = Self {
            entries: Vec::new(),
            _lock: lock,
        };
        guard.remove(BASE_ENV);
        guard.remove(INTERVAL_ENV);
        guard
    }

    fn track(&mut self, key: &'static str) {
        if self.entries.iter().all(|(existing, _)| existing != &key) {
            self.entries.push((key, env::var_os(key)));
        }
    }

    fn set(&mut self, key: &'static str, value: &str) {
        self.track(key);
        // SAFETY: Environment mutations are serialized by the global lock.
        unsafe {
            env::set_var(key, value);
        }
    }

    fn remove(&mut self, key: &'static str) {
        self.track(key);
        // SAFETY: Environment mutations are serialized by the global lock.
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.entries.drain(..).rev() {
            // SAFETY: Test environment cleanup while still holding the lock.
            unsafe {
                match value {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

// ============================================================================
// SHASTEP_BASE Environment Variable
// ============================================================================

#[test]
fn base_defaults_to_text_without_environment() {
    let _guard = EnvGuard::new();
    let args = parse_args(["shastep", "abc"]).unwrap();
    assert_eq!(args.base, InputBase::Text);
}

#[test]
fn base_env_sets_default_base() {
    let mut guard = EnvGuard::new();
    guard.set(BASE_ENV, "hex");
    let args = parse_args(["shastep", "616263"]).unwrap();
    assert_eq!(args.base, InputBase::Hex, "SHASTEP_BASE should set the default base");
}

#[test]
fn base_flag_overrides_environment() {
    let mut guard = EnvGuard::new();
    guard.set(BASE_ENV, "hex");
    let args = parse_args(["shastep", "--base", "binary", "101"]).unwrap();
    assert_eq!(args.base, InputBase::Binary);
}

#[test]
fn blank_base_env_is_ignored() {
    let mut guard = EnvGuard::new();
    guard.set(BASE_ENV, "   ");
    let args = parse_args(["shastep"]).unwrap();
    assert_eq!(args.base, InputBase::Text);
}

#[test]
fn invalid_base_env_is_rejected() {
    let mut guard = EnvGuard::new();
    guard.set(BASE_ENV, "octal");
    let err = parse_args(["shastep"]).unwrap_err();
    assert!(err.to_string().contains("SHASTEP_BASE"), "{err}");
}

#[test]
fn invalid_base_env_is_harmless_when_overridden() {
    let mut guard = EnvGuard::new();
    guard.set(BASE_ENV, "octal");
    assert!(parse_args(["shastep", "-b", "text"]).is_ok());
}

// ============================================================================
// SHASTEP_INTERVAL_MS Environment Variable
// ============================================================================

#[test]
fn interval_defaults_to_zero() {
    let _guard = EnvGuard::new();
    let args = parse_args(["shastep", "--play"]).unwrap();
    assert_eq!(args.interval_ms, 0);
}

#[test]
fn interval_env_sets_default_delay() {
    let mut guard = EnvGuard::new();
    guard.set(INTERVAL_ENV, "250");
    let args = parse_args(["shastep", "--play"]).unwrap();
    assert_eq!(args.interval_ms, 250);
}

#[test]
fn interval_flag_overrides_environment() {
    let mut guard = EnvGuard::new();
    guard.set(INTERVAL_ENV, "250");
    let args = parse_args(["shastep", "--play", "--interval", "5"]).unwrap();
    assert_eq!(args.interval_ms, 5);
}

#[test]
fn invalid_interval_env_is_rejected() {
    let mut guard = EnvGuard::new();
    guard.set(INTERVAL_ENV, "soon");
    let err = parse_args(["shastep", "--play"]).unwrap_err();
    assert!(err.to_string().contains("SHASTEP_INTERVAL_MS"), "{err}");
}
