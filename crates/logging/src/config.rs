//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a `-v` count.
    ///
    /// Each level adds to the one below it: `-v` reports input decoding and
    /// the digest, `-vv` adds playback progress and padding, `-vvv` adds
    /// clock resolution and schedule expansion, and `-vvvv` or more adds the
    /// compression rounds.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.info.input = 1;
            config.info.digest = 1;
        }
        if level >= 2 {
            config.info.progress = 1;
            config.debug.padding = 1;
        }
        if level >= 3 {
            config.debug.clock = 1;
            config.debug.schedule = 1;
        }
        if level >= 4 {
            config.debug.compress = 1;
            config.info.set_all(2);
        }

        config
    }

    /// Apply a single info flag token (e.g., "digest2", "input").
    ///
    /// `all` sets every info flag; `none` is shorthand for `all0`.
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        let flag = match name {
            "all" => {
                self.info.set_all(level);
                return Ok(());
            }
            "none" => {
                self.info.set_all(0);
                return Ok(());
            }
            "input" => InfoFlag::Input,
            "digest" => InfoFlag::Digest,
            "progress" => InfoFlag::Progress,
            _ => return Err(format!("unknown info flag: {name}")),
        };

        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "compress", "clock2").
    ///
    /// `all` sets every debug flag; `none` is shorthand for `all0`.
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        let flag = match name {
            "all" => {
                self.debug.set_all(level);
                return Ok(());
            }
            "none" => {
                self.debug.set_all(0);
                return Ok(());
            }
            "padding" | "pad" => DebugFlag::Padding,
            "schedule" => DebugFlag::Schedule,
            "compress" | "compression" => DebugFlag::Compress,
            "clock" => DebugFlag::Clock,
            _ => return Err(format!("unknown debug flag: {name}")),
        };

        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma-separated list of info tokens.
    pub fn apply_info_list(&mut self, list: &str) -> Result<(), String> {
        split_tokens(list).try_for_each(|token| self.apply_info_flag(token))
    }

    /// Apply a comma-separated list of debug tokens.
    pub fn apply_debug_list(&mut self, list: &str) -> Result<(), String> {
        split_tokens(list).try_for_each(|token| self.apply_debug_flag(token))
    }
}

fn split_tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Parse a flag token like "digest2" into ("digest", 2) or "clock" into ("clock", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    // Find where the digits start
    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level_str = &token[pos..];
            let level = level_str
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => {
            // No digits, default to level 1
            Ok((token, 1))
        }
    }
}
