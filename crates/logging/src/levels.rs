//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Input decoding and base conversion.
    Input,
    /// Hash state folds and the final digest.
    Digest,
    /// Playback frames and clock progress.
    Progress,
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Message padding.
    Padding,
    /// Message schedule expansion.
    Schedule,
    /// Compression rounds.
    Compress,
    /// Clock position resolution.
    Clock,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 3] = [Self::Input, Self::Digest, Self::Progress];

    /// Token name accepted by `--info`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Digest => "digest",
            Self::Progress => "progress",
        }
    }
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Padding, Self::Schedule, Self::Compress, Self::Clock];

    /// Token name accepted by `--debug`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Schedule => "schedule",
            Self::Compress => "compress",
            Self::Clock => "clock",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Input decoding level.
    pub input: u8,
    /// Digest reporting level.
    pub digest: u8,
    /// Progress reporting level.
    pub progress: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Input => self.input,
            InfoFlag::Digest => self.digest,
            InfoFlag::Progress => self.progress,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Input => self.input = level,
            InfoFlag::Digest => self.digest = level,
            InfoFlag::Progress => self.progress = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.input = level;
        self.digest = level;
        self.progress = level;
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Padding level.
    pub padding: u8,
    /// Schedule expansion level.
    pub schedule: u8,
    /// Compression rounds level.
    pub compress: u8,
    /// Clock resolution level.
    pub clock: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Padding => self.padding,
            DebugFlag::Schedule => self.schedule,
            DebugFlag::Compress => self.compress,
            DebugFlag::Clock => self.clock,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Padding => self.padding = level,
            DebugFlag::Schedule => self.schedule = level,
            DebugFlag::Compress => self.compress = level,
            DebugFlag::Clock => self.clock = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.padding = level;
        self.schedule = level;
        self.compress = level;
        self.clock = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod info_levels_tests {
        use super::*;

        #[test]
        fn default_info_levels_are_zero() {
            let levels = InfoLevels::default();
            for flag in InfoFlag::ALL {
                assert_eq!(levels.get(flag), 0, "{flag:?}");
            }
        }

        #[test]
        fn set_then_get_each_flag() {
            let mut levels = InfoLevels::default();
            for (index, flag) in InfoFlag::ALL.into_iter().enumerate() {
                levels.set(flag, index as u8 + 1);
            }
            assert_eq!(levels.input, 1);
            assert_eq!(levels.digest, 2);
            assert_eq!(levels.progress, 3);
        }

        #[test]
        fn set_all_overrides_every_flag() {
            let mut levels = InfoLevels::default();
            levels.set_all(4);
            assert!(InfoFlag::ALL.iter().all(|&flag| levels.get(flag) == 4));
        }
    }

    mod debug_levels_tests {
        use super::*;

        #[test]
        fn default_debug_levels_are_zero() {
            let levels = DebugLevels::default();
            for flag in DebugFlag::ALL {
                assert_eq!(levels.get(flag), 0, "{flag:?}");
            }
        }

        #[test]
        fn set_then_get_each_flag() {
            let mut levels = DebugLevels::default();
            levels.set(DebugFlag::Compress, 2);
            levels.set(DebugFlag::Clock, 1);
            assert_eq!(levels.compress, 2);
            assert_eq!(levels.clock, 1);
            assert_eq!(levels.padding, 0);
        }

        #[test]
        fn set_all_overrides_every_flag() {
            let mut levels = DebugLevels::default();
            levels.set_all(2);
            assert!(DebugFlag::ALL.iter().all(|&flag| levels.get(flag) == 2));
        }
    }

    #[test]
    fn flag_names_are_lowercase_tokens() {
        assert_eq!(InfoFlag::Progress.name(), "progress");
        assert_eq!(DebugFlag::Compress.name(), "compress");
        for flag in DebugFlag::ALL {
            assert_eq!(flag.name(), flag.name().to_ascii_lowercase());
        }
    }
}
