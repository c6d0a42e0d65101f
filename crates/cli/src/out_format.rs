//! `--format` parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How snapshots are written to standard output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// `serde_json` rendering of the snapshot; one object per line during playback.
    Json,
}

/// Error returned for an unrecognised `--format` value.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unsupported output format '{0}'; expected text or json")]
pub struct OutputFormatParseError(String);

impl OutputFormat {
    /// Canonical lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(OutputFormatParseError(s.to_owned())),
        }
    }
}
