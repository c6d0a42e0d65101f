use std::io;

use encoding::EncodingError;
use stepper::StepperError;
use thiserror::Error;

/// Failures that end a front-end invocation with exit code 1.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Command-line parsing failed.
    #[error("{}", clap_summary(.0))]
    Arguments(#[from] clap::Error),
    /// An `--info` or `--debug` token was rejected.
    #[error("{0}")]
    Verbosity(String),
    /// The `tracing` filter directives from the environment did not parse.
    #[error("{0}")]
    LogFilter(String),
    /// The message could not be decoded or re-encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// The engine rejected the message or a position.
    #[error(transparent)]
    Stepper(#[from] StepperError),
    /// A snapshot could not be serialised.
    #[error("failed to serialise snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing to standard output or standard error failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// First line of a clap diagnostic without its `error: ` lead-in.
fn clap_summary(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::command_builder::clap_command;

    #[test]
    fn clap_errors_are_reduced_to_their_summary() {
        let error = clap_command()
            .try_get_matches_from(["shastep", "--bogus"])
            .expect_err("unknown option");
        let rendered = CliError::from(error).to_string();
        assert!(rendered.starts_with("unexpected argument '--bogus'"), "{rendered}");
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn library_errors_render_transparently() {
        let error = CliError::from(StepperError::BlockOutOfRange {
            block: 3,
            block_count: 1,
        });
        assert_eq!(
            error.to_string(),
            "block 3 does not exist; the padded message has 1 blocks"
        );
    }
}
