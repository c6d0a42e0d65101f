use clap::{Arg, ArgAction, Command, value_parser};
use encoding::InputBase;
use stepper::Phase;

use crate::out_format::OutputFormat;

/// Name used in usage lines and diagnostics.
pub(crate) const PROGRAM_NAME: &str = "shastep";

/// Builds the `clap` command used for parsing.
///
/// Help and version are handled by the front end so their output stays under
/// its control; clap only records whether they were requested.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base")
                .long("base")
                .short('b')
                .value_name("BASE")
                .help("Input base of MESSAGE: text, binary or hex.")
                .value_parser(value_parser!(InputBase))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("clock")
                .long("clock")
                .short('c')
                .value_name("CLOCK")
                .help("Clock position to inspect; out-of-range values are clamped.")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .action(ArgAction::Set)
                .conflicts_with_all(["end", "phase"]),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .short('e')
                .help("Inspect the terminal clock position.")
                .action(ArgAction::SetTrue)
                .conflicts_with("phase"),
        )
        .arg(
            Arg::new("phase")
                .long("phase")
                .value_name("PHASE")
                .help("Start at the first sub-step of PHASE.")
                .value_parser(value_parser!(Phase))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("block")
                .long("block")
                .value_name("N")
                .help("Block index used with --phase (default 0).")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set)
                .requires("phase"),
        )
        .arg(
            Arg::new("play")
                .long("play")
                .help("Print every clock position from the start through the digest.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("MS")
                .help("Delay between playback frames in milliseconds.")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text or json.")
                .value_parser(value_parser!(OutputFormat))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("convert")
                .long("convert")
                .value_name("BASE")
                .help("Print MESSAGE re-encoded in BASE and exit.")
                .value_parser(value_parser!(InputBase))
                .action(ArgAction::Set)
                .conflicts_with_all(["play", "last-clock"]),
        )
        .arg(
            Arg::new("last-clock")
                .long("last-clock")
                .help("Print the terminal clock position for MESSAGE and exit.")
                .action(ArgAction::SetTrue)
                .conflicts_with("play"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Fine-grained informational output (input, digest, progress).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Fine-grained debug output (padding, schedule, compress, clock).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Message to hash; empty when omitted.")
                .action(ArgAction::Set),
        )
}
