use std::ffi::OsString;

use clap::error::ErrorKind;
use encoding::InputBase;
use stepper::Phase;

use super::env::{env_base_default, env_interval_default};
use super::parsed_args::{ParsedArgs, StartPosition};
use crate::frontend::command_builder::{PROGRAM_NAME, clap_command};
use crate::out_format::OutputFormat;

/// Parses command-line arguments into a [`ParsedArgs`] structure.
///
/// Values given on the command line win over `SHASTEP_BASE` and
/// `SHASTEP_INTERVAL_MS`; a malformed environment value is reported as an
/// invalid-value error only when the command line does not override it.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");

    let base = match matches.remove_one::<InputBase>("base") {
        Some(base) => base,
        None => env_base_default()
            .map_err(invalid_value)?
            .unwrap_or_default(),
    };
    let interval_ms = match matches.remove_one::<u64>("interval") {
        Some(interval) => interval,
        None => env_interval_default()
            .map_err(invalid_value)?
            .unwrap_or(0),
    };

    let position = if let Some(clock) = matches.remove_one::<i64>("clock") {
        StartPosition::Clock(clock)
    } else if matches.get_flag("end") {
        StartPosition::End
    } else if let Some(phase) = matches.remove_one::<Phase>("phase") {
        StartPosition::Phase {
            block: matches.remove_one::<u64>("block").unwrap_or(0),
            phase,
        }
    } else {
        StartPosition::Start
    };

    let format = matches
        .remove_one::<OutputFormat>("format")
        .unwrap_or_default();
    let convert = matches.remove_one::<InputBase>("convert");
    let message = matches.remove_one::<String>("message").unwrap_or_default();
    let info = matches
        .remove_many::<String>("info")
        .map(|values| values.collect())
        .unwrap_or_default();
    let debug = matches
        .remove_many::<String>("debug")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help,
        show_version,
        message,
        base,
        position,
        play: matches.get_flag("play"),
        interval_ms,
        format,
        convert,
        last_clock: matches.get_flag("last-clock"),
        verbose: matches.get_count("verbose"),
        info,
        debug,
    })
}

fn invalid_value(message: String) -> clap::Error {
    let mut command = clap_command();
    command.error(ErrorKind::InvalidValue, message)
}
