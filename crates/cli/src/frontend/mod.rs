use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::thread;
use std::time::Duration;

use logging::{DiagnosticSink, VerbosityConfig};
use stepper::{StepSnapshot, Stepper};
use tracing_subscriber::EnvFilter;

mod arguments;
mod command_builder;
mod error;
mod help;
mod render;


pub use arguments::{BASE_ENV, INTERVAL_ENV, ParsedArgs, StartPosition, parse_args};

use crate::out_format::OutputFormat;
use command_builder::PROGRAM_NAME;
use error::CliError;
use help::{render_help, render_version};
use render::{frame_line, render_snapshot};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Environment variable holding extra `tracing` filter directives.
pub const LOG_ENV: &str = "SHASTEP_LOG";

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code: `0` on success and `1` for every failure.
/// Diagnostics enabled through `-v`, `--info` or `--debug` are written to
/// `stderr` as `shastep: [flag] message` lines; failures are reported as a
/// single `shastep error: ...` line.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut diagnostics = DiagnosticSink::new(stderr, PROGRAM_NAME);
    let outcome = parse_args(arguments)
        .map_err(CliError::from)
        .and_then(|parsed| execute(parsed, stdout, &mut diagnostics));

    match outcome {
        Ok(()) => 0,
        Err(error) => {
            // Whatever was recorded before the failure is still worth showing.
            let _ = diagnostics.flush_events();
            let _ = writeln!(diagnostics.get_mut(), "{PROGRAM_NAME} error: {error}");
            1
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn execute<Out, Err>(
    parsed: ParsedArgs,
    stdout: &mut Out,
    diagnostics: &mut DiagnosticSink<Err>,
) -> Result<(), CliError>
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        stdout.write_all(render_help().as_bytes())?;
        return Ok(());
    }
    if parsed.show_version {
        stdout.write_all(render_version().as_bytes())?;
        return Ok(());
    }

    install_verbosity(&parsed)?;

    let message = encoding::decode(&parsed.message, parsed.base)?;

    if let Some(target) = parsed.convert {
        let converted = encoding::encode(&message, target)?;
        writeln!(stdout, "{converted}")?;
        diagnostics.flush_events()?;
        return Ok(());
    }

    let mut stepper = Stepper::new(&message)?;

    if parsed.last_clock {
        writeln!(stdout, "{}", stepper.last_clock())?;
        diagnostics.flush_events()?;
        return Ok(());
    }

    position(&mut stepper, parsed.position)?;
    diagnostics.flush_events()?;

    if parsed.play {
        play(&stepper, parsed.format, parsed.interval_ms, stdout, diagnostics)
    } else {
        let snapshot = stepper.snapshot()?;
        diagnostics.flush_events()?;
        match parsed.format {
            OutputFormat::Text => stdout.write_all(render_snapshot(&snapshot).as_bytes())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *stdout, &snapshot)?;
                writeln!(stdout)?;
            }
        }
        stdout.flush()?;
        Ok(())
    }
}

/// Builds the verbosity configuration and installs it for this thread.
fn install_verbosity(parsed: &ParsedArgs) -> Result<(), CliError> {
    let mut config = VerbosityConfig::from_verbose_level(parsed.verbose);
    for list in &parsed.info {
        config.apply_info_list(list).map_err(CliError::Verbosity)?;
    }
    for list in &parsed.debug {
        config.apply_debug_list(list).map_err(CliError::Verbosity)?;
    }

    // The global subscriber can only be installed once per process; later
    // calls still refresh the per-thread configuration.
    let _installed = match env_log_filter()? {
        Some(filter) => logging::init_tracing_with_filter(config, filter),
        None => logging::init_tracing(config),
    };
    Ok(())
}

/// Parses the directives in [`LOG_ENV`], ignoring an unset or blank value.
fn env_log_filter() -> Result<Option<EnvFilter>, CliError> {
    let Some(raw) = env::var_os(LOG_ENV) else {
        return Ok(None);
    };
    let Some(directives) = raw.to_str() else {
        return Err(CliError::LogFilter(format!("{LOG_ENV} must be valid UTF-8")));
    };
    if directives.trim().is_empty() {
        return Ok(None);
    }
    EnvFilter::try_new(directives).map(Some).map_err(|error| {
        CliError::LogFilter(format!("invalid {LOG_ENV} value '{directives}': {error}"))
    })
}

fn position(stepper: &mut Stepper, start: StartPosition) -> Result<(), CliError> {
    match start {
        StartPosition::Start => stepper.reset(),
        StartPosition::Clock(clock) => {
            stepper.jump(clock);
        }
        StartPosition::End => {
            stepper.run_to_completion();
        }
        StartPosition::Phase { block, phase } => {
            stepper.jump_to_phase(block, phase)?;
        }
    }
    Ok(())
}

fn play<Out, Err>(
    stepper: &Stepper,
    format: OutputFormat,
    interval_ms: u64,
    stdout: &mut Out,
    diagnostics: &mut DiagnosticSink<Err>,
) -> Result<(), CliError>
where
    Out: Write,
    Err: Write,
{
    let interval = Duration::from_millis(interval_ms);
    let mut frames = stepper.frames().peekable();

    while let Some(frame) = frames.next() {
        let snapshot = frame?;
        write_frame(&snapshot, format, stdout)?;
        logging::trace_progress!(
            clock = snapshot.clock,
            last = snapshot.last_clock,
            "played frame"
        );
        diagnostics.flush_events()?;

        if frames.peek().is_some() && !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    Ok(())
}

fn write_frame<Out: Write>(
    snapshot: &StepSnapshot,
    format: OutputFormat,
    stdout: &mut Out,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(stdout, "{}", frame_line(snapshot))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *stdout, snapshot)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;
    Ok(())
}
