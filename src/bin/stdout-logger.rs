#![deny(unsafe_code)]

//! Writes one sample line per severity to standard output.
//!
//! The threshold comes from `--threshold` when given, otherwise from the
//! `LINELOG_THRESHOLD_LEVEL` environment variable, otherwise `debug`.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use linelog::{
    LogError, Logger, LoggerConfig, Severity, THRESHOLD_ENV, critical_log, debug_log, error_log,
    info_log, normal_log, threshold_from_str, verbose_log,
};
use linelog_sink::Sink;

fn command() -> Command {
    Command::new("stdout-logger")
        .about("Writes sample log lines at every severity to standard output")
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .value_name("LEVEL")
                .action(ArgAction::Set)
                .value_parser(|value: &str| {
                    threshold_from_str(value).ok_or_else(|| format!("unknown level `{value}`"))
                })
                .help(format!(
                    "Least critical level to print (name or number); overrides {THRESHOLD_ENV}"
                )),
        )
}

fn emit_samples<S: Sink>(logger: &mut Logger<S>) {
    let threshold = logger.threshold();
    info_log!(
        logger,
        "The threshold log level has been set to ",
        threshold.as_raw(),
        "."
    );
    info_log!(
        logger,
        "To override the threshold level,",
        " set ",
        THRESHOLD_ENV,
        " or pass --threshold"
    );
    verbose_log!(logger, "This is an example verbose log.");
    error_log!(logger, "This is an example error log.");
    critical_log!(logger, "This is an example critical log.");
    debug_log!(logger, "This is an example debug log.");
    normal_log!(logger, "This is an example normal log.");
}

#[cfg(unix)]
fn open_logger(config: &LoggerConfig) -> Result<Logger<linelog_sink::DescriptorSink>, LogError> {
    let sink = linelog_sink::DescriptorSink::stdout()?;
    Logger::from_config(sink, config)
}

#[cfg(not(unix))]
fn open_logger(
    config: &LoggerConfig,
) -> Result<Logger<linelog_sink::WriterSink<io::Stdout>>, LogError> {
    Logger::from_config(linelog_sink::WriterSink::new(io::stdout()), config)
}

fn run(config: &LoggerConfig) -> Result<(), LogError> {
    let mut logger = open_logger(config)?;
    emit_samples(&mut logger);
    logger.release()
}

fn run_with<I, T, Err>(args: I, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    Err: Write,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            // help and version requests are not failures
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let mut config = LoggerConfig::from_env();
    if let Some(threshold) = matches.get_one::<Severity>("threshold") {
        config.threshold = *threshold;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "stdout-logger: {error}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let mut stderr = io::stderr().lock();
    run_with(std::env::args_os(), &mut stderr)
}
