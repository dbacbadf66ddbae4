use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use atomlog::{
    LogLevel, ThresholdConfig, log_critical, log_custom, log_debug, log_error, log_if, log_info,
    log_warn,
};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("atomlog-demo")
        .about("Replays the atomlog demo sequence through the process-wide logger.")
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Minimum level to emit: debug, info, warn or error.")
                .value_parser(|value: &str| value.parse::<LogLevel>())
                .conflicts_with_all(["verbose", "quiet"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Lower the threshold one step per occurrence.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Raise the threshold one step per occurrence.")
                .action(ArgAction::Count),
        )
}

/// Resolves the threshold selected on the command line.
fn threshold_from(matches: &ArgMatches) -> ThresholdConfig {
    match matches.get_one::<LogLevel>("level") {
        Some(level) => ThresholdConfig::new(*level),
        None => ThresholdConfig::from_verbosity(
            matches.get_count("verbose"),
            matches.get_count("quiet"),
        ),
    }
}

/// Parses `args`, applies the threshold to the global logger and replays the
/// demo sequence.
///
/// Help and usage errors are rendered into `stdout`/`stderr` and mapped to
/// clap's exit status. Log lines always go to the process's standard streams.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let rendered = error.render().to_string();
            let target: &mut dyn Write = if error.use_stderr() { stderr } else { stdout };
            let _ = target.write_all(rendered.as_bytes());
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1));
        }
    };

    threshold_from(&matches).apply(atomlog::Logger::instance());
    replay();
    ExitCode::SUCCESS
}

fn replay() {
    log_debug!("This debug message won't be shown");
    log_info!("This info message won't be shown");

    log_warn!("Disk space below 20%");

    log_error!("Failed to open config file");

    log_custom!(LogLevel::Warn, "Custom warning: Network latency high");

    log_critical!("System overheating!");

    let retry = 3;
    log_if!(
        retry > 2,
        LogLevel::Error,
        "Exceeded max retry attempts: {}",
        retry
    );
}
