//! `rowparse` command-line entry point.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use rowparse_cli::commands::{CheckOptions, Input, run_check, run_rows};
use rowparse_cli::logging::{LogConfig, LogFormat, init_logging};
use rowparse_cli::render::{OutputFormat, print_check, print_rows};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{CheckArgs, Cli, Command, LogFormatArg, LogLevelArg, RowsArgs};

/// Every row passed, or rows were printed.
const EXIT_OK: i32 = 0;
/// At least one row was rejected.
const EXIT_INVALID: i32 = 1;
/// The input could not be read, or the arguments were unusable.
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }
    let output = OutputFormat::from(cli.output);
    let exit_code = match cli.command {
        Command::Rows(args) => rows(&args, output),
        Command::Check(args) => check(&args, output),
    };
    std::process::exit(exit_code);
}

fn rows(args: &RowsArgs, output: OutputFormat) -> i32 {
    let result = run_rows(&Input::from_arg(&args.file))
        .and_then(|rows| print_rows(&rows, output).map_err(Into::into));
    match result {
        Ok(()) => EXIT_OK,
        Err(err) => report_error(&err),
    }
}

fn check(args: &CheckArgs, output: OutputFormat) -> i32 {
    let options = CheckOptions {
        columns: args.columns.clone(),
        allow_extra: args.allow_extra,
        skip_header: args.skip_header,
    };
    let report = match run_check(&Input::from_arg(&args.file), &options) {
        Ok(report) => report,
        Err(err) => return report_error(&err),
    };
    if let Err(err) = print_check(&report, output) {
        return report_error(&anyhow::Error::from(err));
    }
    if report.is_valid() {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn report_error(err: &anyhow::Error) -> i32 {
    eprintln!("error: {err:#}");
    EXIT_ERROR
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config = config
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArg;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from([
            "rowparse",
            "--output",
            "json",
            "check",
            "people.csv",
            "--columns",
            "name:text,age:number",
            "--skip-header",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputArg::Json);
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.columns, "name:text,age:number");
        assert!(args.skip_header);
        assert!(!args.allow_extra);
    }

    #[test]
    fn test_check_requires_columns() {
        assert!(Cli::try_parse_from(["rowparse", "check", "people.csv"]).is_err());
    }

    #[test]
    fn test_log_flags() {
        let cli = Cli::try_parse_from([
            "rowparse",
            "rows",
            "-",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-data",
        ])
        .unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.log_data);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_log_file_disables_ansi_on_auto() {
        let cli =
            Cli::try_parse_from(["rowparse", "rows", "-", "--log-file", "rowparse.log"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.log_file, Some(std::path::PathBuf::from("rowparse.log")));
        assert!(!config.with_ansi);
    }

    #[test]
    fn test_default_log_level_is_warn() {
        let cli = Cli::try_parse_from(["rowparse", "rows", "people.csv"]).unwrap();
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }
}
