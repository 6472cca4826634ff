//! CLI argument definitions for `rowparse`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rowparse_cli::render::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rowparse",
    version,
    about = "Read comma-separated rows and validate them against a column schema",
    long_about = "Read comma-separated rows and validate them against a column schema.\n\n\
                  Each line is one row; fields are split on ',' and trimmed.\n\
                  Quoting and escaping are not interpreted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow field values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// How results are written to stdout.
    #[arg(
        long = "output",
        value_enum,
        default_value = "table",
        env = "ROWPARSE_OUTPUT",
        global = true
    )]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every row of a file, split and trimmed.
    Rows(RowsArgs),

    /// Validate every row against a column spec.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct RowsArgs {
    /// File to read, or '-' for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// File to read, or '-' for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column spec: comma-separated `name:kind`, with a trailing `?` for optional.
    ///
    /// Kinds are text, number, integer and boolean.
    /// Example: `name:text,age:number,email:text?`
    #[arg(long = "columns", short = 'c', value_name = "SPEC")]
    pub columns: String,

    /// Accept rows with more fields than columns.
    #[arg(long = "allow-extra")]
    pub allow_extra: bool,

    /// Accept a first row equal to the column names and leave it out of the output.
    #[arg(long = "skip-header")]
    pub skip_header: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
    Jsonl,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}
