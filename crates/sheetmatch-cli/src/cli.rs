//! CLI argument definitions for sheetmatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sheetmatch_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "sheetmatch",
    version,
    about = "Match rows between two tables, VLOOKUP style",
    long_about = "Match rows between two tables, VLOOKUP style.\n\n\
                  Every master row is kept in order; columns from the first lookup row\n\
                  with the same key are appended, or #N/A when no row matches.\n\
                  Reads CSV, TSV and JSON files or folders of them."
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

    /// Allow cell values (keys) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append lookup columns to every master row.
    Join(JoinArgs),

    /// List the sheets, row counts and headers of a table source.
    Inspect(InspectArgs),

    /// Suggest a pair of key columns for two tables.
    Suggest(SuggestArgs),
}

#[derive(Parser)]
pub struct JoinArgs {
    /// Master table: file or folder (may come from --config instead).
    #[arg(value_name = "MASTER")]
    pub master: Option<PathBuf>,

    /// Lookup table: file or folder (may come from --config instead).
    #[arg(value_name = "LOOKUP")]
    pub lookup: Option<PathBuf>,

    /// Sheet of the master source (default: first sheet).
    #[arg(long = "master-sheet", value_name = "NAME")]
    pub master_sheet: Option<String>,

    /// Sheet of the lookup source.
    ///
    /// Defaults to the first sheet, or to the first sheet other than the
    /// master sheet when both tables come from the same source.
    #[arg(long = "lookup-sheet", value_name = "NAME")]
    pub lookup_sheet: Option<String>,

    /// Key column in the master table.
    #[arg(long = "master-key", value_name = "COL")]
    pub master_key: Option<String>,

    /// Key column in the lookup table.
    #[arg(long = "lookup-key", value_name = "COL")]
    pub lookup_key: Option<String>,

    /// Lookup column to append (repeatable or comma separated).
    #[arg(long = "append", value_name = "COL", value_delimiter = ',')]
    pub append: Vec<String>,

    /// Compare keys exactly instead of trimming, lower-casing and
    /// canonicalizing numbers.
    #[arg(long = "exact")]
    pub exact: bool,

    /// Read numeric and true/false literals in CSV/TSV files as typed values.
    #[arg(long = "infer-types")]
    pub infer_types: bool,

    /// TOML job file; command-line flags override its settings.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Result file (default: matched_result_<date>.<ext> in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Result format (default: from the output extension, else csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Number of result rows shown in the preview.
    #[arg(long = "preview", value_name = "N", default_value_t = 100)]
    pub preview: usize,

    /// Run the match and show the summary without writing a file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Fill missing key columns from header-name suggestions.
    #[arg(long = "suggest")]
    pub suggest: bool,

    /// Exit with status 1 when any master row has no match.
    #[arg(long = "fail-on-unmatched")]
    pub fail_on_unmatched: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// File or folder to inspect.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Read numeric and true/false literals as typed values.
    #[arg(long = "infer-types")]
    pub infer_types: bool,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Master table: file or folder.
    #[arg(value_name = "MASTER")]
    pub master: PathBuf,

    /// Lookup table: file or folder.
    #[arg(value_name = "LOOKUP")]
    pub lookup: PathBuf,

    /// Sheet of the master source (default: first sheet).
    #[arg(long = "master-sheet", value_name = "NAME")]
    pub master_sheet: Option<String>,

    /// Sheet of the lookup source.
    #[arg(long = "lookup-sheet", value_name = "NAME")]
    pub lookup_sheet: Option<String>,

    /// Minimum pair score for a suggestion.
    #[arg(long = "min-score", value_name = "SCORE", default_value_t = sheetmatch_suggest::DEFAULT_MIN_SCORE)]
    pub min_score: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Tsv,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Csv => Self::Csv,
            OutputFormatArg::Tsv => Self::Tsv,
            OutputFormatArg::Json => Self::Json,
        }
    }
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
