//! CLI argument definitions for the course taxonomy cascade.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "course-taxonomy",
    version,
    about = "Course taxonomy cascade - resolve consistent subject sets",
    long_about = "Resolve mutually consistent taxonomy option sets for a board.\n\n\
                  Applies the medium -> grade -> type -> subject cascade over a\n\
                  framework payload, intersecting state-level, board-level, and\n\
                  selection-level association contexts at every stage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the cascade for a board and resolve the common subject set.
    Cascade(CascadeArgs),

    /// List the taxonomy categories of a framework payload.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct CascadeArgs {
    /// Path to the framework JSON payload.
    #[arg(value_name = "FRAMEWORK")]
    pub framework: PathBuf,

    /// Path to the state-level association list (JSON array).
    #[arg(long = "state", value_name = "PATH")]
    pub state_associations: PathBuf,

    /// Path to the boards payload (JSON array of board terms).
    #[arg(long = "boards", value_name = "PATH")]
    pub boards: PathBuf,

    /// Board to resolve, by code or display name.
    #[arg(long = "board", value_name = "BOARD")]
    pub board: String,

    /// Medium code to select.
    #[arg(long = "medium", value_name = "CODE")]
    pub medium: Option<String>,

    /// Grade level code to select.
    #[arg(long = "grade", value_name = "CODE", requires = "medium")]
    pub grade: Option<String>,

    /// Course type code to select.
    #[arg(long = "course-type", value_name = "CODE", requires = "grade")]
    pub course_type: Option<String>,

    /// Subject code to forward to the content-creation flow.
    #[arg(long = "subject", value_name = "CODE", requires = "course_type")]
    pub subject: Option<String>,

    /// Directory for durable client-local storage of resolved subjects.
    /// Without it the session keeps the resolved list in memory only.
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Path to the framework JSON payload.
    #[arg(value_name = "FRAMEWORK")]
    pub framework: PathBuf,
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
