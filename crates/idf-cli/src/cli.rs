//! CLI argument definitions for the identity federation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "idf",
    version,
    about = "Identity Federation - map distributed identities to mainframe user IDs",
    long_about = "Generate mainframe security-system commands that map distributed\n\
                  identities (e.g. LDAP distinguished names) to mainframe user IDs.\n\n\
                  Reads an identity file (CSV with mainframeId, distributedId and\n\
                  userName columns), validates each record against the security\n\
                  system's field limits, and emits one RACMAP command per valid\n\
                  record plus a trailing refresh command."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate identity-mapping commands from an identity file.
    Map(MapArgs),

    /// Print the mapping command template and the refresh command.
    Template,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the identity file (CSV with mainframeId, distributedId,
    /// userName columns).
    #[arg(value_name = "IDENTITY_FILE")]
    pub identity_file: PathBuf,

    /// Registry (namespace) the mappings are created under.
    #[arg(long = "registry-id", value_name = "REGISTRY")]
    pub registry_id: String,

    /// Write the generated commands to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and report without writing any commands.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
