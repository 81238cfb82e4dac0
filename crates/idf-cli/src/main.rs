//! Identity federation mapping CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use idf_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use idf_cli::commands::{run_map, run_template};
use idf_cli::logging::{LogConfig, LogFormat, init_logging};
use idf_cli::summary::print_summary;
use idf_commands::CommandsError;
use idf_model::ExitStatus;

/// Process exit codes, mainframe condition-code style.
const WARNING_EXIT_CODE: i32 = 4;
const FATAL_EXIT_CODE: i32 = 8;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Map(args) => match run_map(&args) {
            Ok(result) => {
                // With commands on stdout the summary would pollute them.
                if result.output.is_some() || result.dry_run {
                    print_summary(&result);
                }
                exit_code_for(result.status)
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                if is_empty_batch(&error) {
                    FATAL_EXIT_CODE
                } else {
                    1
                }
            }
        },
        Command::Template => {
            run_template();
            0
        }
    };
    std::process::exit(exit_code);
}

fn exit_code_for(status: ExitStatus) -> i32 {
    match status {
        ExitStatus::Normal => 0,
        ExitStatus::Warning => WARNING_EXIT_CODE,
        ExitStatus::Fatal => FATAL_EXIT_CODE,
    }
}

fn is_empty_batch(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<CommandsError>(),
        Some(CommandsError::EmptyBatch)
    )
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
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
