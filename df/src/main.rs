use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

use docxfill::cli::Cli;
use docxfill::config::Config;
use docxfill::{AppError, Arguments, StdinConfirm};

fn parse_level(level: Option<&str>) -> tracing::Level {
    match level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some("INFO") | None => tracing::Level::INFO,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    }
}

type LogFilter = reload::Handle<EnvFilter, Registry>;

fn env_filter(level: tracing::Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Log to a file, stdout is for the user. The returned handle changes the level later.
fn setup_logging(level: tracing::Level) -> Result<LogFilter> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docxfill")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;
    let log_file = fs::File::create(log_dir.join("docxfill.log")).context("Failed to create log file")?;

    let (filter, handle) = reload::Layer::new(env_filter(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .init();

    info!("Logging initialized (level: {})", level);
    Ok(handle)
}

fn setup_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter(tracing::Level::WARN))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Apply the config file's level unless `--log-level` was given
fn apply_config_level(handle: Option<&LogFilter>, cli: &Cli, config: &Config) {
    let (Some(handle), None, Some(level)) = (handle, cli.log_level.as_deref(), config.log_level.as_deref()) else {
        return;
    };
    let level = parse_level(Some(level));
    match handle.reload(env_filter(level)) {
        Ok(()) => info!("Log level set from config: {}", level),
        Err(e) => warn!("Failed to apply log level from config: {}", e),
    }
}

fn report(err: &AppError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    for cause in err.causes() {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let usage = AppError::Usage {
                usage: Cli::command().render_usage().to_string(),
            };
            report(&usage);
            ExitCode::from(usage.exit_code())
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };
    let args = Arguments::from(&cli);

    let handle = match setup_logging(parse_level(cli.log_level.as_deref())) {
        Ok(handle) => Some(handle),
        Err(e) => {
            setup_stderr_logging();
            warn!("Logging to stderr: {:#}", e);
            None
        }
    };

    let code = match Config::load(cli.config.as_ref()) {
        Ok(config) => {
            apply_config_level(handle.as_ref(), &cli, &config);
            info!(template = %args.template_path.display(), data = %args.yaml_path.display(), "docxfill starting");

            match docxfill::run(&args, &config, &mut StdinConfirm) {
                Ok(()) => {
                    if !args.quiet {
                        println!(
                            "{} Document successfully generated and saved at {}",
                            "✓".green(),
                            args.output_path.display().to_string().cyan()
                        );
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, causes = ?e.causes(), "Run failed");
                    report(&e);
                    ExitCode::from(e.exit_code())
                }
            }
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e.wrap_err("Failed to load configuration"));
            ExitCode::FAILURE
        }
    };

    if !args.quiet {
        println!("Exiting program!");
    }
    code
}
