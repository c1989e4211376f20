//! DeployScan - deployment listing parser
//!
//! A CLI tool that reads the captured console output of a functions
//! listing command, extracts one record per deployed function, and
//! writes plain lists plus a summary by region, trigger and runtime.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any error (unreadable input, unwritable output, bad config or arguments)

mod analysis;
mod cli;
mod config;
mod models;
mod parser;
mod report;
mod source;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use models::{ParseOutcome, SummaryDocument};
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("DeployScan v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .deployscan.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout is reserved for the summary.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration, apply CLI overrides and run the pipeline.
fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args, Path::new("."))?;
    config.merge_with_args(args);
    config.validate()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_pipeline(&config, &mut out)?;

    Ok(())
}

/// Load configuration from `--config`, from `.deployscan.toml` in `dir`, or use defaults.
///
/// A config file that exists but cannot be parsed is an error.
fn load_config(args: &Args, dir: &Path) -> Result<Config> {
    // An explicit path must load
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_from_dir(dir)? {
        Some(config) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load, sanitize and parse the input, then write every output.
///
/// The summary goes to `out`. Returns the sorted parse outcome.
fn run_pipeline<W: Write>(config: &Config, out: &mut W) -> Result<ParseOutcome> {
    let paths = &config.paths;

    let raw = source::load_report(&paths.input)?;
    let text = source::strip_ansi(&raw);

    let mut outcome = parser::parse_table(&text);
    outcome.sort_by_name();
    info!(
        "Parsed {} functions from {}",
        outcome.records.len(),
        paths.input.display()
    );

    report::write_output(
        &paths.function_list,
        &report::render_function_list(&outcome.records),
    )?;
    info!("Function list written to {}", paths.function_list.display());

    let summary = analysis::summarize(&outcome.records);
    out.write_all(report::render_summary(&summary).as_bytes())
        .context("Failed to print summary")?;
    if config.report.show_skipped {
        out.write_all(report::render_skipped(&outcome.skipped).as_bytes())
            .context("Failed to print skipped lines")?;
    }

    report::write_output(&paths.name_list, &report::render_name_list(&outcome.records))?;
    info!("Name list written to {}", paths.name_list.display());

    if let Some(ref json_path) = paths.summary_json {
        let document = SummaryDocument {
            source: paths.input.display().to_string(),
            generated_at: Utc::now(),
            summary,
            skipped: outcome.skipped,
        };
        report::write_output(json_path, &report::generate_json_summary(&document)?)?;
        info!("JSON summary written to {}", json_path.display());
    }

    Ok(outcome)
}
