mod commands;
mod logging;
mod output;
mod progress;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::*;
use commands::{Cli, Commands, OutputFormat};
use dir_report_core::{AppConfig, ReportEngine, ScanReporter, SilentReporter, View};
use dotenv::dotenv;
use progress::CliReporter;
use tracing::{debug, error};

fn main() -> ExitCode {
    dotenv().ok();

    // Dropped when main returns, flushing the log file writer.
    let _guard = logging::init_logger();

    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    debug!("config.listing_roots: {:?}", config.listing_roots);
    debug!("config.tree_roots: {:?}", config.tree_roots);
    debug!("config.ignore_patterns: {:?}", config.ignore_patterns);

    match args.command {
        Some(Commands::Report(format)) => print_views(config, &View::ALL, format.format, args.quiet),
        Some(Commands::View { view, format }) => {
            print_views(config, &[view], format.format, args.quiet)
        }
        Some(Commands::PrintConfig) => {
            let rendered = toml::to_string_pretty(&config).context("rendering configuration")?;
            print!("{}", rendered);
            Ok(())
        }
        None => print_views(config, &View::ALL, OutputFormat::default(), args.quiet),
    }
}

/// Configuration file values, with command-line roots taking precedence.
fn load_config(args: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = dir_report_core::config::load_configuration_from(&args.config)
        .with_context(|| format!("loading configuration from '{}'", args.config))?;

    if !args.listing_roots.is_empty() {
        config.listing_roots = args.listing_roots.clone();
    }
    if !args.tree_roots.is_empty() {
        config.tree_roots = args.tree_roots.clone();
    }
    Ok(config)
}

/// Compute and print views one at a time, so sections finished before a
/// failure stay on stdout.
fn print_views(
    config: AppConfig,
    views: &[View],
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let show_progress = !quiet && io::stderr().is_terminal();
    let reporter: Box<dyn ScanReporter> = if show_progress {
        Box::new(CliReporter::new())
    } else {
        Box::new(SilentReporter)
    };

    let mut engine = ReportEngine::new(config, reporter.as_ref())?;

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    for &view in views {
        let section = engine.section(view)?;
        output::write_section(&mut out, &section, format, color)?;
        out.flush()?;
    }

    Ok(())
}
