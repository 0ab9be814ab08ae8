//! district-engine CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use district_engine::commands::{
    run_catalog, run_directory, run_query, run_roster, run_show, CommandContext,
};
use district_engine::{Cli, Commands, EngineConfig, EngineError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    if let Err(e) = init_tracing(&config, cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(&cli, config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn load_config(cli: &Cli) -> district_engine::Result<EngineConfig> {
    match &cli.config {
        Some(path) if !path.exists() => Err(EngineError::FileNotFound {
            path: path.display().to_string(),
        }),
        Some(path) => EngineConfig::load_from(path),
        None => EngineConfig::load(),
    }
}

/// Log to stderr so stdout stays clean for JSON/TOON output
fn init_tracing(config: &EngineConfig, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("district_engine={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}

fn run(cli: &Cli, config: EngineConfig) -> district_engine::Result<String> {
    let ctx = CommandContext::new(cli.format, config)
        .with_catalog_override(cli.catalog.clone());

    match &cli.command {
        Commands::Catalog(args) => run_catalog(args, &ctx),
        Commands::Directory(args) => run_directory(args, &ctx),
        Commands::Query(args) => run_query(args, &ctx),
        Commands::Roster(args) => run_roster(args, &ctx),
        Commands::Show(args) => run_show(args, &ctx),
    }
}
