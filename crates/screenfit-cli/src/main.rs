//! Screenfit CLI: classify device metrics into responsive breakpoints
//!
//! ## Usage
//!
//! ```bash
//! screenfit classify --width 414 --height 896 --scale 2   # Ad-hoc metrics
//! screenfit preset "iPad" --landscape                     # One preset
//! screenfit matrix --category tablet                      # Compatibility matrix
//! screenfit --config screenfit.yaml config                # Effective config
//! ```

use clap::Parser;
use screenfit_cli::{
    handlers::{execute_classify, execute_config, execute_matrix, execute_preset, execute_presets},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Renderer, Verbosity,
};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let cli_config = build_config(&cli);
    let use_color = cli_config.color.should_color();
    logging::init(cli_config.verbosity, use_color);

    let config = cli_config.load()?;
    let renderer = Renderer::new(use_color);

    let output = match &cli.command {
        Commands::Classify(args) => execute_classify(&config, args, renderer)?,
        Commands::Preset(args) => execute_preset(&config, args, renderer)?,
        Commands::Presets(args) => execute_presets(&config, args, renderer)?,
        Commands::Matrix(args) => execute_matrix(&config, args, renderer)?,
        Commands::Config(args) => execute_config(&cli_config, &config, args)?,
    };

    if !cli_config.verbosity.is_quiet() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_config_path(cli.config.clone())
}
