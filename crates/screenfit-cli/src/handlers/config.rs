//! Config command handler

use crate::commands::ConfigArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use screenfit::ScreenfitConfig;

/// Execute the config command
pub fn execute_config(
    cli_config: &CliConfig,
    config: &ScreenfitConfig,
    args: &ConfigArgs,
) -> CliResult<String> {
    if args.check {
        let source = cli_config
            .config_path
            .as_ref()
            .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
        return Ok(format!("Configuration OK ({source})\n"));
    }
    Ok(config.to_yaml()?)
}
