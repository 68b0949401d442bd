//! `modgen config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys accepted by `modgen config get`.
const KEYS: [&str; 4] = [
    "paths.app_dir",
    "templates.local_path",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config)
                .with_cli_context(|| "Failed to serialise configuration")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Value of `key` as printed by `config get`; unset paths print empty.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let display = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "paths.app_dir" => Ok(display(&config.paths.app_dir)),
        "templates.local_path" => Ok(display(&config.templates.local_path)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
