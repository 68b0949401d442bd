//! `modgen init`: write a default configuration file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the current configuration as TOML to the global or local file.
///
/// The written file starts from the effective configuration, so values
/// already coming from the environment are persisted.
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let target = target_path(args.local);

    if target.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            target.display(),
        ))?;
        return Ok(());
    }

    write_config(&target, &config)?;

    output.success(&format!("Configuration created at {}", target.display()))?;
    Ok(())
}

fn target_path(local: bool) -> PathBuf {
    if local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    }
}

fn write_config(path: &Path, config: &AppConfig) -> CliResult<()> {
    let text = toml::to_string_pretty(config)
        .with_cli_context(|| "Failed to serialise configuration")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    debug!(path = %path.display(), "Writing configuration");
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
