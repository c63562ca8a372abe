//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod output;
pub mod process;
pub mod submit;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use lendoc_core::models::config::LendocConfig;

/// Load the configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LendocConfig> {
    if let Some(path) = config_path {
        return Ok(LendocConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(LendocConfig::from_file(&default_path)?)
    } else {
        Ok(LendocConfig::default())
    }
}

/// Read text input from a file, or from stdin when the path is `-`.
pub fn read_text_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(std::fs::read_to_string(input)?)
}
