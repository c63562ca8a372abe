//! Config command - inspect and edit the configuration file.
//!
//! Every subcommand works on the file given with the global `-c/--config`
//! option, or on the per-user default file when none is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use lendoc_core::extract::FieldRegistry;
use lendoc_core::models::config::LendocConfig;

use super::load_config;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init(InitArgs),

    /// Print one value, e.g. "ocr.tesseract_cmd"
    Get {
        /// Dotted configuration key
        key: String,
    },

    /// Change one value; JSON literals are parsed, anything else is a string
    Set {
        /// Dotted configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show which configuration file is used
    Path,

    /// List the fields that will be extracted
    Fields,
}

#[derive(Args)]
struct InitArgs {
    /// Where to write the file (default: the active configuration file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let target = config_path.map(PathBuf::from).unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(config_path, &target),
        ConfigCommand::Init(init_args) => init_config(init_args, &target),
        ConfigCommand::Get { key } => get_config(config_path, &key),
        ConfigCommand::Set { key, value } => set_config(&target, &key, &value),
        ConfigCommand::Path => show_path(&target),
        ConfigCommand::Fields => show_fields(config_path),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lendoc")
        .join("config.json")
}

/// Turn a dotted key into a JSON pointer: `ocr.language` -> `/ocr/language`.
fn json_pointer(key: &str) -> String {
    key.split('.').fold(String::new(), |mut pointer, part| {
        pointer.push('/');
        pointer.push_str(part);
        pointer
    })
}

/// Config validated before it is written: it must deserialize and its
/// custom fields must compile.
fn checked_config(json: Value) -> anyhow::Result<LendocConfig> {
    let config: LendocConfig = serde_json::from_value(json)?;
    FieldRegistry::from_config(&config.extraction)?;
    Ok(config)
}

fn write_config(path: &Path, config: &LendocConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn show_config(config_path: Option<&str>, target: &Path) -> anyhow::Result<()> {
    if !target.exists() {
        eprintln!(
            "{} {} does not exist, showing defaults.",
            style("ℹ").blue(),
            target.display()
        );
    }

    let config = if target.exists() {
        load_config(config_path)?
    } else {
        LendocConfig::default()
    };
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, target: &Path) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| target.to_path_buf());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    write_config(&output_path, &LendocConfig::default())?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(config_path: Option<&str>, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_config(config_path)?)?;

    let value = json
        .pointer(&json_pointer(key))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set_config(target: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    // A missing file starts from defaults, so `set` can create it.
    let current = if target.exists() {
        LendocConfig::from_file(target)?
    } else {
        LendocConfig::default()
    };

    let new_value: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let (parent, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (json_pointer(parent), leaf),
        None => (String::new(), key),
    };

    let mut json = serde_json::to_value(&current)?;
    json.pointer_mut(&parent)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?
        .insert(leaf.to_string(), new_value.clone());

    let config = checked_config(json)?;
    write_config(target, &config)?;

    println!(
        "{} Set {} = {} in {}",
        style("✓").green(),
        key,
        serde_json::to_string(&new_value)?,
        target.display()
    );

    Ok(())
}

fn show_path(target: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", target.display());

    if target.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'lendoc config init' to create it.");
    }

    Ok(())
}

fn show_fields(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let registry = FieldRegistry::from_config(&config.extraction)?;

    for template in registry.iter() {
        println!(
            "{} ({})",
            style(template.key()).bold(),
            serde_json::to_string(template.validator())?
        );
        for pattern in template.patterns() {
            println!("  {}", pattern.as_str());
        }
    }

    Ok(())
}
