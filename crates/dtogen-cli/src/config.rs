//! Config file lookup and the `check` command

use anyhow::{Context, Result};
use dtogen_core::{CONFIG_FILE_NAME, Config};
use std::path::Path;
use tracing::debug;

/// Load the config at `path`, or `./dtogen.toml` when it exists, or the defaults.
pub fn load(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => read(Path::new(path)),
        None if Path::new(CONFIG_FILE_NAME).is_file() => read(Path::new(CONFIG_FILE_NAME)),
        None => {
            debug!("no {CONFIG_FILE_NAME} found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    Config::from_file(path).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Validate a config file and print what it sets.
pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| CONFIG_FILE_NAME.to_string());

    println!("Checking config: {}", path);

    let config = read(Path::new(&path))?;
    let section = &config.generation;

    match &section.suffix {
        Some(suffix) => println!("✓ Suffix: {:?}", suffix),
        None => println!("✓ Suffix: prompted (default {:?})", section.default_suffix),
    }
    match section.naming_style {
        Some(style) => println!("✓ Naming style: {}", style),
        None => println!("✓ Naming style: prompted"),
    }
    println!("✓ Discovery: {:?}", section.discovery);
    println!("✓ Extraction: {:?}", section.extraction);
    println!("✓ Nullability: {:?}", section.nullability);
    println!("\nConfig is valid!");

    Ok(())
}
