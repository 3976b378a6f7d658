//! The `generate` command

use crate::config;
use crate::prompt::{DefaultPrompter, TerminalPrompter};
use anyhow::{Context, Result};
use clap::Args;
use dtogen_core::{
    Config, DiscoveryMode, ExtractionMode, Generation, NamingStyle, NullabilityPolicy, Prompter,
};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Dart source file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the result here (default: stdout)
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file
    #[arg(long, requires = "input")]
    pub in_place: bool,

    /// Suffix for generated class names (skips the prompt)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Naming style for map keys (skips the prompt)
    #[arg(long)]
    pub style: Option<NamingStyle>,

    /// Generate for every class in the file instead of the first
    #[arg(long)]
    pub multi: bool,

    /// Accept any `Type name;` line as a field and ignore comment directives
    #[arg(long)]
    pub permissive: bool,

    /// Which signal decides nullability (constructor, type-marker)
    #[arg(long, value_parser = parse_nullability)]
    pub nullability: Option<NullabilityPolicy>,

    /// Do not generate copyWith
    #[arg(long)]
    pub no_copy_with: bool,

    /// Do not generate equality members
    #[arg(long)]
    pub no_equality: bool,

    /// Path to dtogen.toml (default: ./dtogen.toml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the edits as JSON instead of applying them
    #[arg(long)]
    pub edits_json: bool,
}

impl GenerateArgs {
    /// Layer the flags over the file config.
    fn apply_to(&self, config: &mut Config) {
        let section = &mut config.generation;

        if let Some(suffix) = &self.suffix {
            section.suffix = Some(suffix.clone());
        }
        if let Some(style) = self.style {
            section.naming_style = Some(style);
        }
        if self.multi {
            section.discovery = DiscoveryMode::Multi;
        }
        if self.permissive {
            section.extraction = ExtractionMode::Permissive;
        }
        if let Some(nullability) = self.nullability {
            section.nullability = nullability;
        }
        if self.no_copy_with {
            section.copy_with = false;
        }
        if self.no_equality {
            section.equality = false;
        }
    }
}

fn parse_nullability(s: &str) -> Result<NullabilityPolicy, String> {
    match s {
        "constructor" => Ok(NullabilityPolicy::Constructor),
        "type-marker" => Ok(NullabilityPolicy::TypeMarker),
        other => Err(format!(
            "unknown nullability policy '{other}' (expected constructor or type-marker)"
        )),
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut config = config::load(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate().context("Invalid generation options")?;

    let text = read_input(args.input.as_ref())?;
    // Blank input has nothing to generate from.
    let target = (!text.trim().is_empty()).then_some(text.as_str());

    // Prompts need stdin, so they are only offered when the source comes from a file.
    let interactive = args.input.is_some() && std::io::stdin().is_terminal();
    let generation = if interactive {
        let stdin = std::io::stdin();
        let mut prompter = TerminalPrompter::new(stdin.lock(), std::io::stderr());
        generate_with(target, &mut prompter, &config)?
    } else {
        generate_with(target, &mut DefaultPrompter, &config)?
    };

    for diagnostic in &generation.diagnostics {
        eprintln!("Skipped {}: {}", diagnostic.class, diagnostic.error);
    }

    if args.edits_json {
        let json = serde_json::to_string_pretty(&generation.all_edits())
            .context("Failed to serialize edits")?;
        println!("{json}");
        return Ok(());
    }

    let result = generation.apply(&text).context("Failed to apply edits")?;
    let destination = if args.in_place {
        args.input.as_ref()
    } else {
        args.output.as_ref()
    };

    match destination {
        Some(path) => {
            std::fs::write(path, &result)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                classes = generation.units.len(),
                "wrote transfer classes"
            );
        }
        None => print!("{result}"),
    }

    Ok(())
}

fn generate_with(
    target: Option<&str>,
    prompter: &mut dyn Prompter,
    config: &Config,
) -> Result<Generation> {
    let generation = dtogen_core::run(target, prompter, config)?;
    if generation.units.is_empty() {
        warn!("no transfer classes generated");
    }
    Ok(generation)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
