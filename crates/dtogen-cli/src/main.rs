//! dtogen CLI - Transfer-class generator for Dart
//!
//! Commands:
//! - `dtogen generate` - Add transfer classes to a Dart source file
//! - `dtogen convert` - Convert names with a key naming style
//! - `dtogen check` - Validate a dtogen.toml config file

use clap::{Parser, Subcommand};
use dtogen_core::NamingStyle;
use tracing_subscriber::EnvFilter;

mod config;
mod generate;
mod prompt;

#[derive(Parser)]
#[command(name = "dtogen")]
#[command(author, version, about = "Generate transfer classes for Dart data classes", long_about = None)]
struct Cli {
    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate transfer classes for the classes in a Dart file
    Generate(generate::GenerateArgs),

    /// Convert names with a naming style
    Convert {
        /// Naming style (camelCase, snake_case, PascalCase, kebab-case, original)
        style: NamingStyle,

        /// Names to convert
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Validate a dtogen.toml config file
    Check {
        /// Path to dtogen.toml (default: ./dtogen.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            generate::run(args)?;
        }
        Commands::Convert { style, names } => {
            for name in names {
                println!("{}", style.convert(&name));
            }
        }
        Commands::Check { config } => {
            config::check(config)?;
        }
    }

    Ok(())
}
