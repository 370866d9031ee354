//! qbean CLI - Query bean generator
//!
//! Commands:
//! - `qbean generate` - Generate query beans from a qbean.toml model manifest
//! - `qbean check` - Validate a qbean.toml manifest

use clap::{Parser, Subcommand};

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "qbean")]
#[command(author, version, about = "Query bean generator for Ebean entity models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate query beans
    Generate {
        /// Path to qbean.toml manifest (default: ./qbean.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Target language (java, kotlin); overrides the manifest
        #[arg(short, long)]
        lang: Option<String>,

        /// Output directory; overrides the manifest
        #[arg(short, long)]
        output: Option<String>,

        /// Only generate the named entity (repeatable)
        #[arg(long = "entity", value_name = "NAME")]
        entities: Vec<String>,

        /// Exit with an error when any entity or artifact fails
        #[arg(long)]
        strict: bool,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a qbean.toml manifest
    Check {
        /// Path to qbean.toml (default: ./qbean.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            manifest,
            lang,
            output,
            entities,
            strict,
            verbose,
        } => {
            generate::run(generate::GenerateOptions {
                manifest,
                lang,
                output,
                entities,
                strict,
                verbose,
            })?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
