//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use fonema_core::{LanguageRegistry, ToneFormat};

pub mod transcribe;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe text into its IPA rendering
    Transcribe(transcribe::TranscribeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List supported tone formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Transcribe(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the selected list query
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                let registry = LanguageRegistry::builtin();
                for entry in registry.entries() {
                    println!(
                        "{:<10} {:<18} {}",
                        entry.code(),
                        entry.name(),
                        entry.family().as_str()
                    );
                }
            }
            ListCommands::Formats => {
                for format in ToneFormat::ALL {
                    println!("{}", format.as_str());
                }
            }
        }
        Ok(())
    }
}
