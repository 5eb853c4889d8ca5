//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::state::Mode;

/// Wisp - Mode and color selection for ambient visual effects.
#[derive(Debug, Parser)]
#[command(name = "wisp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the effect console (default if no command specified)
    Console(ConsoleArgs),

    /// List the available effect modes
    Modes(ModesArgs),

    /// Show the startup defaults
    Defaults(DefaultsArgs),

    /// Check whether a value names a known mode
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `console` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConsoleArgs {
    /// Initial effect mode
    #[arg(short, long, env = "WISP_MODE")]
    pub mode: Option<Mode>,

    /// Initial effect color (any string, handed to the renderer verbatim)
    #[arg(short, long, env = "WISP_COLOR")]
    pub color: Option<String>,

    /// Print the current state and exit, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `modes` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ModesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `defaults` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DefaultsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Value to check against the known mode identifiers
    pub value: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
