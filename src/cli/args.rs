//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// item-control - Skill requirements for crafting, equipping and consuming items.
#[derive(Debug, Parser)]
#[command(name = "item-control")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config root containing the ItemControl folder (defaults to current directory)
    #[arg(short, long, global = true, env = "ITEM_CONTROL_ROOT")]
    pub root: Option<PathBuf>,

    /// Catalog of known items and skills (defaults to <root>/ItemControl.catalog.yml)
    #[arg(short, long, global = true, env = "ITEM_CONTROL_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the requirement folder, example document and settings file
    Init(InitArgs),

    /// Load and validate every requirement document
    Check(CheckArgs),

    /// Print the snapshot a host would publish to peers
    Snapshot,

    /// Evaluate an item's requirements for an actor
    Query(QueryArgs),

    /// Watch the requirement folder and reload on change
    Watch(WatchArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Write the settings file even if one exists
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print the load report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `query` command.
#[derive(Debug, Clone, clap::Args)]
pub struct QueryArgs {
    /// Prefab name, or shared display name with --by-name
    pub key: String,

    /// Look the item up by its shared display name
    #[arg(long)]
    pub by_name: bool,

    /// Actor file with skill levels and attribute values
    #[arg(short, long)]
    pub actor: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Stop after this many seconds (runs until interrupted if unset)
    #[arg(long)]
    pub duration: Option<u64>,
}
