//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueHint};

/// Control client for headless world hosts
#[derive(Parser, Debug)]
#[command(name = "worldctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Extra config file (layered over the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shows a specific running world
    #[command(name = "show-world")]
    ShowWorld(ShowWorldArgs),

    /// Lists all running worlds
    #[command(name = "list-worlds")]
    ListWorlds(ListWorldsArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Host connection flags shared by world commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Host API port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host address
    #[arg(short, long, value_hint = ValueHint::Url)]
    pub server: Option<String>,

    /// Print the full JSON description
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "name"])))]
pub struct ShowWorldArgs {
    /// Name of the world (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// ID of the world
    #[arg(short, long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct ListWorldsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
