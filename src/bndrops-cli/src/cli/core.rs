//! Core CLI definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bndrops")]
#[command(about = "Battle Network drop tables to wiki chip locations", long_about = None)]
pub struct Cli {
    /// Game definitions file (defaults to the user config directory)
    #[arg(long, global = true, env = "BNDROPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the table paths in a game definition are relative to
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print where one chip code drops
    #[command(visible_alias = "f")]
    Find {
        /// Chip name as written in the tables (e.g. "Guard1")
        name: String,

        /// Chip code (e.g. "A", "*")
        code: String,

        /// Game key (bn1, bn2, bn4, bn6, or one from the config file)
        #[arg(short, long)]
        game: String,
    },

    /// Print locations for every chip code listed in a file
    #[command(visible_alias = "a")]
    Annotate {
        /// File with one "name<TAB>code" or "name code" per line
        chips: PathBuf,

        /// Game key
        #[arg(short, long)]
        game: String,

        /// Stop at the first chip that cannot be rendered
        #[arg(long)]
        strict: bool,
    },

    /// List every enemy block in a table, numbered for ignored-enemy files
    #[command(visible_alias = "e")]
    Enemies {
        /// Drop table dump
        drops: PathBuf,
    },

    /// Show every item in a table with its enemies, HP labels and ranks
    #[command(visible_alias = "d")]
    Dump {
        /// Drop table dump
        drops: PathBuf,

        /// Ignored-enemy file to apply
        #[arg(long)]
        ignored: Option<PathBuf>,

        /// Rows carry HP-percent labels
        #[arg(long)]
        hp_bands: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize the game definitions file
    #[command(visible_alias = "c")]
    Configure {
        /// Show the config path and known games
        #[arg(long)]
        show: bool,

        /// Write the built-in game presets into the config file
        #[arg(long, conflicts_with = "show")]
        init: bool,
    },
}
