mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "bndrops=warn",
        1 => "bndrops=info,bndrops_cli=info",
        2 => "bndrops=debug,bndrops_cli=debug",
        _ => "bndrops=trace,bndrops_cli=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Find { name, code, game } => {
            commands::find::handle(&config, &cli.data_dir, &game, &name, &code)?;
        }

        Commands::Annotate {
            chips,
            game,
            strict,
        } => {
            commands::annotate::handle(&config, &cli.data_dir, &game, &chips, strict)?;
        }

        Commands::Enemies { drops } => {
            commands::enemies::handle(&drops)?;
        }

        Commands::Dump {
            drops,
            ignored,
            hp_bands,
            json,
        } => {
            commands::dump::handle(&drops, ignored.as_deref(), hp_bands, json)?;
        }

        Commands::Configure { show, init } => {
            commands::configure::handle(config, show, init)?;
        }
    }

    Ok(())
}
