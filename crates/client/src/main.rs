//! Duel client entry point.
//!
//! Assembles the pieces: catalog (builtin or loaded from a RON file),
//! configuration, RNG, and the interactive match driver. The process
//! exits with status 0 as soon as the match reaches its terminal state
//! and the winner has been printed.

mod app;
mod menu;
mod rng;
mod view;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use duel_core::GameConfig;

use app::App;
use rng::EntropyRng;

#[derive(Debug, Parser)]
#[command(name = "duel", about = "Two-combatant turn-based dueling game")]
struct Args {
    /// Load the shop catalog from a RON file instead of the builtin one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pin the RNG seed for a reproducible match.
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the first player.
    #[arg(long, default_value = "Gopher 1")]
    player_one: String,

    /// Name of the second player.
    #[arg(long, default_value = "Gopher 2")]
    player_two: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => duel_content::CatalogLoader::load(path)?,
        None => duel_content::builtin_catalog(),
    };
    tracing::info!(
        weapons = catalog.weapons().count(),
        consumables = catalog.consumables().count(),
        "catalog ready"
    );

    let mut app = App::new(
        (args.player_one, args.player_two),
        catalog,
        GameConfig::default(),
        EntropyRng::new(args.seed),
    );
    app.run(&mut io::stdin().lock())?;

    Ok(())
}
