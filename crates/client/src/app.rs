//! Interactive match driver.
//!
//! Drives the headless engine to `Over`: renders both status blocks,
//! runs turn upkeep, solicits actions until one resolves, and stops the
//! moment the engine reports a winner.

use std::io::BufRead;

use anyhow::{Context, Result};
use duel_core::{Catalog, Combatant, ExecuteError, GameConfig, PlayerSlot, RngOracle, TurnEngine};

use crate::{menu, view};

pub struct App<R> {
    engine: TurnEngine,
    catalog: Catalog,
    config: GameConfig,
    rng: R,
}

impl<R: RngOracle> App<R> {
    pub fn new(names: (String, String), catalog: Catalog, config: GameConfig, rng: R) -> Self {
        let player_one = Combatant::new(names.0, &config);
        let player_two = Combatant::new(names.1, &config);
        Self {
            engine: TurnEngine::new(player_one, player_two),
            catalog,
            config,
            rng,
        }
    }

    /// Runs the match to completion and returns the winner's name.
    pub fn run<I: BufRead>(&mut self, input: &mut I) -> Result<String> {
        loop {
            println!("\n");
            view::print_status(self.engine.combatant(PlayerSlot::One), &self.catalog);
            view::print_status(self.engine.combatant(PlayerSlot::Two), &self.catalog);

            for expired in self.engine.begin_turn()? {
                view::print_expiry(self.engine.active_combatant(), &expired);
            }

            self.take_turn(input)?;

            if let Some(winner) = self.engine.winner() {
                println!("{} wins!", winner.name);
                tracing::info!(winner = %winner.name, "match over");
                return Ok(winner.name.clone());
            }
        }
    }

    /// Solicits selections until one resolves; failures leave the turn
    /// open for the same player.
    fn take_turn<I: BufRead>(&mut self, input: &mut I) -> Result<()> {
        loop {
            let selection =
                menu::solicit_action(input, self.engine.active_combatant(), &self.catalog)
                    .context("reading action selection")?;

            let action = match selection {
                Ok(action) => action,
                Err(err) => {
                    println!("{err}. Try again.");
                    continue;
                }
            };

            tracing::debug!(?action, player = %self.engine.active_combatant().name, "submitting");
            match self
                .engine
                .submit(action, &self.catalog, &self.config, &mut self.rng)
            {
                Ok(outcome) => {
                    view::print_outcome(&outcome);
                    return Ok(());
                }
                Err(ExecuteError::Action(err)) => {
                    println!("{err}. Try again.");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
