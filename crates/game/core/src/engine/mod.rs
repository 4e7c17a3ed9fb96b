//! Turn state machine.
//!
//! The [`TurnEngine`] is the authoritative owner of [`MatchState`]: it
//! alternates turns between the two combatants, runs effect upkeep at the
//! start of each turn, routes submitted actions through the resolvers, and
//! detects the terminal transitions (death, forfeit). The engine is
//! headless; the driver observes the phase and decides when to solicit
//! input and when to stop.
//!
//! Phases cycle `AwaitingUpkeep -> AwaitingAction -> AwaitingUpkeep` (for
//! the other player), with failed resolutions looping in `AwaitingAction`.
//! `Over(winner)` is reachable only from a lethal attack or a forfeit and
//! is never left.

mod state;

pub use state::{MatchState, PlayerSlot, TurnPhase};

use crate::action::{Action, ActionError, ActionOutcome, resolve};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::RngOracle;
use crate::state::{Combatant, ExpiredEffect};

/// Errors from driving the turn cycle out of phase.
///
/// These indicate driver bugs, unlike [`ActionError`] which is a normal
/// in-game outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the match is already over")]
    MatchOver,

    #[error("turn upkeep has already run for this turn")]
    UpkeepAlreadyRun,
}

/// Errors from submitting an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// Recoverable resolution failure: the turn stays open and the same
    /// player must be re-solicited.
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("the match is already over")]
    MatchOver,

    #[error("turn upkeep has not run for this turn")]
    UpkeepPending,
}

/// Two-combatant turn engine.
pub struct TurnEngine {
    state: MatchState,
}

impl TurnEngine {
    /// Starts a match at upkeep for player one.
    pub fn new(player_one: Combatant, player_two: Combatant) -> Self {
        Self {
            state: MatchState::new(player_one, player_two),
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.phase
    }

    pub fn active_slot(&self) -> PlayerSlot {
        self.state.active
    }

    pub fn combatant(&self, slot: PlayerSlot) -> &Combatant {
        self.state.combatant(slot)
    }

    pub fn active_combatant(&self) -> &Combatant {
        self.state.combatant(self.state.active)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state.phase, TurnPhase::Over(_))
    }

    /// The winning combatant once the match is over.
    pub fn winner(&self) -> Option<&Combatant> {
        match self.state.phase {
            TurnPhase::Over(slot) => Some(self.state.combatant(slot)),
            _ => None,
        }
    }

    /// Runs effect upkeep for the active combatant and opens the turn.
    ///
    /// Invoked exactly once per turn, before any action is solicited;
    /// returns the expiry reports for display.
    pub fn begin_turn(&mut self) -> Result<Vec<ExpiredEffect>, TurnError> {
        match self.state.phase {
            TurnPhase::Over(_) => return Err(TurnError::MatchOver),
            TurnPhase::AwaitingAction => return Err(TurnError::UpkeepAlreadyRun),
            TurnPhase::AwaitingUpkeep => {}
        }

        let expired = self.state.active_mut().expire_effects();
        self.state.phase = TurnPhase::AwaitingAction;
        Ok(expired)
    }

    /// Resolves one action selection for the active combatant.
    ///
    /// On `Ok` the turn is consumed: the engine either hands the next turn
    /// to the opponent or, for a lethal attack or a forfeit, enters
    /// `Over(winner)`. On `Err(ExecuteError::Action)` nothing changed and
    /// the same player must be re-solicited.
    pub fn submit(
        &mut self,
        action: Action,
        catalog: &Catalog,
        config: &GameConfig,
        rng: &mut dyn RngOracle,
    ) -> Result<ActionOutcome, ExecuteError> {
        match self.state.phase {
            TurnPhase::Over(_) => return Err(ExecuteError::MatchOver),
            TurnPhase::AwaitingUpkeep => return Err(ExecuteError::UpkeepPending),
            TurnPhase::AwaitingAction => {}
        }

        let active = self.state.active;
        let outcome = match action {
            Action::Attack => {
                let (attacker, defender) = self.state.pair_mut();
                let outcome = resolve::attack(attacker, defender, rng);
                if let ActionOutcome::Attacked { defeated: true, .. } = outcome {
                    self.state.phase = TurnPhase::Over(active);
                    return Ok(outcome);
                }
                outcome
            }
            Action::Purchase { class, key } => {
                resolve::purchase(self.state.active_mut(), catalog, class, &key)?
            }
            Action::UseItem { key } => resolve::use_item(self.state.active_mut(), catalog, &key)?,
            Action::Train { skill } => resolve::train(self.state.active_mut(), config, skill)?,
            Action::Work => resolve::work(self.state.active_mut(), config, rng),
            Action::Forfeit => {
                let player = self.state.active_combatant().name.clone();
                self.state.phase = TurnPhase::Over(active.opponent());
                return Ok(ActionOutcome::Forfeited { player });
            }
        };

        // Turn consumed without a terminal transition: hand over.
        self.state.active = active.opponent();
        self.state.phase = TurnPhase::AwaitingUpkeep;
        Ok(outcome)
    }
}
