use crate::state::Combatant;

/// One of the two seats at the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Where the turn cycle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Effect upkeep for the active player has not run yet.
    AwaitingUpkeep,
    /// Upkeep has run; an action selection is being solicited.
    AwaitingAction,
    /// Terminal: the slot holds the winner. Never left.
    Over(PlayerSlot),
}

/// The two combatants plus whose turn it is.
///
/// Owned exclusively by [`super::TurnEngine`]; there is no other
/// process-wide match state.
#[derive(Clone, Debug)]
pub struct MatchState {
    combatants: [Combatant; 2],
    pub(super) active: PlayerSlot,
    pub(super) phase: TurnPhase,
}

impl MatchState {
    pub(super) fn new(player_one: Combatant, player_two: Combatant) -> Self {
        Self {
            combatants: [player_one, player_two],
            active: PlayerSlot::One,
            phase: TurnPhase::AwaitingUpkeep,
        }
    }

    pub fn combatant(&self, slot: PlayerSlot) -> &Combatant {
        &self.combatants[slot.index()]
    }

    pub(crate) fn combatant_mut(&mut self, slot: PlayerSlot) -> &mut Combatant {
        &mut self.combatants[slot.index()]
    }

    pub(super) fn active_combatant(&self) -> &Combatant {
        self.combatant(self.active)
    }

    pub(super) fn active_mut(&mut self) -> &mut Combatant {
        self.combatant_mut(self.active)
    }

    /// Splits the pair into `(active, opponent)` for the attack path,
    /// which mutates the opponent's hitpoints.
    pub(super) fn pair_mut(&mut self) -> (&mut Combatant, &mut Combatant) {
        let [one, two] = &mut self.combatants;
        match self.active {
            PlayerSlot::One => (one, two),
            PlayerSlot::Two => (two, one),
        }
    }
}
