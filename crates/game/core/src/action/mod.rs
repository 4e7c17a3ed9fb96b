//! Actions a combatant can take on its turn.
//!
//! An [`Action`] is produced by the presentation layer from menu
//! selections and resolved by [`resolve`]; the resolvers report either an
//! [`ActionOutcome`] (turn consumed) or an [`ActionError`] (turn stays
//! open, same player is re-solicited).

mod error;
pub mod resolve;

pub use error::ActionError;

use strum::Display;

use crate::catalog::StatDeltas;

/// One of the three trainable attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Skill {
    Strength,
    Agility,
    Intellect,
}

/// Item class selector for purchases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ItemClass {
    Weapon,
    Consumable,
}

/// A validated action selection for the active combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Strike the opponent with the equipped weapon.
    Attack,
    /// Buy a catalog item; weapons are equipped, consumables stocked.
    Purchase { class: ItemClass, key: String },
    /// Consume an owned item and register its effect.
    UseItem { key: String },
    /// Train one attribute for a fixed fee.
    Train { skill: Skill },
    /// Earn a random amount of coins.
    Work,
    /// Concede the match to the opponent.
    Forfeit,
}

/// Successful resolution report for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Attacked {
        attacker: String,
        defender: String,
        damage: u32,
        /// True when the blow dropped the defender to zero or below; the
        /// match is over and the attacker has won.
        defeated: bool,
    },
    Purchased {
        buyer: String,
        item: String,
        cost: u32,
        class: ItemClass,
    },
    ItemUsed {
        user: String,
        item: String,
        gained: StatDeltas,
    },
    Trained {
        trainer: String,
        skill: Skill,
        gained: u32,
        cost: u32,
    },
    Worked {
        worker: String,
        earned: u32,
    },
    Forfeited {
        player: String,
    },
}
