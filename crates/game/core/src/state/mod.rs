//! Mutable per-combatant state.
//!
//! A [`Combatant`] is created once at match start and mutated in place by
//! the action resolvers until the match ends. The two combatants are owned
//! exclusively by the [`crate::engine::TurnEngine`]; nothing else holds a
//! reference across turns.

mod combatant;
mod effects;
mod inventory;

pub use combatant::Combatant;
pub use effects::{ActiveEffect, EffectTimer, ExpiredEffect};
pub use inventory::{Inventory, InventorySlot};
