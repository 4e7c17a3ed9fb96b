//! Deterministic dueling rules shared across clients.
//!
//! `duel-core` defines the canonical match rules (catalog, combatants,
//! actions, turn engine) and exposes pure APIs that can be reused by both
//! the interactive client and offline tools. All state mutation flows
//! through [`engine::TurnEngine`], and supporting crates depend on the
//! types re-exported here. The crate performs no I/O; randomness enters
//! only through the [`rng::RngOracle`] trait.
pub mod action;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod rng;
pub mod state;

pub use action::{Action, ActionError, ActionOutcome, ItemClass, Skill};
pub use catalog::{
    Catalog, CatalogError, ConsumableSpec, EffectDuration, RollRange, SkillRequirements,
    StatDeltas, WeaponSpec,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, PlayerSlot, TurnEngine, TurnError, TurnPhase};
pub use rng::RngOracle;
pub use state::{ActiveEffect, Combatant, EffectTimer, ExpiredEffect, Inventory, InventorySlot};
