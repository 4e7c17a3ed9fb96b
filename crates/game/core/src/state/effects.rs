//! Timed consumable effects.
//!
//! An [`ActiveEffect`] is created when a consumable is used, aged once at
//! the start of each of its owner's turns, and reversed when its timer
//! runs out. Permanent effects carry an explicit [`EffectTimer::Permanent`]
//! variant instead of a sentinel counter, so they can never expire through
//! decrementing.

use crate::catalog::{EffectDuration, StatDeltas};

/// Remaining lifetime of an active effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectTimer {
    /// Expires when the counter reaches zero; decremented once per
    /// owner turn-start.
    Expires(u32),
    /// Lasts until the match ends.
    Permanent,
}

impl From<EffectDuration> for EffectTimer {
    fn from(duration: EffectDuration) -> Self {
        match duration {
            EffectDuration::Turns(turns) => Self::Expires(turns),
            EffectDuration::Permanent => Self::Permanent,
        }
    }
}

/// A consumable effect currently applied to a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveEffect {
    /// Display name of the consumable that produced this effect.
    pub name: String,
    /// Deltas applied on use; reversed verbatim on expiry.
    pub deltas: StatDeltas,
    pub timer: EffectTimer,
}

impl ActiveEffect {
    pub fn new(name: impl Into<String>, deltas: StatDeltas, duration: EffectDuration) -> Self {
        Self {
            name: name.into(),
            deltas,
            timer: duration.into(),
        }
    }
}

/// Expiry report handed to the presentation layer: which effect ran out
/// and which deltas were reversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpiredEffect {
    pub name: String,
    pub reversed: StatDeltas,
}
