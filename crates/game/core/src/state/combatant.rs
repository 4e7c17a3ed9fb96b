use arrayvec::ArrayVec;

use crate::action::Skill;
use crate::catalog::{SkillRequirements, StatDeltas, WeaponSpec};
use crate::config::GameConfig;

use super::effects::{ActiveEffect, EffectTimer, ExpiredEffect};
use super::inventory::Inventory;

/// A participant in the match: stats, coins, equipment, inventory and
/// active effects.
///
/// Hitpoints are signed and may go non-positive to signal death. The three
/// attributes are unsigned and saturate at zero when a negative delta is
/// applied or a positive one reversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub name: String,
    pub hitpoints: i32,
    pub strength: u32,
    pub agility: u32,
    pub intellect: u32,
    pub coins: u32,
    /// Exactly one equipped weapon; starts unarmed.
    pub weapon: WeaponSpec,
    pub inventory: Inventory,
    /// Active effects in consumption order.
    pub active_effects: ArrayVec<ActiveEffect, { GameConfig::MAX_ACTIVE_EFFECTS }>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            hitpoints: config.starting_hitpoints,
            strength: 0,
            agility: 0,
            intellect: 0,
            coins: config.starting_coins,
            weapon: WeaponSpec::unarmed(),
            inventory: Inventory::empty(),
            active_effects: ArrayVec::new(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hitpoints > 0
    }

    /// Current value of one trainable attribute.
    pub fn skill(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Strength => self.strength,
            Skill::Agility => self.agility,
            Skill::Intellect => self.intellect,
        }
    }

    pub fn train(&mut self, skill: Skill, amount: u32) {
        match skill {
            Skill::Strength => self.strength += amount,
            Skill::Agility => self.agility += amount,
            Skill::Intellect => self.intellect += amount,
        }
    }

    /// The weapon purchase gate: true when the combatant meets or exceeds
    /// at least one of the weapon's stated requirements. A requirement of
    /// zero means "no requirement" and is not part of the gate; a weapon
    /// with no stated requirements is free to equip.
    pub fn meets_any_requirement(&self, requirements: &SkillRequirements) -> bool {
        let gates = [
            (requirements.strength, self.skill(Skill::Strength)),
            (requirements.agility, self.skill(Skill::Agility)),
            (requirements.intellect, self.skill(Skill::Intellect)),
        ];
        if gates.iter().all(|&(required, _)| required == 0) {
            return true;
        }
        gates
            .iter()
            .any(|&(required, actual)| required > 0 && actual >= required)
    }

    /// Applies consumable deltas additively to stats and hitpoints.
    pub fn apply_deltas(&mut self, deltas: &StatDeltas) {
        self.hitpoints += deltas.hitpoints;
        self.strength = apply_signed(self.strength, deltas.strength);
        self.agility = apply_signed(self.agility, deltas.agility);
        self.intellect = apply_signed(self.intellect, deltas.intellect);
    }

    /// Reverses previously applied deltas.
    pub fn revert_deltas(&mut self, deltas: &StatDeltas) {
        self.hitpoints -= deltas.hitpoints;
        self.strength = apply_signed(self.strength, -deltas.strength);
        self.agility = apply_signed(self.agility, -deltas.agility);
        self.intellect = apply_signed(self.intellect, -deltas.intellect);
    }

    /// Ages every active effect by one turn and removes the ones whose
    /// timer reaches zero, reversing their deltas.
    ///
    /// Called exactly once per turn, at the start of this combatant's own
    /// turn, before any action is solicited. Permanent effects are left
    /// untouched. Returns the reversals for display, in consumption order.
    pub fn expire_effects(&mut self) -> Vec<ExpiredEffect> {
        let mut expired = Vec::new();
        let effects = core::mem::take(&mut self.active_effects);

        for mut effect in effects {
            match effect.timer {
                EffectTimer::Permanent => self.active_effects.push(effect),
                EffectTimer::Expires(remaining) => {
                    let remaining = remaining.saturating_sub(1);
                    if remaining == 0 {
                        self.revert_deltas(&effect.deltas);
                        expired.push(ExpiredEffect {
                            name: effect.name,
                            reversed: effect.deltas,
                        });
                    } else {
                        effect.timer = EffectTimer::Expires(remaining);
                        self.active_effects.push(effect);
                    }
                }
            }
        }

        expired
    }
}

/// Adds a signed delta to an unsigned attribute, saturating at zero.
fn apply_signed(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value + delta as u32
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}
