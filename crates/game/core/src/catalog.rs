//! Item catalog: immutable weapon and consumable definitions.
//!
//! The catalog is built once at startup (from builtin content or a data
//! file) and passed by reference into the components that need it. Lookup
//! by key returns `Option`; an absent key is a normal outcome the action
//! resolvers handle, not an error condition of the catalog itself.
//!
//! Entries keep their insertion order because the presentation layer
//! exposes them as numbered menus; a selection is an index into that fixed
//! order.

/// Inclusive `[min, max]` range for random draws (weapon damage, work
/// payout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollRange {
    pub min: u32,
    pub max: u32,
}

impl RollRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Attribute thresholds for equipping a weapon. A threshold of zero means
/// "no requirement".
///
/// The purchase gate is deliberately permissive: meeting *any single*
/// stated requirement is enough (see
/// [`crate::state::Combatant::meets_any_requirement`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SkillRequirements {
    pub strength: u32,
    pub agility: u32,
    pub intellect: u32,
}

impl SkillRequirements {
    pub const NONE: Self = Self {
        strength: 0,
        agility: 0,
        intellect: 0,
    };
}

/// Per-stat deltas a consumable applies on use and reverses on expiry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StatDeltas {
    pub hitpoints: i32,
    pub strength: i32,
    pub agility: i32,
    pub intellect: i32,
}

/// How long a consumable effect stays active.
///
/// Permanence is an explicit variant rather than a sentinel counter value,
/// so the expiry pass never has to special-case a magic number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectDuration {
    /// Expires after this many of the owner's turn-starts. Must be > 0.
    Turns(u32),
    /// Never expires; the deltas are kept until the match ends.
    Permanent,
}

/// Weapon definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub name: String,
    pub damage: RollRange,
    pub requirements: SkillRequirements,
    pub cost: u32,
}

impl WeaponSpec {
    /// The default loadout: bare hands, damage 1-1, free, no requirements.
    pub fn unarmed() -> Self {
        Self {
            name: "Unarmed".to_owned(),
            damage: RollRange::new(1, 1),
            requirements: SkillRequirements::NONE,
            cost: 0,
        }
    }
}

/// Consumable definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableSpec {
    pub name: String,
    pub duration: EffectDuration,
    pub effects: StatDeltas,
    pub cost: u32,
}

/// Catalog validation errors.
///
/// Raised once at startup when the catalog is assembled; a catalog that
/// passes [`Catalog::validate`] never produces invalid draws or timers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("weapon '{key}' has inverted damage range {min}-{max}")]
    InvertedDamageRange { key: String, min: u32, max: u32 },

    #[error("consumable '{key}' has a zero-turn duration")]
    ZeroDuration { key: String },

    #[error("duplicate catalog key '{key}'")]
    DuplicateKey { key: String },
}

/// Ordered, immutable lookup tables of weapon and consumable definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    weapons: Vec<(String, WeaponSpec)>,
    consumables: Vec<(String, ConsumableSpec)>,
}

impl Catalog {
    pub fn new(
        weapons: Vec<(String, WeaponSpec)>,
        consumables: Vec<(String, ConsumableSpec)>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            weapons,
            consumables,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks catalog invariants: damage ranges are not inverted, timed
    /// durations are positive, keys are unique within their class.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, (key, weapon)) in self.weapons.iter().enumerate() {
            if weapon.damage.min > weapon.damage.max {
                return Err(CatalogError::InvertedDamageRange {
                    key: key.clone(),
                    min: weapon.damage.min,
                    max: weapon.damage.max,
                });
            }
            if self.weapons[..i].iter().any(|(k, _)| k == key) {
                return Err(CatalogError::DuplicateKey { key: key.clone() });
            }
        }
        for (i, (key, consumable)) in self.consumables.iter().enumerate() {
            if consumable.duration == EffectDuration::Turns(0) {
                return Err(CatalogError::ZeroDuration { key: key.clone() });
            }
            if self.consumables[..i].iter().any(|(k, _)| k == key) {
                return Err(CatalogError::DuplicateKey { key: key.clone() });
            }
        }
        Ok(())
    }

    /// Looks up a weapon by key. `None` means "not in the shop".
    pub fn weapon(&self, key: &str) -> Option<&WeaponSpec> {
        self.weapons
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, spec)| spec)
    }

    /// Looks up a consumable by key. `None` means "not in the shop".
    pub fn consumable(&self, key: &str) -> Option<&ConsumableSpec> {
        self.consumables
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, spec)| spec)
    }

    /// Weapons in menu order.
    pub fn weapons(&self) -> impl Iterator<Item = (&str, &WeaponSpec)> {
        self.weapons.iter().map(|(k, spec)| (k.as_str(), spec))
    }

    /// Consumables in menu order.
    pub fn consumables(&self) -> impl Iterator<Item = (&str, &ConsumableSpec)> {
        self.consumables.iter().map(|(k, spec)| (k.as_str(), spec))
    }

    /// Key of the weapon at a zero-based menu index.
    pub fn weapon_key_at(&self, index: usize) -> Option<&str> {
        self.weapons.get(index).map(|(k, _)| k.as_str())
    }

    /// Key of the consumable at a zero-based menu index.
    pub fn consumable_key_at(&self, index: usize) -> Option<&str> {
        self.consumables.get(index).map(|(k, _)| k.as_str())
    }
}
