use crate::catalog::RollRange;

/// Match configuration constants and tunable parameters.
///
/// Constructed once at startup and passed by reference into the engine;
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Hitpoints each combatant starts the match with.
    pub starting_hitpoints: i32,
    /// Coin balance each combatant starts the match with.
    pub starting_coins: u32,
    /// Coins deducted by a single training session.
    pub training_cost: u32,
    /// Attribute points gained by a single training session.
    pub training_increment: u32,
    /// Inclusive range of coins earned by one shift of work.
    pub work_payout: RollRange,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum distinct consumable kinds a combatant can hold at once.
    pub const MAX_INVENTORY_SLOTS: usize = 16;
    /// Maximum simultaneously active consumable effects per combatant.
    /// Permanent effects accumulate for the whole match, so this is
    /// roomier than the inventory bound.
    pub const MAX_ACTIVE_EFFECTS: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HITPOINTS: i32 = 30;
    pub const DEFAULT_STARTING_COINS: u32 = 20;
    pub const DEFAULT_TRAINING_COST: u32 = 5;
    pub const DEFAULT_TRAINING_INCREMENT: u32 = 2;
    pub const DEFAULT_WORK_PAYOUT: RollRange = RollRange { min: 5, max: 15 };

    pub fn new() -> Self {
        Self {
            starting_hitpoints: Self::DEFAULT_STARTING_HITPOINTS,
            starting_coins: Self::DEFAULT_STARTING_COINS,
            training_cost: Self::DEFAULT_TRAINING_COST,
            training_increment: Self::DEFAULT_TRAINING_INCREMENT,
            work_payout: Self::DEFAULT_WORK_PAYOUT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
