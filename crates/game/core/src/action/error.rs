//! Action resolution errors.
//!
//! Every variant is local and recoverable: the failed action consumes
//! nothing, the actor's turn stays open, and the presentation layer
//! re-solicits a selection from the same player. Match-ending transitions
//! (death, forfeit) are successful outcomes, not errors.

/// Why an action selection could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The requested key is absent from the catalog for the requested
    /// item class, or the actor owns none of it.
    #[error("item not found")]
    ItemNotFound,

    /// The actor cannot afford the item or the training fee.
    #[error("not enough coins (need {needed}, have {available})")]
    InsufficientFunds { needed: u32, available: u32 },

    /// The actor meets none of the weapon's stated attribute
    /// requirements.
    #[error("insufficient skills to buy and equip the weapon")]
    InsufficientSkill,

    /// The training sub-selector named no trainable attribute.
    #[error("invalid skill to train")]
    InvalidSkill,

    /// A menu selector was outside its valid range.
    #[error("invalid selection")]
    InvalidSelection,

    /// No room for another distinct consumable kind.
    #[error("inventory is full")]
    InventoryFull,

    /// No room for another simultaneously active effect.
    #[error("too many active effects")]
    EffectsFull,
}
