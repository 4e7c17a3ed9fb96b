//! Consumable inventory for combatants.
//!
//! Quantities are stacked per catalog key. A slot with quantity zero never
//! persists; removal of the last item removes the slot.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// One inventory stack: a catalog key and how many the combatant owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventorySlot {
    pub key: String,
    pub quantity: u32,
}

/// Bounded inventory keyed by consumable catalog key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Quantity owned for a key; zero when the key has no slot.
    pub fn quantity(&self, key: &str) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.key == key)
            .map_or(0, |slot| slot.quantity)
    }

    /// Adds one item to the stack for `key`.
    ///
    /// Returns `false` when a new slot would be needed and the inventory
    /// is already at capacity; the caller must treat that as a failed
    /// acquisition and leave the rest of its state untouched.
    #[must_use]
    pub fn add_one(&mut self, key: &str) -> bool {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.key == key) {
            slot.quantity += 1;
            return true;
        }
        self.slots
            .try_push(InventorySlot {
                key: key.to_owned(),
                quantity: 1,
            })
            .is_ok()
    }

    /// Removes one item from the stack for `key`, dropping the slot when
    /// it empties. Returns `false` when nothing is owned for the key.
    pub fn remove_one(&mut self, key: &str) -> bool {
        let Some(index) = self.slots.iter().position(|slot| slot.key == key) else {
            return false;
        };
        self.slots[index].quantity -= 1;
        if self.slots[index].quantity == 0 {
            self.slots.remove(index);
        }
        true
    }

    /// Slots in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
