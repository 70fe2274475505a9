//! Inventory domain: the slot list resource.

use bevy::prelude::*;

/// One stack of a single item kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSlot {
    pub item_id: String,
    pub amount: u32,
}

/// Ordered list of collected items. First pickup of a kind appends a slot;
/// repeats stack onto the existing one.
#[derive(Resource, Debug, Default)]
pub struct Inventory {
    pub slots: Vec<ItemSlot>,
}

impl Inventory {
    pub fn add(&mut self, item_id: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.item_id == item_id) {
            slot.amount += 1;
        } else {
            self.slots.push(ItemSlot {
                item_id: item_id.to_string(),
                amount: 1,
            });
        }
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.item_id == item_id)
            .map(|slot| slot.amount)
            .unwrap_or(0)
    }

    pub fn total_items(&self) -> u32 {
        self.slots.iter().map(|slot| slot.amount).sum()
    }
}
