//! Slot-based inventory backing the battle item action.
//!
//! Slots keep insertion order. Adding tops up existing stacks of the same
//! item before claiming empty slots; removing drains from the last slot
//! backwards.
use arrayvec::ArrayVec;
use battle_core::{BattleConfig, Inventory, ItemDefinition, ItemStack};

use crate::error::InventoryError;

const SLOT_CAPACITY: usize = BattleConfig::MAX_INVENTORY_SLOTS;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Slot {
    item: ItemDefinition,
    quantity: u32,
}

/// Fixed-size inventory of up to [`BattleConfig::MAX_INVENTORY_SLOTS`] slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryStore {
    slots: ArrayVec<Option<Slot>, SLOT_CAPACITY>,
}

impl InventoryStore {
    /// Creates an empty inventory with `slot_count` slots (capped).
    pub fn with_slots(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count.min(SLOT_CAPACITY)).map(|_| None).collect(),
        }
    }

    pub fn from_config(config: &BattleConfig) -> Self {
        Self::with_slots(config.effective_inventory_slots())
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Stores `quantity` units of `item`.
    ///
    /// Fails without changing anything when the units do not all fit.
    pub fn add_item(&mut self, item: &ItemDefinition, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Ok(());
        }

        let limit = item.stack_limit();
        if self.free_space_for(item) < u64::from(quantity) {
            return Err(InventoryError::InventoryFull {
                item: item.name.clone(),
                requested: quantity,
            });
        }

        let mut remaining = quantity;
        for slot in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if slot.item.id == item.id && slot.quantity < limit {
                let added = (limit - slot.quantity).min(remaining);
                slot.quantity += added;
                remaining -= added;
            }
        }

        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            if remaining == 0 {
                break;
            }
            let added = limit.min(remaining);
            *slot = Some(Slot {
                item: item.clone(),
                quantity: added,
            });
            remaining -= added;
        }

        Ok(())
    }

    /// All held items grouped by id, in first-seen slot order.
    pub fn stacks(&self) -> Vec<ItemStack> {
        let mut stacks: Vec<ItemStack> = Vec::new();
        for slot in self.slots.iter().flatten() {
            match stacks.iter_mut().find(|stack| stack.item.id == slot.item.id) {
                Some(stack) => stack.quantity = stack.quantity.saturating_add(slot.quantity),
                None => stacks.push(ItemStack::new(slot.item.clone(), slot.quantity)),
            }
        }
        stacks
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    fn free_space_for(&self, item: &ItemDefinition) -> u64 {
        let limit = u64::from(item.stack_limit());
        self.slots
            .iter()
            .map(|slot| match slot {
                None => limit,
                Some(slot) if slot.item.id == item.id => {
                    limit.saturating_sub(u64::from(slot.quantity))
                }
                Some(_) => 0,
            })
            .sum()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::with_slots(SLOT_CAPACITY)
    }
}

impl Inventory for InventoryStore {
    fn battle_usable_items(&self) -> Vec<ItemStack> {
        self.stacks()
            .into_iter()
            .filter(|stack| stack.item.usable_in_battle && stack.quantity > 0)
            .collect()
    }

    fn item_count(&self, item_id: &str) -> u32 {
        let total: u64 = self
            .slots
            .iter()
            .flatten()
            .filter(|slot| slot.item.id == item_id)
            .map(|slot| u64::from(slot.quantity))
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        let mut remaining = quantity;
        if remaining == 0 {
            return true;
        }

        for entry in self.slots.iter_mut().rev() {
            let Some(slot) = entry else { continue };
            if slot.item.id != item_id {
                continue;
            }

            if slot.quantity > remaining {
                slot.quantity -= remaining;
                return true;
            }
            remaining -= slot.quantity;
            *entry = None;
            if remaining == 0 {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use battle_core::ItemKind;

    use super::*;

    fn herb() -> ItemDefinition {
        ItemDefinition::healing("herb", "Herb", 30).with_max_stack(5)
    }

    fn whisker() -> ItemDefinition {
        ItemDefinition::new("whisker", "Whisker", ItemKind::Generic).with_max_stack(99)
    }

    #[test]
    fn add_tops_up_before_claiming_slots() {
        let mut inventory = InventoryStore::with_slots(4);
        inventory.add_item(&herb(), 3).unwrap();
        inventory.add_item(&whisker(), 1).unwrap();
        inventory.add_item(&herb(), 4).unwrap();

        assert_eq!(inventory.item_count("herb"), 7);
        let occupied: Vec<_> = inventory
            .slots
            .iter()
            .map(|slot| slot.as_ref().map(|slot| (slot.item.id.as_str(), slot.quantity)))
            .collect();
        assert_eq!(
            occupied,
            vec![
                Some(("herb", 5)),
                Some(("whisker", 1)),
                Some(("herb", 2)),
                None
            ]
        );
    }

    #[test]
    fn full_inventory_rejects_without_partial_add() {
        let mut inventory = InventoryStore::with_slots(2);
        inventory.add_item(&herb(), 8).unwrap();

        let error = inventory.add_item(&herb(), 3).unwrap_err();

        assert_eq!(
            error,
            InventoryError::InventoryFull {
                item: "Herb".into(),
                requested: 3
            }
        );
        assert_eq!(inventory.item_count("herb"), 8);
        inventory.add_item(&herb(), 2).unwrap();
        assert_eq!(inventory.item_count("herb"), 10);
    }

    #[test]
    fn counts_saturate_for_huge_stacks() {
        let mut inventory = InventoryStore::with_slots(3);
        let sand = ItemDefinition::new("sand", "Sand", ItemKind::Generic).with_max_stack(u32::MAX);
        inventory.add_item(&sand, u32::MAX).unwrap();
        inventory.add_item(&sand, u32::MAX).unwrap();

        assert_eq!(inventory.item_count("sand"), u32::MAX);
        assert_eq!(inventory.stacks()[0].quantity, u32::MAX);
    }

    #[test]
    fn remove_drains_last_slots_first() {
        let mut inventory = InventoryStore::with_slots(3);
        inventory.add_item(&herb(), 7).unwrap();

        assert!(inventory.remove_item("herb", 3));
        assert_eq!(inventory.item_count("herb"), 4);
        assert!(inventory.slots[1].is_none());
        assert_eq!(inventory.slots[0].as_ref().map(|slot| slot.quantity), Some(4));
    }

    #[test]
    fn remove_more_than_held_empties_and_reports_failure() {
        let mut inventory = InventoryStore::with_slots(3);
        inventory.add_item(&herb(), 2).unwrap();

        assert!(!inventory.remove_item("herb", 5));
        assert_eq!(inventory.item_count("herb"), 0);
        assert!(inventory.is_empty());
        assert!(!inventory.remove_item("fish", 1));
    }

    #[test]
    fn battle_usable_items_groups_and_filters() {
        let mut inventory = InventoryStore::with_slots(5);
        inventory.add_item(&whisker(), 4).unwrap();
        inventory.add_item(&herb(), 6).unwrap();

        let usable = inventory.battle_usable_items();

        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].item.id, "herb");
        assert_eq!(usable[0].quantity, 6);
    }

    #[test]
    fn slot_count_is_capped() {
        assert_eq!(InventoryStore::with_slots(64).slot_count(), SLOT_CAPACITY);
        assert_eq!(InventoryStore::default().slot_count(), 20);
    }
}
