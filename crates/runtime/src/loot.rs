//! Victory loot and the one-time notices that go with it.
use battle_core::{BattleConfig, Inventory, ItemDefinition};
use serde::Serialize;

use crate::inventory::InventoryStore;

pub const FIRST_DEFEAT_NOTICE: &str =
    "Enemies drop Whiskers when defeated. Collect them, they can be used later!";

/// Which once-per-session notices have been shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionProgress {
    first_defeat_shown: bool,
    milestone_shown: bool,
}

impl SessionProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first-defeat notice the first time it is asked for.
    pub fn first_defeat_notice(&mut self) -> Option<String> {
        if self.first_defeat_shown {
            return None;
        }
        self.first_defeat_shown = true;
        Some(FIRST_DEFEAT_NOTICE.to_owned())
    }

    /// Returns the milestone notice once `count` reaches `milestone`.
    pub fn milestone_notice(&mut self, count: u32, milestone: u32, item: &str) -> Option<String> {
        if self.milestone_shown || count < milestone {
            return None;
        }
        self.milestone_shown = true;
        Some(format!(
            "You've collected {milestone} {item}s! Keep fighting to gather more."
        ))
    }

    pub fn first_defeat_shown(&self) -> bool {
        self.first_defeat_shown
    }

    pub fn milestone_shown(&self) -> bool {
        self.milestone_shown
    }
}

/// What a victory handed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LootDrop {
    pub item: String,
    /// Quantity actually stored; zero when the inventory had no room.
    pub quantity: u32,
    /// Total held after the drop.
    pub total: u32,
    pub notices: Vec<String>,
}

/// The item awarded after every victory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LootTable {
    item: ItemDefinition,
    quantity: u32,
    milestone: u32,
}

impl LootTable {
    pub fn new(item: ItemDefinition, quantity: u32, milestone: u32) -> Self {
        Self {
            item,
            quantity,
            milestone,
        }
    }

    pub fn from_config(config: &BattleConfig, item: ItemDefinition) -> Self {
        Self::new(item, config.loot_quantity, config.loot_milestone)
    }

    pub fn item(&self) -> &ItemDefinition {
        &self.item
    }

    /// Awards one victory's loot and collects the notices it unlocks.
    ///
    /// The notices belong to the victory: they are collected even when the
    /// inventory cannot hold the drop.
    pub fn award(&self, inventory: &mut InventoryStore, progress: &mut SessionProgress) -> LootDrop {
        let quantity = match inventory.add_item(&self.item, self.quantity) {
            Ok(()) => self.quantity,
            Err(error) => {
                tracing::warn!("Loot dropped on the floor: {}", error);
                0
            }
        };
        let total = inventory.item_count(&self.item.id);
        tracing::info!(
            "Awarded {} x {} ({} held)",
            quantity,
            self.item.name,
            total
        );

        let notices = progress
            .milestone_notice(total, self.milestone, &self.item.name)
            .into_iter()
            .chain(progress.first_defeat_notice())
            .collect();

        LootDrop {
            item: self.item.name.clone(),
            quantity,
            total,
            notices,
        }
    }
}

#[cfg(test)]
mod tests {
    use battle_core::ItemKind;

    use super::*;

    fn table() -> LootTable {
        let whisker = ItemDefinition::new("whisker", "Whisker", ItemKind::Generic).with_max_stack(99);
        LootTable::from_config(&BattleConfig::default(), whisker)
    }

    #[test]
    fn first_victory_shows_first_defeat_notice_once() {
        let table = table();
        let mut inventory = InventoryStore::default();
        let mut progress = SessionProgress::new();

        let first = table.award(&mut inventory, &mut progress);
        let second = table.award(&mut inventory, &mut progress);

        assert_eq!(first.notices, vec![FIRST_DEFEAT_NOTICE.to_owned()]);
        assert!(second.notices.is_empty());
        assert_eq!(second.total, 2);
    }

    #[test]
    fn milestone_notice_fires_once_at_threshold() {
        let table = table();
        let mut inventory = InventoryStore::default();
        let mut progress = SessionProgress::new();

        let mut milestone_drops = Vec::new();
        for _ in 0..12 {
            let drop = table.award(&mut inventory, &mut progress);
            if drop.notices.iter().any(|notice| notice.contains("10 Whiskers")) {
                milestone_drops.push(drop.total);
            }
        }

        assert_eq!(milestone_drops, vec![10]);
        assert!(progress.milestone_shown());
        assert_eq!(inventory.item_count("whisker"), 12);
    }

    #[test]
    fn full_inventory_still_shows_first_defeat_notice() {
        let table = table();
        let mut inventory = InventoryStore::with_slots(0);
        let mut progress = SessionProgress::new();

        let drop = table.award(&mut inventory, &mut progress);

        assert_eq!((drop.quantity, drop.total), (0, 0));
        assert_eq!(drop.notices, vec![FIRST_DEFEAT_NOTICE.to_owned()]);
        assert!(progress.first_defeat_shown());

        let again = table.award(&mut inventory, &mut progress);
        assert!(again.notices.is_empty());
    }
}
