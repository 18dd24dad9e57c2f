//! Session-wide game state shared by every battle.
//!
//! [`GameContext`] is created once per process and passed by `&mut` to each
//! [`crate::BattleRunner`]. It owns everything that outlives a single battle.
use battle_content::{Content, ItemCatalog, Roster};
use battle_core::{BattleConfig, PlayerProfile, compute_seed};

use crate::abilities::PlayerAbilities;
use crate::encounter::{Encounter, EncounterManager};
use crate::error::{InventoryError, Result};
use crate::inventory::InventoryStore;
use crate::loot::{LootDrop, LootTable, SessionProgress};

/// Item id handed out for pending herbs.
pub const HERB_ITEM_ID: &str = "herb";

/// Context value mixed into per-battle seeds.
const BATTLE_SEED_CONTEXT: u32 = 0xBA77;

pub struct GameContext {
    pub config: BattleConfig,
    pub roster: Roster,
    pub items: ItemCatalog,
    pub inventory: InventoryStore,
    pub encounters: EncounterManager,
    pub abilities: PlayerAbilities,
    pub progress: SessionProgress,
    loot: LootTable,
    game_seed: u64,
    battles_started: u64,
}

impl GameContext {
    /// Builds a context from loaded content with a random game seed.
    ///
    /// Fails if the configured loot item is missing from the catalog.
    pub fn new(content: Content) -> Result<Self> {
        let Content {
            roster,
            items,
            config,
        } = content;

        let loot_item = items
            .get(&config.loot_item)
            .cloned()
            .ok_or_else(|| InventoryError::UnknownItem {
                id: config.loot_item.clone(),
            })?;

        Ok(Self {
            inventory: InventoryStore::from_config(&config),
            loot: LootTable::from_config(&config, loot_item),
            encounters: EncounterManager::new(),
            abilities: PlayerAbilities::new(),
            progress: SessionProgress::new(),
            game_seed: rand::random(),
            battles_started: 0,
            config,
            roster,
            items,
        })
    }

    /// Fixes the game seed so battles replay identically.
    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self.battles_started = 0;
        self
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn loot(&self) -> &LootTable {
        &self.loot
    }

    /// Awards one victory's loot.
    pub fn award_loot(&mut self) -> LootDrop {
        self.loot.award(&mut self.inventory, &mut self.progress)
    }

    /// Wipes everything a previous playthrough left behind: abilities,
    /// pending herbs, inventory, encounter records and shown notices.
    ///
    /// The game seed and content are kept.
    pub fn new_game(&mut self) {
        self.abilities.reset();
        self.inventory.clear();
        self.encounters = EncounterManager::new();
        self.progress = SessionProgress::new();
        tracing::info!("New game started");
    }

    /// Seed for the next battle's rolls.
    pub fn next_battle_seed(&mut self) -> u64 {
        let seed = compute_seed(self.game_seed, self.battles_started, BATTLE_SEED_CONTEXT);
        self.battles_started += 1;
        seed
    }

    /// Player profile for the next battle, abilities applied.
    pub fn player_profile(&self) -> PlayerProfile {
        let mut profile = self.roster.player.clone();
        self.abilities.apply_to(&mut profile.stats);
        profile
    }

    /// Queues a battle against a roster enemy.
    pub fn start_encounter(&mut self, enemy_id: &str, repeatable: bool) -> Result<&Encounter> {
        Ok(self
            .encounters
            .start_encounter_by_id(&self.roster, enemy_id, repeatable)?)
    }

    /// Adds catalog item `item_id` to the inventory.
    pub fn give_item(&mut self, item_id: &str, quantity: u32) -> Result<()> {
        let item = self
            .items
            .get(item_id)
            .ok_or_else(|| InventoryError::UnknownItem {
                id: item_id.to_owned(),
            })?;
        self.inventory.add_item(item, quantity)?;
        Ok(())
    }

    /// Moves pending herbs from the ability data into the inventory.
    pub fn deliver_herbs(&mut self) -> Result<u32> {
        let herbs = self.abilities.herbs_to_receive();
        if herbs == 0 {
            return Ok(0);
        }
        self.give_item(HERB_ITEM_ID, herbs)?;
        self.abilities.take_herbs();
        tracing::info!("Delivered {} pending herbs", herbs);
        Ok(herbs)
    }
}
