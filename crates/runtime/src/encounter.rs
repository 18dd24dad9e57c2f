//! Encounter flow between the overworld and a battle.
//!
//! The manager remembers which enemy the next battle is against, which enemies
//! have been beaten this session, and the player health carried out of the
//! last battle.
use std::collections::BTreeSet;

use battle_content::Roster;
use battle_core::{EncounterListener, EnemyProfile};

use crate::error::EncounterError;

/// The enemy queued for the next battle.
#[derive(Clone, Debug, PartialEq)]
pub struct Encounter {
    pub enemy: EnemyProfile,
    /// Id recorded as defeated when the player wins.
    pub enemy_id: String,
}

#[derive(Clone, Debug, Default)]
pub struct EncounterManager {
    current: Option<Encounter>,
    last_battle_won: bool,
    defeated: BTreeSet<String>,
    carried_player_health: Option<u32>,
}

impl EncounterManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a battle against `enemy`.
    ///
    /// An empty `enemy_id` falls back to the profile id. A defeated enemy can
    /// only be fought again when `repeatable` is set.
    pub fn start_encounter(
        &mut self,
        enemy: EnemyProfile,
        enemy_id: &str,
        repeatable: bool,
    ) -> Result<&Encounter, EncounterError> {
        let enemy_id = if enemy_id.is_empty() {
            enemy.id.clone()
        } else {
            enemy_id.to_owned()
        };

        if !self.can_encounter(&enemy_id, repeatable) {
            return Err(EncounterError::AlreadyDefeated { id: enemy_id });
        }

        tracing::debug!("Encounter queued: {} (id: {})", enemy.name, enemy_id);
        self.last_battle_won = false;
        Ok(self.current.insert(Encounter { enemy, enemy_id }))
    }

    /// Queues a battle against a roster enemy.
    pub fn start_encounter_by_id(
        &mut self,
        roster: &Roster,
        enemy_id: &str,
        repeatable: bool,
    ) -> Result<&Encounter, EncounterError> {
        let enemy = roster
            .enemy(enemy_id)
            .cloned()
            .ok_or_else(|| EncounterError::UnknownEnemy {
                id: enemy_id.to_owned(),
            })?;
        self.start_encounter(enemy, enemy_id, repeatable)
    }

    pub fn current_enemy(&self) -> Option<&Encounter> {
        self.current.as_ref()
    }

    pub fn last_battle_won(&self) -> bool {
        self.last_battle_won
    }

    pub fn is_enemy_defeated(&self, enemy_id: &str) -> bool {
        self.defeated.contains(enemy_id)
    }

    pub fn can_encounter(&self, enemy_id: &str, repeatable: bool) -> bool {
        repeatable || !self.is_enemy_defeated(enemy_id)
    }

    pub fn defeated_enemies(&self) -> impl Iterator<Item = &str> {
        self.defeated.iter().map(String::as_str)
    }

    pub fn carried_player_health(&self) -> Option<u32> {
        self.carried_player_health
    }

    pub fn store_player_health(&mut self, health: u32) {
        self.carried_player_health = Some(health);
    }

    pub fn forget_player_health(&mut self) {
        self.carried_player_health = None;
    }

    /// Drops the queued encounter and the last result. Defeat records stay.
    pub fn clear_encounter_data(&mut self) {
        self.current = None;
        self.last_battle_won = false;
    }
}

impl EncounterListener for EncounterManager {
    fn end_encounter(&mut self, player_won: bool) {
        self.last_battle_won = player_won;
        let Some(encounter) = &self.current else {
            tracing::warn!("Encounter ended with no encounter queued");
            return;
        };

        tracing::info!(
            "Encounter with {} ended (player won: {})",
            encounter.enemy.name,
            player_won
        );
        if player_won {
            self.defeated.insert(encounter.enemy_id.clone());
        }
    }
}
