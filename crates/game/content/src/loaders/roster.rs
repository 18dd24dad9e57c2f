//! Player profile and enemy roster loader.

use std::path::Path;

use battle_core::{EnemyProfile, PlayerProfile};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// The player's starting profile plus every enemy that can be encountered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub player: PlayerProfile,
    pub enemies: Vec<EnemyProfile>,
}

impl Roster {
    /// Looks up an enemy by its id.
    pub fn enemy(&self, id: &str) -> Option<&EnemyProfile> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }
}

/// Loader for the roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a roster, rejecting empty or duplicate enemy ids.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (index, enemy) in roster.enemies.iter().enumerate() {
            if enemy.id.is_empty() {
                anyhow::bail!("Enemy '{}' has an empty id", enemy.name);
            }
            if roster.enemies[..index].iter().any(|other| other.id == enemy.id) {
                anyhow::bail!("Duplicate enemy id '{}' in roster", enemy.id);
            }
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use battle_core::CombatStats;

    use super::*;

    #[test]
    fn enemy_without_stats_gets_defaults() {
        let roster = RosterLoader::parse(r#"(enemies: [(id: "blob", name: "Blob")])"#).unwrap();

        assert_eq!(roster.player, PlayerProfile::default());
        let blob = roster.enemy("blob").unwrap();
        assert_eq!(blob.stats, CombatStats::default());
        assert!(roster.enemy("missing").is_none());
    }

    #[test]
    fn partial_stats_fill_in_defaults() {
        let roster = RosterLoader::parse(
            r#"(enemies: [(id: "rat", name: "Rat", stats: (max_health: 40, attack: 6))])"#,
        )
        .unwrap();

        let stats = &roster.enemy("rat").unwrap().stats;
        assert_eq!(stats.max_health, 40);
        assert_eq!(stats.attack, 6);
        assert_eq!(stats.guard_damage_reduction, 0.85);
    }

    #[test]
    fn rejects_bad_ids() {
        assert!(RosterLoader::parse(r#"(enemies: [(id: "", name: "Ghost")])"#).is_err());
        assert!(
            RosterLoader::parse(r#"(enemies: [(id: "a", name: "A"), (id: "a", name: "B")])"#)
                .is_err()
        );
    }
}
