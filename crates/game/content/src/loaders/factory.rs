//! Content factory for loading every data file at once.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::loaders::{
    ConfigLoader, ItemCatalog, ItemLoader, LoadResult, Roster, RosterLoader,
};

const EMBEDDED_ROSTER: &str = include_str!("../../data/roster.ron");
const EMBEDDED_ITEMS: &str = include_str!("../../data/items.ron");
const EMBEDDED_CONFIG: &str = include_str!("../../data/battle.toml");

/// Everything a game session needs from content files.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub roster: Roster,
    pub items: ItemCatalog,
    pub config: BattleConfig,
}

impl Content {
    /// Content compiled into the binary from `data/`.
    pub fn embedded() -> LoadResult<Self> {
        Ok(Self {
            roster: RosterLoader::parse(EMBEDDED_ROSTER)?,
            items: ItemLoader::parse(EMBEDDED_ITEMS)?,
            config: ConfigLoader::parse(EMBEDDED_CONFIG)?,
        })
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── items.ron
/// └── roster.ron
/// ```
///
/// A missing `battle.toml` falls back to [`BattleConfig::default`]; the RON
/// files are required.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("battle.toml");
        if !path.exists() {
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load player profile and enemies from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load every file, checking that the configured loot item exists.
    pub fn load_all(&self) -> LoadResult<Content> {
        let content = Content {
            roster: self.load_roster()?,
            items: self.load_items()?,
            config: self.load_config()?,
        };
        if content.items.get(&content.config.loot_item).is_none() {
            anyhow::bail!(
                "Loot item '{}' is not in the item catalog",
                content.config.loot_item
            );
        }
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
