//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`BattleConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battle config TOML: {}", e))?;

        if config.inventory_slots > BattleConfig::MAX_INVENTORY_SLOTS {
            anyhow::bail!(
                "inventory_slots = {} exceeds the maximum of {}",
                config.inventory_slots,
                BattleConfig::MAX_INVENTORY_SLOTS
            );
        }
        Ok(config)
    }
}
