//! Item catalog loader.

use std::path::Path;

use battle_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// Looks up an item by its id.
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog, rejecting duplicate ids.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        for (index, item) in catalog.items.iter().enumerate() {
            if catalog.items[..index].iter().any(|other| other.id == item.id) {
                anyhow::bail!("Duplicate item id '{}' in item catalog", item.id);
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use battle_core::ItemKind;

    use super::*;

    #[test]
    fn omitted_fields_use_defaults() {
        let catalog = ItemLoader::parse(r#"(items: [(id: "pebble", name: "Pebble")])"#).unwrap();

        let pebble = catalog.get("pebble").unwrap();
        assert_eq!(pebble.kind, ItemKind::Generic);
        assert_eq!(pebble.max_stack, 1);
        assert!(!pebble.usable_in_battle);
        assert_eq!(pebble.heal_amount, 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = ItemLoader::parse(
            r#"(items: [(id: "herb", name: "Herb"), (id: "herb", name: "Other Herb")])"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("herb"));
    }
}
