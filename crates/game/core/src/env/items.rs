/// Item definition shared by the inventory and the battle's item action.
///
/// # Stacking
///
/// Every item has a `max_stack` value:
/// - Healing items usually stack (herbs, fish)
/// - Unique key items use `max_stack = 1`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    /// Stable catalogue key (e.g. `"herb"`).
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default = "default_max_stack"))]
    pub max_stack: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ItemKind,
    /// Health restored when used in battle; only meaningful for healing items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heal_amount: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usable_in_battle: bool,
}

#[cfg(feature = "serde")]
fn default_max_stack() -> u32 {
    1
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            max_stack: 1,
            kind,
            heal_amount: 0,
            usable_in_battle: false,
        }
    }

    /// A stackable battle-usable healing item.
    pub fn healing(id: impl Into<String>, name: impl Into<String>, heal_amount: i32) -> Self {
        Self {
            heal_amount,
            usable_in_battle: true,
            max_stack: 99,
            ..Self::new(id, name, ItemKind::Healing)
        }
    }

    #[must_use]
    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack.max(1);
        self
    }

    /// Stack limit, never below one.
    pub fn stack_limit(&self) -> u32 {
        self.max_stack.max(1)
    }
}

/// Item category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Loot, keys and other items with no battle effect.
    #[default]
    Generic,
    /// Restores health.
    Healing,
}

/// An item together with the total quantity held.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: ItemDefinition,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: ItemDefinition, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

/// Inventory collaborator queried and mutated by the item action.
pub trait Inventory {
    /// Battle-usable items grouped by item with total quantity > 0.
    fn battle_usable_items(&self) -> Vec<ItemStack>;

    /// Total quantity of `item_id` across the inventory.
    fn item_count(&self, item_id: &str) -> u32;

    /// Removes `quantity` units of `item_id`.
    ///
    /// Returns `false` if fewer than `quantity` units were held; whatever was
    /// held is still removed in that case.
    fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool;
}
