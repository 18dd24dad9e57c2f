/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Player turns the special attack stays locked after being used.
    pub special_cooldown_turns: u32,
    /// Pause between enemy turn steps, in milliseconds. Cosmetic only.
    pub turn_delay_ms: u64,
    /// Start every battle at full player health instead of the carried value.
    pub reset_player_health: bool,
    /// Number of usable inventory slots (capped at [`Self::MAX_INVENTORY_SLOTS`]).
    pub inventory_slots: usize,
    /// Item awarded after a victory.
    pub loot_item: String,
    /// Quantity of [`Self::loot_item`] awarded per victory.
    pub loot_quantity: u32,
    /// Loot count that triggers the one-time milestone notice.
    pub loot_milestone: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPECIAL_COOLDOWN_TURNS: u32 = 3;
    pub const DEFAULT_TURN_DELAY_MS: u64 = 1000;
    pub const DEFAULT_LOOT_ITEM: &'static str = "whisker";
    pub const DEFAULT_LOOT_MILESTONE: u32 = 10;

    pub fn new() -> Self {
        Self {
            special_cooldown_turns: Self::DEFAULT_SPECIAL_COOLDOWN_TURNS,
            turn_delay_ms: Self::DEFAULT_TURN_DELAY_MS,
            reset_player_health: true,
            inventory_slots: Self::MAX_INVENTORY_SLOTS,
            loot_item: Self::DEFAULT_LOOT_ITEM.to_owned(),
            loot_quantity: 1,
            loot_milestone: Self::DEFAULT_LOOT_MILESTONE,
        }
    }

    /// Slot count actually available, never above the fixed capacity.
    pub fn effective_inventory_slots(&self) -> usize {
        self.inventory_slots.min(Self::MAX_INVENTORY_SLOTS)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
