//! Player actions accepted during the player's turn.

use crate::env::ItemDefinition;

/// One of the four player commands.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerAction {
    Attack,
    SpecialAttack,
    Defend,
    UseItem(ItemDefinition),
}

impl PlayerAction {
    /// Short name used in logs.
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
