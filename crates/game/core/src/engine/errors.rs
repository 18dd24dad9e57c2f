//! Errors surfaced by battle actions.

use crate::error::{ErrorSeverity, GameError};

use super::BattlePhase;

/// Why a battle action was rejected.
///
/// A rejected action never changes battle state and never consumes the turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("not your turn (battle is in {phase})")]
    NotYourTurn { phase: BattlePhase },

    #[error("enemy cannot act during {phase}")]
    NotEnemyTurn { phase: BattlePhase },

    #[error("the battle is already over")]
    BattleOver,

    #[error("special attack is on cooldown for {turns} more turn(s)")]
    SpecialOnCooldown { turns: u32 },

    #[error("{item} cannot be used in battle")]
    ItemNotUsable { item: String },

    #[error("no {item} left")]
    ItemEmpty { item: String },

    #[error("{item} has no healing effect")]
    NoHealEffect { item: String },

    #[error("no inventory is available")]
    InventoryUnavailable,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotYourTurn { .. } | Self::SpecialOnCooldown { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::BattleOver
            | Self::ItemNotUsable { .. }
            | Self::ItemEmpty { .. }
            | Self::NoHealEffect { .. } => ErrorSeverity::Validation,
            Self::NotEnemyTurn { .. } | Self::InventoryUnavailable => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotYourTurn { .. } => "NOT_YOUR_TURN",
            Self::NotEnemyTurn { .. } => "NOT_ENEMY_TURN",
            Self::BattleOver => "BATTLE_OVER",
            Self::SpecialOnCooldown { .. } => "SPECIAL_ON_COOLDOWN",
            Self::ItemNotUsable { .. } => "ITEM_NOT_USABLE",
            Self::ItemEmpty { .. } => "ITEM_EMPTY",
            Self::NoHealEffect { .. } => "NO_HEAL_EFFECT",
            Self::InventoryUnavailable => "INVENTORY_UNAVAILABLE",
        }
    }
}
