//! Turn-based battle engine.
//!
//! [`BattleSession`] owns both combatants and is the only place battle state
//! is mutated. The session is a small state machine:
//!
//! ```text
//!            attack / special / defend / item
//! PlayerTurn ────────────────────────────────▶ EnemyTurn
//!     ▲                                           │
//!     └───────────── enemy attacks ───────────────┘
//!
//! either side at 0 HP ─▶ BattleEnd { player_won }   (terminal)
//! ```
//!
//! Player actions live in [`turns`]; session setup and queries in [`session`].
mod errors;
mod events;
mod session;
mod turns;

use core::fmt;

pub use errors::ActionError;
pub use events::BattleEvent;
pub use session::BattleSession;
pub use turns::TurnStep;

/// Current state of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    BattleEnd { player_won: bool },
}

impl BattlePhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerTurn => "player_turn",
            Self::EnemyTurn => "enemy_turn",
            Self::BattleEnd { .. } => "battle_end",
        }
    }

    pub const fn is_over(&self) -> bool {
        matches!(self, Self::BattleEnd { .. })
    }
}

impl fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
