//! Combatants and their stat blocks.
//!
//! - [`CombatStats`]: static attributes (attack power, evasion, crit, guard)
//! - [`EnemyProfile`] / [`PlayerProfile`]: encounter-supplied configuration
//! - [`Combatant`]: stats plus mutable battle state (health, guard stance)

mod state;
mod stats;

pub use state::{Combatant, DamageTaken, HealthMeter};
pub use stats::{CombatStats, EnemyProfile, PlayerProfile};

/// Which side of the battle a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

