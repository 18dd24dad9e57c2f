//! Deterministic battle rules shared by the runtime and offline tools.
//!
//! `battle-core` defines the canonical turn-based combat rules (combatants,
//! attack resolution, turn sequencing) and exposes pure APIs with no I/O.
//! All battle state mutation flows through [`engine::BattleSession`]; host
//! collaborators (inventory, presentation, encounter flow) plug in through the
//! traits in [`env`].
pub mod action;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;

pub use action::PlayerAction;
pub use combat::{AttackKind, AttackOutcome, resolve_attack};
pub use combatant::{
    CombatStats, Combatant, DamageTaken, EnemyProfile, HealthMeter, PlayerProfile, Side,
};
pub use config::BattleConfig;
pub use engine::{ActionError, BattleEvent, BattlePhase, BattleSession, TurnStep};
pub use env::{
    EncounterListener, Inventory, ItemDefinition, ItemKind, ItemStack, PcgRng, Presenter,
    RngOracle, RollSource, ScriptedRolls, SeededRolls, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
