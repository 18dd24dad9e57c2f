//! Session orchestration around the battle engine.
//!
//! This crate owns everything that outlives a single battle and drives
//! battles in real time. Consumers build a [`GameContext`] from content, queue
//! an encounter, and hand both to a [`BattleRunner`].
//!
//! Modules are organized by responsibility:
//! - [`context`] is the dependency-injection root passed to every battle
//! - [`encounter`] tracks the queued enemy, defeats and carried health
//! - [`inventory`] is the slot-based [`battle_core::Inventory`] implementation
//! - [`abilities`] and [`loot`] hold progression between battles
//! - [`runner`] paces a battle with tokio and reports its summary
pub mod abilities;
pub mod context;
pub mod encounter;
pub mod error;
pub mod inventory;
pub mod loot;
pub mod runner;

pub use abilities::{Ability, AbilitySet, PlayerAbilities};
pub use context::GameContext;
pub use encounter::{Encounter, EncounterManager};
pub use error::{AbilityError, EncounterError, InventoryError, Result, RuntimeError};
pub use inventory::InventoryStore;
pub use loot::{LootDrop, LootTable, SessionProgress};
pub use runner::{AutoStrategy, BattleRunner, BattleSummary, PlayerStrategy, ScriptedStrategy};
