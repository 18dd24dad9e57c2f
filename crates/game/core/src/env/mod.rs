//! Traits describing the world around a battle.
//!
//! Oracles and collaborators are injected rather than looked up globally:
//! - [`RngOracle`] / [`RollSource`]: randomness for attack resolution
//! - [`Inventory`]: item counts and removal for the item action
//! - [`Presenter`] / [`EncounterListener`]: hosts notified of battle progress
mod hosts;
mod items;
mod rng;
mod scripted;

pub use hosts::{EncounterListener, Presenter};
pub use items::{Inventory, ItemDefinition, ItemKind, ItemStack};
pub use rng::{PcgRng, RngOracle, RollSource, SeededRolls, compute_seed};
pub use scripted::ScriptedRolls;
