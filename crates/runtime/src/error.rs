//! Error types surfaced by the runtime.
//!
//! Each concern has its own enum; [`RuntimeError`] wraps them so callers can
//! bubble any failure up with `?`.
use battle_core::ActionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("inventory full: no room for {requested} x {item}")]
    InventoryFull { item: String, requested: u32 },

    #[error("unknown item '{id}'")]
    UnknownItem { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    #[error("no enemy with id '{id}' in the roster")]
    UnknownEnemy { id: String },

    #[error("enemy '{id}' has already been defeated")]
    AlreadyDefeated { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbilityError {
    #[error("unknown ability '{name}'")]
    UnknownAbility { name: String },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Encounter(#[from] EncounterError),

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error("player strategy produced {attempts} rejected actions in a row")]
    StrategyStalled { attempts: u32 },
}
