//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Randomness is injected through [`crate::env::RollSource`]; nothing here
//! mutates a combatant.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (accuracy, evasion, damage, crit)
//! - `special_attack_connects` / `attack_evaded`: roll checks
//! - `roll_damage`: Base damage with variance
//! - `guarded_damage`: Guard stance reduction

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{base_damage, finalize_damage, guarded_damage, roll_damage, variance_bounds};
pub use hit::{attack_evaded, critical_hit, special_attack_connects};
pub use result::{AttackKind, AttackOutcome, resolve_attack};
