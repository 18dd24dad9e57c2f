//! Damage calculation.

use crate::combatant::CombatStats;
use crate::env::RollSource;

use super::result::AttackKind;

/// Base damage before variance.
///
/// # Formula
///
/// ```text
/// base = attack                               (normal)
/// base = attack × special_attack_multiplier   (special)
/// ```
pub fn base_damage(attacker: &CombatStats, kind: AttackKind) -> f32 {
    let attack = attacker.attack as f32;
    match kind {
        AttackKind::Normal => attack,
        AttackKind::Special => attack * attacker.special_attack_multiplier,
    }
}

/// Inclusive bounds of the variance window around `base`.
///
/// ```text
/// [base × (1 - variance), base × (1 + variance)]
/// ```
pub fn variance_bounds(base: f32, variance: f32) -> (f32, f32) {
    let spread = base * variance;
    (base - spread, base + spread)
}

/// Draw a damage value uniformly from the variance window.
pub fn roll_damage<R>(attacker: &CombatStats, kind: AttackKind, rolls: &mut R) -> f32
where
    R: RollSource + ?Sized,
{
    let base = base_damage(attacker, kind);
    let (min, max) = variance_bounds(base, attacker.damage_variance);
    rolls.between(min, max)
}

/// Round to the nearest integer (halves away from zero), never below zero.
pub fn finalize_damage(damage: f32) -> u32 {
    if damage.is_finite() {
        damage.round().max(0.0) as u32
    } else {
        0
    }
}

/// Damage that gets through a guard stance.
///
/// ```text
/// round(raw × (1 - guard_damage_reduction))
/// ```
pub fn guarded_damage(raw: u32, guard_damage_reduction: f32) -> u32 {
    finalize_damage(raw as f32 * (1.0 - guard_damage_reduction))
}
