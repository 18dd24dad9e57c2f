//! Percentage roll checks.
//!
//! Every roll is a uniform value in `[0, 100)` compared against a 0–100 chance.

/// Check whether a special attack connects.
///
/// # Returns
///
/// `true` when `roll < accuracy`. A roll at or above the accuracy misses, so
/// 0% accuracy never connects and 100% always does.
pub fn special_attack_connects(accuracy: f32, roll: f32) -> bool {
    roll < accuracy
}

/// Check whether the defender evades an attack.
pub fn attack_evaded(evasion_chance: f32, roll: f32) -> bool {
    roll < evasion_chance
}

/// Check whether a landed hit is critical.
pub fn critical_hit(critical_hit_chance: f32, roll: f32) -> bool {
    roll < critical_hit_chance
}
