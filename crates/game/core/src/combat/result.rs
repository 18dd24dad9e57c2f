//! Attack outcome types and attack resolution.

use crate::combatant::CombatStats;
use crate::env::RollSource;

use super::damage::{finalize_damage, roll_damage};
use super::hit::{attack_evaded, critical_hit, special_attack_connects};

/// Which kind of attack is being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackKind {
    Normal,
    /// Multiplied damage, gated by an accuracy roll before evasion.
    Special,
}

/// Outcome of a single attack resolution.
///
/// `hit` and `evaded` are never both true. Damage is zero unless `hit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub evaded: bool,
    pub hit: bool,
    pub critical_hit: bool,
    pub damage: u32,
}

impl AttackOutcome {
    /// The attack missed (failed accuracy or was evaded).
    pub const fn evaded() -> Self {
        Self {
            evaded: true,
            hit: false,
            critical_hit: false,
            damage: 0,
        }
    }

    pub const fn hit(damage: u32, critical_hit: bool) -> Self {
        Self {
            evaded: false,
            hit: true,
            critical_hit,
            damage,
        }
    }
}

/// Resolve one attack from `attacker` against `defender`.
///
/// Rolls are drawn in a fixed order so a scripted [`RollSource`] can replay
/// any outcome:
///
/// 1. special only: accuracy roll; `roll >= special_attack_accuracy` misses
/// 2. evasion roll; `roll < defender.evasion_chance` evades
/// 3. damage drawn uniformly from the variance window
/// 4. crit roll; `roll < critical_hit_chance` multiplies the damage
///
/// The result is rounded to the nearest integer. No combatant is mutated;
/// the caller applies the damage.
pub fn resolve_attack<R>(
    attacker: &CombatStats,
    defender: &CombatStats,
    kind: AttackKind,
    rolls: &mut R,
) -> AttackOutcome
where
    R: RollSource + ?Sized,
{
    // 1. Accuracy gate for special attacks precedes evasion
    if kind == AttackKind::Special
        && !special_attack_connects(attacker.special_attack_accuracy, rolls.percent())
    {
        return AttackOutcome::evaded();
    }

    // 2. Evasion
    if attack_evaded(defender.evasion_chance, rolls.percent()) {
        return AttackOutcome::evaded();
    }

    // 3. Damage with variance
    let mut damage = roll_damage(attacker, kind, rolls);

    // 4. Critical hit
    let critical = critical_hit(attacker.critical_hit_chance, rolls.percent());
    if critical {
        damage *= attacker.critical_hit_multiplier;
    }

    AttackOutcome::hit(finalize_damage(damage), critical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRolls;

    fn stats(attack: u32) -> CombatStats {
        CombatStats {
            attack,
            evasion_chance: 0.0,
            critical_hit_chance: 0.0,
            damage_variance: 0.0,
            ..CombatStats::default()
        }
    }

    #[test]
    fn plain_hit_deals_base_damage() {
        let mut rolls = ScriptedRolls::constant(50.0);
        let outcome = resolve_attack(&stats(10), &stats(10), AttackKind::Normal, &mut rolls);

        assert_eq!(outcome, AttackOutcome::hit(10, false));
    }

    #[test]
    fn full_evasion_always_evades() {
        let defender = CombatStats {
            evasion_chance: 100.0,
            ..stats(10)
        };
        let attacker = CombatStats {
            attack: 999,
            critical_hit_chance: 100.0,
            special_attack_accuracy: 100.0,
            ..stats(999)
        };

        for roll in [0.0, 42.0, 99.999] {
            let mut rolls = ScriptedRolls::constant(roll);
            for kind in [AttackKind::Normal, AttackKind::Special] {
                let outcome = resolve_attack(&attacker, &defender, kind, &mut rolls);
                assert!(outcome.evaded);
                assert!(!outcome.hit);
                assert_eq!(outcome.damage, 0);
            }
        }
    }

    #[test]
    fn guaranteed_crit_doubles_damage() {
        let attacker = CombatStats {
            critical_hit_chance: 100.0,
            critical_hit_multiplier: 2.0,
            ..stats(20)
        };
        let mut rolls = ScriptedRolls::constant(99.0);

        let outcome = resolve_attack(&attacker, &stats(10), AttackKind::Normal, &mut rolls);

        assert_eq!(outcome, AttackOutcome::hit(40, true));
    }

    #[test]
    fn accuracy_is_checked_before_evasion() {
        let attacker = CombatStats {
            special_attack_accuracy: 50.0,
            ..stats(10)
        };
        // Accuracy roll 75 misses; the evasion roll that would have landed is never drawn.
        let mut rolls = ScriptedRolls::new([75.0, 99.0, 0.0, 99.0]);

        let outcome = resolve_attack(&attacker, &stats(10), AttackKind::Special, &mut rolls);

        assert_eq!(outcome, AttackOutcome::evaded());
        assert_eq!(rolls.consumed(), 1);
    }

    #[test]
    fn special_attack_applies_multiplier() {
        let attacker = CombatStats {
            special_attack_accuracy: 100.0,
            special_attack_multiplier: 2.0,
            ..stats(10)
        };
        let mut rolls = ScriptedRolls::constant(10.0);

        let outcome = resolve_attack(&attacker, &stats(10), AttackKind::Special, &mut rolls);

        assert_eq!(outcome, AttackOutcome::hit(20, false));
    }

    #[test]
    fn variance_roll_picks_from_window() {
        let attacker = CombatStats {
            damage_variance: 0.2,
            ..stats(10)
        };
        // evasion, damage, crit
        let mut rolls = ScriptedRolls::new([50.0, 11.6, 50.0]);

        let outcome = resolve_attack(&attacker, &stats(10), AttackKind::Normal, &mut rolls);

        assert_eq!(outcome, AttackOutcome::hit(12, false));
    }

    #[test]
    fn never_hit_and_evaded_together() {
        let attacker = CombatStats {
            damage_variance: 0.3,
            critical_hit_chance: 40.0,
            special_attack_accuracy: 60.0,
            ..stats(15)
        };
        let defender = CombatStats {
            evasion_chance: 35.0,
            ..stats(10)
        };
        let mut rolls = crate::env::SeededRolls::new(7);

        for _ in 0..500 {
            for kind in [AttackKind::Normal, AttackKind::Special] {
                let outcome = resolve_attack(&attacker, &defender, kind, &mut rolls);
                assert!(outcome.hit != outcome.evaded);
                if outcome.evaded {
                    assert_eq!(outcome.damage, 0);
                    assert!(!outcome.critical_hit);
                }
            }
        }
    }
}
