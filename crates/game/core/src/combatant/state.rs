use crate::combat::guarded_damage;

use super::stats::{CombatStats, EnemyProfile, PlayerProfile};

/// Health pool tracked per combatant.
///
/// `current` never exceeds `maximum`; every mutator clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    pub current: u32,
    pub maximum: u32,
}

impl HealthMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, returning what was actually lost.
    fn drain(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    /// Adds up to `amount`, returning what was actually restored.
    fn fill(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }
}

/// Result of [`Combatant::take_damage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTaken {
    /// Damage after guard reduction; this is the figure shown to the player.
    pub amount: u32,
    /// Health actually removed (never more than the health that was left).
    pub health_lost: u32,
    /// Whether a guard stance absorbed part of this hit.
    pub guarded: bool,
}

/// A participant in a battle: stat block plus mutable battle state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    stats: CombatStats,
    health: HealthMeter,
    guarding: bool,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(name: impl Into<String>, stats: CombatStats) -> Self {
        let stats = stats.sanitized();
        Self {
            name: name.into(),
            health: HealthMeter::full(stats.max_health),
            stats,
            guarding: false,
        }
    }

    pub fn from_enemy(profile: &EnemyProfile) -> Self {
        Self::new(profile.name.clone(), profile.stats.clone())
    }

    pub fn from_player(profile: &PlayerProfile) -> Self {
        Self::new(profile.name.clone(), profile.stats.clone())
    }

    /// Replaces name and every stat from an encounter profile and refills health.
    pub fn configure(&mut self, profile: &EnemyProfile) {
        self.name.clone_from(&profile.name);
        self.stats = profile.stats.clone().sanitized();
        self.reset_health();
    }

    /// Applies a stat adjustment, re-sanitizing and re-clamping health afterwards.
    pub fn adjust_stats(&mut self, adjust: impl FnOnce(&mut CombatStats)) {
        adjust(&mut self.stats);
        self.stats = self.stats.clone().sanitized();
        self.health = HealthMeter::new(self.health.current, self.stats.max_health);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn health(&self) -> HealthMeter {
        self.health
    }

    pub fn current_health(&self) -> u32 {
        self.health.current
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    pub fn is_guarding(&self) -> bool {
        self.guarding
    }

    pub fn set_guarding(&mut self, guarding: bool) {
        self.guarding = guarding;
    }

    /// Applies one incoming hit.
    ///
    /// A raised guard scales the hit by `1 - guard_damage_reduction` (rounded)
    /// and is consumed by it, critical or not.
    pub fn take_damage(&mut self, amount: u32) -> DamageTaken {
        let guarded = self.guarding;
        let amount = if guarded {
            self.guarding = false;
            guarded_damage(amount, self.stats.guard_damage_reduction)
        } else {
            amount
        };

        let health_lost = self.health.drain(amount);
        DamageTaken {
            amount,
            health_lost,
            guarded,
        }
    }

    /// Restores health, returning the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health.fill(amount)
    }

    /// Refills health and drops any guard stance.
    pub fn reset_health(&mut self) {
        self.health = HealthMeter::full(self.stats.max_health);
        self.guarding = false;
    }

    /// Sets health to a carried-over value (clamped) and drops any guard stance.
    pub fn restore_health(&mut self, value: u32) {
        self.health.set(value);
        self.guarding = false;
    }
}
