//! Stat blocks and encounter profiles.
//!
//! Percentages are expressed on a 0–100 scale, fractions on 0–1. Values coming
//! from content files are passed through [`CombatStats::sanitized`] before a
//! combatant uses them, so malformed data cannot break the health invariants.

/// Static combat attributes of a combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatStats {
    pub max_health: u32,
    /// Base attack power before variance and multipliers.
    pub attack: u32,
    /// Chance (0–100) to avoid an incoming attack entirely.
    pub evasion_chance: f32,
    /// Chance (0–100) that a landed hit is critical.
    pub critical_hit_chance: f32,
    pub critical_hit_multiplier: f32,
    /// Fractional spread around base damage (0.2 = ±20%).
    pub damage_variance: f32,
    pub special_attack_multiplier: f32,
    /// Chance (0–100) that a special attack connects, checked before evasion.
    pub special_attack_accuracy: f32,
    /// Fraction (0–1) of a hit absorbed while guarding.
    pub guard_damage_reduction: f32,
}

impl CombatStats {
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_ATTACK: u32 = 10;
    pub const DEFAULT_EVASION_CHANCE: f32 = 20.0;
    pub const DEFAULT_CRITICAL_HIT_CHANCE: f32 = 15.0;
    pub const DEFAULT_CRITICAL_HIT_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_DAMAGE_VARIANCE: f32 = 0.2;
    pub const DEFAULT_SPECIAL_ATTACK_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_SPECIAL_ATTACK_ACCURACY: f32 = 50.0;
    pub const DEFAULT_GUARD_DAMAGE_REDUCTION: f32 = 0.85;

    /// Clamps every attribute into its legal range.
    ///
    /// - percentages into `[0, 100]`
    /// - critical multiplier to at least `1`, special multiplier to at least `0`
    /// - variance and guard reduction into `[0, 1]`
    /// - maximum health to at least `1`
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            max_health: self.max_health.max(1),
            attack: self.attack,
            evasion_chance: clamp_percent(self.evasion_chance),
            critical_hit_chance: clamp_percent(self.critical_hit_chance),
            critical_hit_multiplier: finite_or(self.critical_hit_multiplier, 1.0).max(1.0),
            damage_variance: finite_or(self.damage_variance, 0.0).clamp(0.0, 1.0),
            special_attack_multiplier: finite_or(self.special_attack_multiplier, 0.0).max(0.0),
            special_attack_accuracy: clamp_percent(self.special_attack_accuracy),
            guard_damage_reduction: finite_or(self.guard_damage_reduction, 0.0).clamp(0.0, 1.0),
        }
    }

    /// Adds percentage points of evasion, staying within `[0, 100]`.
    pub fn add_evasion(&mut self, amount: f32) {
        self.evasion_chance = clamp_percent(self.evasion_chance + amount);
    }

    /// Adds percentage points of critical chance, staying within `[0, 100]`.
    pub fn add_critical_chance(&mut self, amount: f32) {
        self.critical_hit_chance = clamp_percent(self.critical_hit_chance + amount);
    }
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            attack: Self::DEFAULT_ATTACK,
            evasion_chance: Self::DEFAULT_EVASION_CHANCE,
            critical_hit_chance: Self::DEFAULT_CRITICAL_HIT_CHANCE,
            critical_hit_multiplier: Self::DEFAULT_CRITICAL_HIT_MULTIPLIER,
            damage_variance: Self::DEFAULT_DAMAGE_VARIANCE,
            special_attack_multiplier: Self::DEFAULT_SPECIAL_ATTACK_MULTIPLIER,
            special_attack_accuracy: Self::DEFAULT_SPECIAL_ATTACK_ACCURACY,
            guard_damage_reduction: Self::DEFAULT_GUARD_DAMAGE_REDUCTION,
        }
    }
}

fn clamp_percent(value: f32) -> f32 {
    finite_or(value, 0.0).clamp(0.0, 100.0)
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Enemy configuration supplied by an encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyProfile {
    /// Stable identifier used for defeat tracking.
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: CombatStats,
}

impl EnemyProfile {
    pub const PLACEHOLDER_ID: &'static str = "placeholder";
    pub const PLACEHOLDER_NAME: &'static str = "Enemy";

    pub fn new(id: impl Into<String>, name: impl Into<String>, stats: CombatStats) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
        }
    }

    /// Default-stat enemy used when an encounter carries no configuration.
    pub fn placeholder() -> Self {
        Self::new(
            Self::PLACEHOLDER_ID,
            Self::PLACEHOLDER_NAME,
            CombatStats::default(),
        )
    }
}

/// Player configuration carried from one battle to the next.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProfile {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: CombatStats,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, stats: CombatStats) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new("Player", CombatStats::default())
    }
}
