//! Player abilities that persist between battles.
use core::str::FromStr;

use battle_core::CombatStats;
use bitflags::bitflags;

use crate::error::AbilityError;

/// Percentage points added by [`Ability::FleetFootwork`].
pub const FLEET_FOOTWORK_EVASION: f32 = 15.0;
/// Percentage points added by [`Ability::CriticalStrike`].
pub const CRITICAL_STRIKE_CHANCE: f32 = 15.0;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum Ability {
    /// Attack twice in one round.
    Confidence,
    /// +15 evasion.
    FleetFootwork,
    PiercingStrike,
    /// +15 critical hit chance.
    CriticalStrike,
    /// Faster overworld movement.
    Rush,
}

impl Ability {
    pub const ALL: [Ability; 5] = [
        Ability::Confidence,
        Ability::FleetFootwork,
        Ability::PiercingStrike,
        Ability::CriticalStrike,
        Ability::Rush,
    ];

    pub const fn flag(self) -> AbilitySet {
        match self {
            Ability::Confidence => AbilitySet::CONFIDENCE,
            Ability::FleetFootwork => AbilitySet::FLEET_FOOTWORK,
            Ability::PiercingStrike => AbilitySet::PIERCING_STRIKE,
            Ability::CriticalStrike => AbilitySet::CRITICAL_STRIKE,
            Ability::Rush => AbilitySet::RUSH,
        }
    }
}

bitflags! {
    /// Set of granted abilities.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AbilitySet: u8 {
        const CONFIDENCE = 1 << 0;
        const FLEET_FOOTWORK = 1 << 1;
        const PIERCING_STRIKE = 1 << 2;
        const CRITICAL_STRIKE = 1 << 3;
        const RUSH = 1 << 4;
    }
}

/// Abilities granted so far plus herbs waiting to be handed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerAbilities {
    granted: AbilitySet,
    herbs_to_receive: u32,
}

impl PlayerAbilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, ability: Ability) {
        tracing::debug!("Granted ability {}", ability);
        self.granted.insert(ability.flag());
    }

    /// Grants an ability by its name (e.g. `"FleetFootwork"`).
    ///
    /// Unknown names change nothing.
    pub fn grant_by_name(&mut self, name: &str) -> Result<Ability, AbilityError> {
        let ability = Ability::from_str(name).map_err(|_| AbilityError::UnknownAbility {
            name: name.to_owned(),
        })?;
        self.grant(ability);
        Ok(ability)
    }

    pub fn has(&self, ability: Ability) -> bool {
        self.granted.contains(ability.flag())
    }

    pub fn granted(&self) -> impl Iterator<Item = Ability> + '_ {
        Ability::ALL.into_iter().filter(|ability| self.has(*ability))
    }

    /// Applies the stat abilities to `stats`, clamped to `[0, 100]`.
    pub fn apply_to(&self, stats: &mut CombatStats) {
        if self.has(Ability::FleetFootwork) {
            stats.add_evasion(FLEET_FOOTWORK_EVASION);
        }
        if self.has(Ability::CriticalStrike) {
            stats.add_critical_chance(CRITICAL_STRIKE_CHANCE);
        }
    }

    pub fn add_herbs(&mut self, amount: u32) {
        self.herbs_to_receive = self.herbs_to_receive.saturating_add(amount);
    }

    pub fn herbs_to_receive(&self) -> u32 {
        self.herbs_to_receive
    }

    /// Hands out the pending herbs, resetting the counter.
    pub fn take_herbs(&mut self) -> u32 {
        core::mem::take(&mut self.herbs_to_receive)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_by_name_parses_variant_names() {
        let mut abilities = PlayerAbilities::new();

        assert_eq!(
            abilities.grant_by_name("FleetFootwork"),
            Ok(Ability::FleetFootwork)
        );
        assert!(abilities.has(Ability::FleetFootwork));
        assert!(!abilities.has(Ability::Rush));
    }

    #[test]
    fn unknown_ability_changes_nothing() {
        let mut abilities = PlayerAbilities::new();

        let error = abilities.grant_by_name("Teleport").unwrap_err();

        assert_eq!(
            error,
            AbilityError::UnknownAbility {
                name: "Teleport".into()
            }
        );
        assert_eq!(abilities, PlayerAbilities::default());
    }

    #[test]
    fn stat_abilities_clamp_to_percent_range() {
        let mut abilities = PlayerAbilities::new();
        abilities.grant(Ability::FleetFootwork);
        abilities.grant(Ability::CriticalStrike);
        abilities.grant(Ability::Confidence);

        let mut stats = CombatStats {
            evasion_chance: 90.0,
            critical_hit_chance: 15.0,
            ..CombatStats::default()
        };
        abilities.apply_to(&mut stats);

        assert_eq!(stats.evasion_chance, 100.0);
        assert_eq!(stats.critical_hit_chance, 30.0);
        assert_eq!(
            abilities.granted().collect::<Vec<_>>(),
            vec![
                Ability::Confidence,
                Ability::FleetFootwork,
                Ability::CriticalStrike
            ]
        );
    }

    #[test]
    fn herbs_are_taken_once() {
        let mut abilities = PlayerAbilities::new();
        abilities.add_herbs(2);
        abilities.add_herbs(1);

        assert_eq!(abilities.take_herbs(), 3);
        assert_eq!(abilities.take_herbs(), 0);
    }
}
