//! Battle log events.

use core::fmt;

use crate::combat::AttackKind;
use crate::combatant::Side;

/// Something that happened during a battle.
///
/// `Display` renders the line shown in the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Started {
        player: String,
        enemy: String,
    },
    Hit {
        attacker: Side,
        attacker_name: String,
        defender_name: String,
        kind: AttackKind,
        critical: bool,
        /// Damage after guard reduction.
        damage: u32,
        guarded: bool,
    },
    Missed {
        attacker: Side,
        attacker_name: String,
        defender_name: String,
        kind: AttackKind,
    },
    Guarding {
        name: String,
    },
    ItemUsed {
        name: String,
        item: String,
        healed: u32,
    },
    Ended {
        winner: Side,
        winner_name: String,
    },
}

impl BattleEvent {
    /// Whether this event changed anyone's health.
    pub fn touches_health(&self) -> bool {
        matches!(
            self,
            Self::Started { .. } | Self::Hit { .. } | Self::ItemUsed { .. }
        )
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { player, enemy } => write!(f, "Battle started! {player} vs {enemy}"),
            Self::Hit {
                attacker_name,
                defender_name,
                kind,
                critical,
                damage,
                guarded: true,
                ..
            } => {
                let opener = match (kind, critical) {
                    (AttackKind::Special, true) => "lands a CRITICAL SPECIAL ATTACK!",
                    (AttackKind::Special, false) => "uses SPECIAL ATTACK!",
                    (AttackKind::Normal, true) => "lands a CRITICAL HIT!",
                    (AttackKind::Normal, false) => "attacks!",
                };
                write!(
                    f,
                    "{attacker_name} {opener} {defender_name} guards and takes {damage} damage!"
                )
            }
            Self::Hit {
                attacker_name,
                kind,
                critical,
                damage,
                ..
            } => match (kind, critical) {
                (AttackKind::Special, true) => write!(
                    f,
                    "{attacker_name} lands a CRITICAL SPECIAL ATTACK for {damage} damage!"
                ),
                (AttackKind::Special, false) => {
                    write!(f, "{attacker_name} uses SPECIAL ATTACK for {damage} damage!")
                }
                (AttackKind::Normal, true) => {
                    write!(f, "{attacker_name} lands a CRITICAL HIT for {damage} damage!")
                }
                (AttackKind::Normal, false) => {
                    write!(f, "{attacker_name} attacks for {damage} damage!")
                }
            },
            Self::Missed {
                attacker_name,
                kind: AttackKind::Special,
                ..
            } => write!(f, "{attacker_name}'s special attack missed!"),
            Self::Missed { defender_name, .. } => {
                write!(f, "{defender_name} evaded the attack!")
            }
            Self::Guarding { name } => write!(f, "{name} takes a defensive stance!"),
            Self::ItemUsed { name, item, healed } => {
                write!(f, "{name} uses {item} and recovers {healed} HP!")
            }
            Self::Ended { winner_name, .. } => write!(f, "{winner_name} wins!"),
        }
    }
}
