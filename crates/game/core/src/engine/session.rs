use crate::combatant::{Combatant, Side};
use crate::config::BattleConfig;

use super::{BattleEvent, BattlePhase};

/// One battle between the player and a single enemy.
///
/// The session is exclusively owned by its caller; both combatants are only
/// mutated through the session's actions.
#[derive(Clone, Debug)]
pub struct BattleSession {
    pub(super) player: Combatant,
    pub(super) enemy: Combatant,
    pub(super) phase: BattlePhase,
    /// Player turns left before the special attack is available again.
    pub(super) special_cooldown: u32,
    /// Cooldown applied after every special attack.
    pub(super) cooldown_turns: u32,
    /// Player turn counter, starting at 1.
    pub(super) turn: u32,
    /// Set once the enemy resolved its attack in the current enemy turn.
    pub(super) enemy_attacked: bool,
    result_reported: bool,
}

impl BattleSession {
    pub fn new(player: Combatant, enemy: Combatant, config: &BattleConfig) -> Self {
        Self {
            player,
            enemy,
            phase: BattlePhase::PlayerTurn,
            special_cooldown: 0,
            cooldown_turns: config.special_cooldown_turns,
            turn: 1,
            enemy_attacked: false,
            result_reported: false,
        }
    }

    /// Starts (or restarts) the battle.
    ///
    /// Both combatants are reset to full health; `player_health` then restores
    /// a carried-over value for the player, never below 1. Cooldowns are
    /// cleared and the player acts first.
    pub fn start(&mut self, player_health: Option<u32>) -> Vec<BattleEvent> {
        self.player.reset_health();
        self.enemy.reset_health();
        if let Some(health) = player_health {
            self.player.restore_health(health.max(1));
        }

        self.special_cooldown = 0;
        self.phase = BattlePhase::PlayerTurn;
        self.turn = 1;
        self.enemy_attacked = false;
        self.result_reported = false;

        vec![BattleEvent::Started {
            player: self.player.name().to_owned(),
            enemy: self.enemy.name().to_owned(),
        }]
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn special_cooldown(&self) -> u32 {
        self.special_cooldown
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::BattleEnd { player_won: true } => Some(Side::Player),
            BattlePhase::BattleEnd { player_won: false } => Some(Side::Enemy),
            _ => None,
        }
    }

    /// Reports the outcome to the caller exactly once.
    ///
    /// Returns `Some(player_won)` the first time it is called after the battle
    /// ended, `None` before the end and on every later call.
    pub fn take_result(&mut self) -> Option<bool> {
        match self.phase {
            BattlePhase::BattleEnd { player_won } if !self.result_reported => {
                self.result_reported = true;
                Some(player_won)
            }
            _ => None,
        }
    }

    /// Freezes the state machine with `winner` as victor.
    pub(super) fn end(&mut self, winner: Side) -> BattleEvent {
        self.phase = BattlePhase::BattleEnd {
            player_won: winner == Side::Player,
        };
        BattleEvent::Ended {
            winner,
            winner_name: self.combatant(winner).name().to_owned(),
        }
    }
}
