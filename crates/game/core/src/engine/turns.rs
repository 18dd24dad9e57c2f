use crate::action::PlayerAction;
use crate::combat::{AttackKind, AttackOutcome, resolve_attack};
use crate::combatant::{Combatant, Side};
use crate::env::{Inventory, ItemDefinition, RollSource};

use super::{ActionError, BattleEvent, BattlePhase, BattleSession};

/// Suspension points of the automatic enemy turn.
///
/// Hosts use these to pace the enemy turn; the battle outcome never depends
/// on how long they wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnStep {
    EnemyTurnBegins,
    EnemyAttackResolved,
    EnemyTurnEnded,
}

/// Player actions and the enemy turn.
impl BattleSession {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.phase {
            BattlePhase::PlayerTurn => Ok(()),
            BattlePhase::BattleEnd { .. } => Err(ActionError::BattleOver),
            phase => Err(ActionError::NotYourTurn { phase }),
        }
    }

    /// Basic attack against the enemy.
    pub fn attack<R>(&mut self, rolls: &mut R) -> Result<Vec<BattleEvent>, ActionError>
    where
        R: RollSource + ?Sized,
    {
        self.ensure_player_turn()?;
        Ok(self.player_strike(AttackKind::Normal, rolls))
    }

    /// Special attack; puts the special on cooldown whether it lands or not.
    pub fn special_attack<R>(&mut self, rolls: &mut R) -> Result<Vec<BattleEvent>, ActionError>
    where
        R: RollSource + ?Sized,
    {
        self.ensure_player_turn()?;
        if self.special_cooldown > 0 {
            return Err(ActionError::SpecialOnCooldown {
                turns: self.special_cooldown,
            });
        }
        Ok(self.player_strike(AttackKind::Special, rolls))
    }

    /// Raises the player's guard for the next incoming hit.
    pub fn defend(&mut self) -> Result<Vec<BattleEvent>, ActionError> {
        self.ensure_player_turn()?;
        self.player.set_guarding(true);
        self.begin_enemy_turn();
        Ok(vec![BattleEvent::Guarding {
            name: self.player.name().to_owned(),
        }])
    }

    /// Heals the player with one unit of `item`.
    ///
    /// Rejected (turn not consumed) when the item is not battle-usable, no
    /// inventory is attached, none is held, or it heals nothing.
    pub fn use_item(
        &mut self,
        item: &ItemDefinition,
        inventory: Option<&mut (dyn Inventory + '_)>,
    ) -> Result<Vec<BattleEvent>, ActionError> {
        self.ensure_player_turn()?;

        if !item.usable_in_battle {
            return Err(ActionError::ItemNotUsable {
                item: item.name.clone(),
            });
        }
        let inventory = inventory.ok_or(ActionError::InventoryUnavailable)?;
        if inventory.item_count(&item.id) == 0 {
            return Err(ActionError::ItemEmpty {
                item: item.name.clone(),
            });
        }
        let heal_amount = u32::try_from(item.heal_amount)
            .ok()
            .filter(|amount| *amount > 0)
            .ok_or_else(|| ActionError::NoHealEffect {
                item: item.name.clone(),
            })?;

        if !inventory.remove_item(&item.id, 1) {
            return Err(ActionError::ItemEmpty {
                item: item.name.clone(),
            });
        }
        let healed = self.player.heal(heal_amount);
        self.begin_enemy_turn();

        Ok(vec![BattleEvent::ItemUsed {
            name: self.player.name().to_owned(),
            item: item.name.clone(),
            healed,
        }])
    }

    /// Dispatches any [`PlayerAction`].
    pub fn perform<R>(
        &mut self,
        action: &PlayerAction,
        rolls: &mut R,
        inventory: Option<&mut (dyn Inventory + '_)>,
    ) -> Result<Vec<BattleEvent>, ActionError>
    where
        R: RollSource + ?Sized,
    {
        match action {
            PlayerAction::Attack => self.attack(rolls),
            PlayerAction::SpecialAttack => self.special_attack(rolls),
            PlayerAction::Defend => self.defend(),
            PlayerAction::UseItem(item) => self.use_item(item, inventory),
        }
    }

    /// Resolves the enemy's attack for the current enemy turn.
    ///
    /// Ends the battle if the player falls; otherwise the turn stays with the
    /// enemy until [`Self::finish_enemy_turn`].
    pub fn enemy_attack<R>(&mut self, rolls: &mut R) -> Result<Vec<BattleEvent>, ActionError>
    where
        R: RollSource + ?Sized,
    {
        if self.phase != BattlePhase::EnemyTurn || self.enemy_attacked {
            return Err(ActionError::NotEnemyTurn { phase: self.phase });
        }

        let outcome = resolve_attack(
            self.enemy.stats(),
            self.player.stats(),
            AttackKind::Normal,
            rolls,
        );
        let mut events = vec![strike_event(
            Side::Enemy,
            &self.enemy,
            &mut self.player,
            AttackKind::Normal,
            outcome,
        )];

        if self.player.is_alive() {
            self.enemy_attacked = true;
        } else {
            events.push(self.end(Side::Enemy));
        }
        Ok(events)
    }

    /// Hands the turn back to the player, ticking the special cooldown.
    pub fn finish_enemy_turn(&mut self) -> Result<(), ActionError> {
        if self.phase != BattlePhase::EnemyTurn || !self.enemy_attacked {
            return Err(ActionError::NotEnemyTurn { phase: self.phase });
        }

        self.special_cooldown = self.special_cooldown.saturating_sub(1);
        self.phase = BattlePhase::PlayerTurn;
        self.enemy_attacked = false;
        self.turn += 1;
        Ok(())
    }

    /// Runs the whole enemy turn without pauses.
    pub fn run_enemy_turn<R>(&mut self, rolls: &mut R) -> Result<Vec<BattleEvent>, ActionError>
    where
        R: RollSource + ?Sized,
    {
        let events = self.enemy_attack(rolls)?;
        if !self.is_over() {
            self.finish_enemy_turn()?;
        }
        Ok(events)
    }

    /// Performs a player action and, if it passed the turn, the enemy turn.
    ///
    /// `on_step` is invoked at each enemy-turn suspension point, after the
    /// state for that step has been applied.
    pub fn act<R>(
        &mut self,
        action: &PlayerAction,
        rolls: &mut R,
        inventory: Option<&mut (dyn Inventory + '_)>,
        mut on_step: impl FnMut(TurnStep, &BattleSession),
    ) -> Result<Vec<BattleEvent>, ActionError>
    where
        R: RollSource + ?Sized,
    {
        let mut events = self.perform(action, rolls, inventory)?;
        if self.phase != BattlePhase::EnemyTurn {
            return Ok(events);
        }

        on_step(TurnStep::EnemyTurnBegins, self);
        events.extend(self.enemy_attack(rolls)?);
        on_step(TurnStep::EnemyAttackResolved, self);

        if !self.is_over() {
            self.finish_enemy_turn()?;
            on_step(TurnStep::EnemyTurnEnded, self);
        }
        Ok(events)
    }

    fn player_strike<R>(&mut self, kind: AttackKind, rolls: &mut R) -> Vec<BattleEvent>
    where
        R: RollSource + ?Sized,
    {
        let outcome = resolve_attack(self.player.stats(), self.enemy.stats(), kind, rolls);
        if kind == AttackKind::Special {
            self.special_cooldown = self.cooldown_turns;
        }

        let mut events = vec![strike_event(
            Side::Player,
            &self.player,
            &mut self.enemy,
            kind,
            outcome,
        )];

        if self.enemy.is_alive() {
            self.begin_enemy_turn();
        } else {
            events.push(self.end(Side::Player));
        }
        events
    }

    fn begin_enemy_turn(&mut self) {
        self.phase = BattlePhase::EnemyTurn;
        self.enemy_attacked = false;
    }
}

/// Applies a resolved attack to `defender` and describes it.
fn strike_event(
    side: Side,
    attacker: &Combatant,
    defender: &mut Combatant,
    kind: AttackKind,
    outcome: AttackOutcome,
) -> BattleEvent {
    if !outcome.hit {
        return BattleEvent::Missed {
            attacker: side,
            attacker_name: attacker.name().to_owned(),
            defender_name: defender.name().to_owned(),
            kind,
        };
    }

    let taken = defender.take_damage(outcome.damage);
    BattleEvent::Hit {
        attacker: side,
        attacker_name: attacker.name().to_owned(),
        defender_name: defender.name().to_owned(),
        kind,
        critical: outcome.critical_hit,
        damage: taken.amount,
        guarded: taken.guarded,
    }
}
