//! Paced battle loop.
//!
//! [`BattleRunner`] drives one [`BattleSession`] from start to finish: it asks a
//! [`PlayerStrategy`] for actions, resolves them, waits between the steps of
//! the enemy turn, forwards every event to the presenter, and settles the
//! encounter (defeat record, loot, carried health) exactly once at the end.
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use battle_core::{
    BattleEvent, BattleSession, Combatant, EncounterListener, EnemyProfile, GameError, Inventory,
    ItemStack, PlayerAction, Presenter, SeededRolls, TurnStep,
};
use serde::Serialize;

use crate::context::GameContext;
use crate::error::{Result, RuntimeError};
use crate::loot::LootDrop;

/// Rejected actions tolerated in a row before the runner gives up.
pub const DEFAULT_MAX_REJECTIONS: u32 = 8;

/// Chooses the player's action each turn.
///
/// Implementations can read player input, replay a script, or play
/// automatically.
#[async_trait]
pub trait PlayerStrategy: Send {
    async fn choose_action(
        &mut self,
        session: &BattleSession,
        usable_items: &[ItemStack],
    ) -> PlayerAction;

    /// Called when the chosen action was rejected; the same turn is retried.
    fn on_rejected(&mut self, _action: &PlayerAction, _reason: &str) {}
}

/// Simple automatic play.
///
/// Heals when health drops below `heal_below` of maximum and a healing item is
/// held, uses the special attack whenever it is ready, attacks otherwise.
#[derive(Clone, Debug)]
pub struct AutoStrategy {
    heal_below: f32,
}

impl AutoStrategy {
    pub fn new(heal_below: f32) -> Self {
        Self {
            heal_below: heal_below.clamp(0.0, 1.0),
        }
    }
}

impl Default for AutoStrategy {
    fn default() -> Self {
        Self::new(0.35)
    }
}

#[async_trait]
impl PlayerStrategy for AutoStrategy {
    async fn choose_action(
        &mut self,
        session: &BattleSession,
        usable_items: &[ItemStack],
    ) -> PlayerAction {
        let player = session.player();
        let ratio = player.current_health() as f32 / player.max_health() as f32;

        if ratio < self.heal_below {
            let best_heal = usable_items
                .iter()
                .filter(|stack| stack.quantity > 0 && stack.item.heal_amount > 0)
                .max_by_key(|stack| stack.item.heal_amount);
            if let Some(stack) = best_heal {
                return PlayerAction::UseItem(stack.item.clone());
            }
        }

        if session.special_cooldown() == 0 {
            PlayerAction::SpecialAttack
        } else {
            PlayerAction::Attack
        }
    }
}

/// Plays a fixed list of actions, then repeats `fallback`.
#[derive(Clone, Debug)]
pub struct ScriptedStrategy {
    actions: VecDeque<PlayerAction>,
    fallback: PlayerAction,
}

impl ScriptedStrategy {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>, fallback: PlayerAction) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            fallback,
        }
    }
}

#[async_trait]
impl PlayerStrategy for ScriptedStrategy {
    async fn choose_action(
        &mut self,
        _session: &BattleSession,
        _usable_items: &[ItemStack],
    ) -> PlayerAction {
        self.actions
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Result of one finished battle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BattleSummary {
    pub enemy_id: String,
    pub enemy_name: String,
    pub player_won: bool,
    /// Player turns taken, including the last one.
    pub turns: u32,
    pub player_health: u32,
    pub enemy_health: u32,
    pub seed: u64,
    pub loot: Option<LootDrop>,
    pub log: Vec<String>,
}

/// Runs one battle against the encounter queued in a [`GameContext`].
pub struct BattleRunner<'a> {
    context: &'a mut GameContext,
    presenter: Option<&'a mut dyn Presenter>,
    turn_delay: Duration,
    max_rejections: u32,
}

impl<'a> BattleRunner<'a> {
    pub fn new(context: &'a mut GameContext) -> Self {
        let turn_delay = Duration::from_millis(context.config.turn_delay_ms);
        Self {
            context,
            presenter: None,
            turn_delay,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        }
    }

    pub fn presenter(mut self, presenter: &'a mut dyn Presenter) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Overrides the configured pause between enemy turn steps.
    pub fn turn_delay(mut self, turn_delay: Duration) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    pub fn max_rejections(mut self, max_rejections: u32) -> Self {
        self.max_rejections = max_rejections.max(1);
        self
    }

    /// Plays the battle to the end.
    ///
    /// Falls back to a placeholder enemy when no encounter is queued.
    pub async fn run(mut self, strategy: &mut dyn PlayerStrategy) -> Result<BattleSummary> {
        let (enemy, enemy_id) = self.take_enemy();
        let player = Combatant::from_player(&self.context.player_profile());
        let mut session = BattleSession::new(
            player,
            Combatant::from_enemy(&enemy),
            &self.context.config,
        );

        if self.presenter.is_none() {
            tracing::warn!("No presenter attached; battle log goes to traces only");
        }

        let carried = if self.context.config.reset_player_health {
            None
        } else {
            self.context.encounters.carried_player_health()
        };
        let seed = self.context.next_battle_seed();
        let mut rolls = SeededRolls::new(seed);
        let mut log = Vec::new();

        tracing::info!(
            "Battle started: {} vs {} (seed {})",
            session.player().name(),
            enemy.name,
            seed
        );
        let events = session.start(carried);
        self.present(&session, &events, &mut log);

        let mut rejections = 0;
        while !session.is_over() {
            let usable = self.context.inventory.battle_usable_items();
            let action = strategy.choose_action(&session, &usable).await;
            tracing::debug!(
                "Turn {}: {} chooses {}",
                session.turn(),
                session.player().name(),
                action.name()
            );

            let events = match session.perform(&action, &mut rolls, Some(&mut self.context.inventory))
            {
                Ok(events) => events,
                Err(error) => {
                    tracing::warn!(
                        "Action {} rejected [{}]: {}",
                        action.name(),
                        error.error_code(),
                        error
                    );
                    let reason = error.to_string();
                    self.show_log(&reason, &mut log);
                    strategy.on_rejected(&action, &reason);

                    rejections += 1;
                    if rejections >= self.max_rejections {
                        return Err(RuntimeError::StrategyStalled {
                            attempts: rejections,
                        });
                    }
                    continue;
                }
            };
            rejections = 0;
            self.present(&session, &events, &mut log);

            if !session.is_over() {
                self.run_enemy_turn(&mut session, &mut rolls, &mut log)
                    .await?;
            }
        }

        Ok(self.settle(&mut session, enemy, enemy_id, seed, log))
    }

    fn take_enemy(&mut self) -> (EnemyProfile, String) {
        match self.context.encounters.current_enemy() {
            Some(encounter) => (encounter.enemy.clone(), encounter.enemy_id.clone()),
            None => {
                tracing::warn!("No encounter queued; fighting a placeholder enemy");
                let enemy = EnemyProfile::placeholder();
                let id = enemy.id.clone();
                (enemy, id)
            }
        }
    }

    async fn run_enemy_turn(
        &mut self,
        session: &mut BattleSession,
        rolls: &mut SeededRolls,
        log: &mut Vec<String>,
    ) -> Result<()> {
        self.pace(TurnStep::EnemyTurnBegins).await;
        let events = session.enemy_attack(rolls)?;
        self.present(session, &events, log);

        self.pace(TurnStep::EnemyAttackResolved).await;
        if !session.is_over() {
            session.finish_enemy_turn()?;
        }
        Ok(())
    }

    async fn pace(&self, step: TurnStep) {
        tracing::trace!("Pacing at {:?}", step);
        if !self.turn_delay.is_zero() {
            tokio::time::sleep(self.turn_delay).await;
        }
    }

    /// Reports the result once: encounter record, carried health, loot.
    fn settle(
        &mut self,
        session: &mut BattleSession,
        enemy: EnemyProfile,
        enemy_id: String,
        seed: u64,
        mut log: Vec<String>,
    ) -> BattleSummary {
        let player_won = session.take_result().unwrap_or(false);
        tracing::info!(
            "Battle over after {} turns: {} (player won: {})",
            session.turn(),
            enemy.name,
            player_won
        );

        self.context.encounters.end_encounter(player_won);
        if session.player().is_alive() {
            self.context
                .encounters
                .store_player_health(session.player().current_health());
        } else {
            self.context.encounters.forget_player_health();
        }

        let loot = if player_won {
            Some(self.award_loot(&mut log))
        } else {
            None
        };

        BattleSummary {
            enemy_id,
            enemy_name: enemy.name,
            player_won,
            turns: session.turn(),
            player_health: session.player().current_health(),
            enemy_health: session.enemy().current_health(),
            seed,
            loot,
            log,
        }
    }

    fn award_loot(&mut self, log: &mut Vec<String>) -> LootDrop {
        let drop = self.context.award_loot();
        for notice in &drop.notices {
            self.show_log(notice, log);
        }
        drop
    }

    fn present(&mut self, session: &BattleSession, events: &[BattleEvent], log: &mut Vec<String>) {
        for event in events {
            if event.touches_health() {
                if let Some(presenter) = self.presenter.as_deref_mut() {
                    presenter.update_health_bars(session.player(), session.enemy());
                }
            }
            self.show_log(&event.to_string(), log);
        }
    }

    fn show_log(&mut self, line: &str, log: &mut Vec<String>) {
        tracing::debug!("{}", line);
        if let Some(presenter) = self.presenter.as_deref_mut() {
            presenter.show_battle_log(line);
        }
        log.push(line.to_owned());
    }
}
