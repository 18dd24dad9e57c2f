use std::time::Duration;

use battle_content::Content;
use battle_core::{CombatStats, Combatant, EnemyProfile, Inventory, PlayerAction, Presenter};
use runtime::{
    AutoStrategy, BattleRunner, GameContext, RuntimeError, ScriptedStrategy, loot::FIRST_DEFEAT_NOTICE,
};

/// Stats with every random element switched off.
fn steady(max_health: u32, attack: u32) -> CombatStats {
    CombatStats {
        max_health,
        attack,
        evasion_chance: 0.0,
        critical_hit_chance: 0.0,
        damage_variance: 0.0,
        special_attack_accuracy: 100.0,
        special_attack_multiplier: 2.0,
        ..CombatStats::default()
    }
}

fn context() -> GameContext {
    let mut content = Content::embedded().unwrap();
    content.roster.player.stats = steady(100, 10);
    content.roster.enemies = vec![
        EnemyProfile::new("sewer_rat", "Sewer Rat", steady(15, 5)),
        EnemyProfile::new("guard_dog", "Guard Dog", steady(500, 40)),
        EnemyProfile::new("dummy", "Training Dummy", steady(200, 1)),
    ];
    content.config.turn_delay_ms = 0;
    GameContext::new(content).unwrap().with_seed(42)
}

fn attack_forever() -> ScriptedStrategy {
    ScriptedStrategy::new([], PlayerAction::Attack)
}

#[derive(Default)]
struct RecordingPresenter {
    lines: Vec<String>,
    health: Vec<(u32, u32)>,
}

impl Presenter for RecordingPresenter {
    fn update_health_bars(&mut self, player: &Combatant, enemy: &Combatant) {
        self.health
            .push((player.current_health(), enemy.current_health()));
    }

    fn show_battle_log(&mut self, message: &str) {
        self.lines.push(message.to_owned());
    }
}

#[tokio::test]
async fn victory_records_defeat_and_awards_loot() {
    let mut context = context();
    context.start_encounter("sewer_rat", false).unwrap();

    let summary = BattleRunner::new(&mut context)
        .run(&mut attack_forever())
        .await
        .unwrap();

    assert!(summary.player_won);
    assert_eq!(summary.turns, 2);
    assert_eq!(summary.player_health, 95);
    assert_eq!(summary.enemy_health, 0);
    assert_eq!(summary.log.first().unwrap(), "Battle started! Whiskers vs Sewer Rat");
    assert!(summary.log.contains(&"Whiskers wins!".to_owned()));

    let loot = summary.loot.unwrap();
    assert_eq!((loot.quantity, loot.total), (1, 1));
    assert_eq!(loot.notices, vec![FIRST_DEFEAT_NOTICE.to_owned()]);
    assert_eq!(context.inventory.item_count("whisker"), 1);

    assert!(context.encounters.is_enemy_defeated("sewer_rat"));
    assert!(context.encounters.last_battle_won());
    assert_eq!(context.encounters.carried_player_health(), Some(95));
    assert!(context.start_encounter("sewer_rat", false).is_err());
}

#[tokio::test]
async fn first_victory_notice_survives_full_inventory() {
    let mut context = context();
    context.give_item("yarn", 100).unwrap();
    context.start_encounter("sewer_rat", false).unwrap();

    let summary = BattleRunner::new(&mut context)
        .run(&mut attack_forever())
        .await
        .unwrap();

    assert!(summary.player_won);
    assert!(summary.log.contains(&FIRST_DEFEAT_NOTICE.to_owned()));
    let loot = summary.loot.unwrap();
    assert_eq!((loot.quantity, loot.total), (0, 0));
    assert!(context.progress.first_defeat_shown());
    assert_eq!(context.inventory.item_count("whisker"), 0);
    assert!(context.encounters.is_enemy_defeated("sewer_rat"));
}

#[tokio::test]
async fn defeat_gives_no_loot() {
    let mut context = context();
    context.start_encounter("guard_dog", false).unwrap();

    let summary = BattleRunner::new(&mut context)
        .run(&mut attack_forever())
        .await
        .unwrap();

    assert!(!summary.player_won);
    assert_eq!(summary.turns, 3);
    assert_eq!(summary.player_health, 0);
    assert_eq!(summary.log.last().unwrap(), "Guard Dog wins!");
    assert!(summary.loot.is_none());
    assert_eq!(context.inventory.item_count("whisker"), 0);
    assert!(!context.encounters.is_enemy_defeated("guard_dog"));
    assert_eq!(context.encounters.carried_player_health(), None);
}

#[tokio::test]
async fn presenter_sees_every_line_and_health_change() {
    let mut context = context();
    context.start_encounter("sewer_rat", false).unwrap();
    let mut presenter = RecordingPresenter::default();

    let summary = BattleRunner::new(&mut context)
        .presenter(&mut presenter)
        .run(&mut attack_forever())
        .await
        .unwrap();

    assert_eq!(presenter.lines, summary.log);
    assert_eq!(
        presenter.health,
        vec![(100, 15), (100, 5), (95, 5), (95, 0)]
    );
}

#[tokio::test]
async fn rejected_special_retries_the_same_turn() {
    let mut context = context();
    context.start_encounter("dummy", false).unwrap();
    let mut strategy = ScriptedStrategy::new(
        [PlayerAction::SpecialAttack, PlayerAction::SpecialAttack],
        PlayerAction::Attack,
    );

    let summary = BattleRunner::new(&mut context)
        .run(&mut strategy)
        .await
        .unwrap();

    assert!(summary.player_won);
    assert!(
        summary
            .log
            .contains(&"special attack is on cooldown for 2 more turn(s)".to_owned())
    );
    // 20 from the special, then 18 attacks of 10.
    assert_eq!(summary.turns, 19);
    assert_eq!(summary.player_health, 82);
}

#[tokio::test]
async fn endless_rejections_stall_the_runner() {
    let mut context = context();
    context.start_encounter("sewer_rat", false).unwrap();
    let yarn = context.items.get("yarn").unwrap().clone();
    let mut strategy = ScriptedStrategy::new([], PlayerAction::UseItem(yarn));

    let error = BattleRunner::new(&mut context)
        .max_rejections(3)
        .run(&mut strategy)
        .await
        .unwrap_err();

    assert!(matches!(error, RuntimeError::StrategyStalled { attempts: 3 }));
    assert!(!context.encounters.is_enemy_defeated("sewer_rat"));
}

#[tokio::test]
async fn missing_encounter_fights_placeholder() {
    let mut context = context();

    let summary = BattleRunner::new(&mut context)
        .run(&mut AutoStrategy::default())
        .await
        .unwrap();

    assert_eq!(summary.enemy_id, EnemyProfile::PLACEHOLDER_ID);
    assert_eq!(summary.enemy_name, "Enemy");
}

#[tokio::test]
async fn auto_strategy_heals_from_inventory() {
    let mut context = context();
    context.config.reset_player_health = false;
    context.encounters.store_player_health(20);
    context.give_item("herb", 1).unwrap();
    context.start_encounter("sewer_rat", false).unwrap();

    let summary = BattleRunner::new(&mut context)
        .run(&mut AutoStrategy::default())
        .await
        .unwrap();

    assert!(summary.log.contains(&"Whiskers uses Herb and recovers 30 HP!".to_owned()));
    assert!(summary.player_won);
    assert_eq!(summary.turns, 2);
    assert_eq!(summary.player_health, 45);
    assert_eq!(context.inventory.item_count("herb"), 0);
}

#[tokio::test]
async fn carried_health_is_used_when_reset_is_off() {
    let mut context = context();
    context.config.reset_player_health = false;

    context.start_encounter("sewer_rat", true).unwrap();
    let first = BattleRunner::new(&mut context)
        .run(&mut attack_forever())
        .await
        .unwrap();
    context.start_encounter("sewer_rat", true).unwrap();
    let second = BattleRunner::new(&mut context)
        .run(&mut attack_forever())
        .await
        .unwrap();

    assert_eq!(first.player_health, 95);
    assert_eq!(second.player_health, 90);
    assert_eq!(context.encounters.carried_player_health(), Some(90));
}

#[tokio::test]
async fn milestone_notice_fires_on_tenth_whisker() {
    let mut context = context();
    let mut milestone_battles = Vec::new();

    for battle in 1..=12 {
        context.start_encounter("sewer_rat", true).unwrap();
        let summary = BattleRunner::new(&mut context)
            .run(&mut attack_forever())
            .await
            .unwrap();
        let loot = summary.loot.unwrap();
        if loot.notices.iter().any(|notice| notice.contains("10 Whiskers")) {
            milestone_battles.push(battle);
        }
    }

    assert_eq!(milestone_battles, vec![10]);
    assert_eq!(context.inventory.item_count("whisker"), 12);
}

#[tokio::test(start_paused = true)]
async fn enemy_turn_is_paced_by_turn_delay() {
    let mut context = context();
    context.start_encounter("sewer_rat", false).unwrap();
    let start = tokio::time::Instant::now();

    BattleRunner::new(&mut context)
        .turn_delay(Duration::from_millis(1000))
        .run(&mut attack_forever())
        .await
        .unwrap();

    // One enemy turn: a pause before and after its attack.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(3000), "{elapsed:?}");
}

#[tokio::test]
async fn same_seed_replays_same_battle() {
    let mut first = context();
    let mut second = context();
    for context in [&mut first, &mut second] {
        context.roster.player.stats = CombatStats::default();
        context.roster.enemies[2].stats = CombatStats {
            max_health: 80,
            ..CombatStats::default()
        };
    }

    first.start_encounter("dummy", false).unwrap();
    second.start_encounter("dummy", false).unwrap();
    let a = BattleRunner::new(&mut first)
        .run(&mut AutoStrategy::default())
        .await
        .unwrap();
    let b = BattleRunner::new(&mut second)
        .run(&mut AutoStrategy::default())
        .await
        .unwrap();

    assert_eq!(a, b);
}
