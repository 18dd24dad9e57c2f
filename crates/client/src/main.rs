//! Whisker Wars battle client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Content (embedded, or loaded from `WHISKER_CONTENT_DIR` / `--content-dir`)
//! 2. The session-wide [`runtime::GameContext`]
//! 3. A terminal presenter and an automatic player strategy
//!
//! It then fights one or more battles and prints the log, or a JSON report
//! with `--json`.
//!
//! # Examples
//!
//! ```bash
//! # One paced battle against the default enemy
//! cargo run -p whisker-client
//!
//! # Five quick battles against the guard dog, reproducible
//! cargo run -p whisker-client -- --enemy guard_dog --battles 5 --seed 7 --fast
//! ```

mod config;
mod presenter;

use std::io;

use anyhow::{Context, Result};
use battle_content::{Content, ContentFactory};
use clap::Parser;
use runtime::{AutoStrategy, BattleRunner, BattleSummary, GameContext};
use serde::Serialize;

use crate::config::{Args, ClientConfig};
use crate::presenter::TextPresenter;

/// Everything `--json` prints.
#[derive(Debug, Serialize)]
struct SessionReport {
    seed: u64,
    battles: Vec<BattleSummary>,
    inventory: Vec<(String, u32)>,
    defeated: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    setup_logging();

    let config = ClientConfig::from_env().merge_args(&args);
    let mut context = build_context(&config)?;

    for name in &args.abilities {
        if let Err(error) = context.abilities.grant_by_name(name) {
            tracing::warn!("{}", error);
        }
    }
    context.abilities.add_herbs(args.herbs);
    context.deliver_herbs()?;

    tracing::info!(
        "Starting {} battle(s) against {} (seed {})",
        args.battles,
        args.enemy,
        context.game_seed()
    );

    let mut battles = Vec::new();
    for round in 1..=args.battles.max(1) {
        context
            .start_encounter(&args.enemy, true)
            .with_context(|| format!("cannot start battle {round}"))?;

        let mut strategy = AutoStrategy::default();
        let summary = if args.json {
            BattleRunner::new(&mut context).run(&mut strategy).await?
        } else {
            let mut presenter = TextPresenter::new(io::stdout());
            BattleRunner::new(&mut context)
                .presenter(&mut presenter)
                .run(&mut strategy)
                .await?
        };

        let player_won = summary.player_won;
        battles.push(summary);
        if !player_won {
            tracing::info!("Player was defeated in battle {}; stopping", round);
            break;
        }
    }

    if args.json {
        let report = SessionReport {
            seed: context.game_seed(),
            battles,
            inventory: context
                .inventory
                .stacks()
                .into_iter()
                .map(|stack| (stack.item.id, stack.quantity))
                .collect(),
            defeated: context
                .encounters
                .defeated_enemies()
                .map(str::to_owned)
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let wins = battles.iter().filter(|summary| summary.player_won).count();
        println!();
        println!("Won {wins} of {} battle(s).", battles.len());
        for stack in context.inventory.stacks() {
            println!("  {} x{}", stack.item.name, stack.quantity);
        }
    }

    Ok(())
}

fn build_context(config: &ClientConfig) -> Result<GameContext> {
    let mut content = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_all()
            .with_context(|| format!("failed to load content from {}", dir.display()))?,
        None => Content::embedded().context("embedded content is invalid")?,
    };

    if let Some(delay) = config.turn_delay_ms {
        content.config.turn_delay_ms = delay;
    }

    let context = GameContext::new(content)?;
    Ok(match config.seed {
        Some(seed) => context.with_seed(seed),
        None => context,
    })
}

/// Logs go to stderr so stdout stays clean for the battle log and `--json`.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
