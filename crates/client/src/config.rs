//! Client configuration from environment variables and command-line flags.
use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Settings read from the process environment (and `.env`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub content_dir: Option<PathBuf>,
    pub turn_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WHISKER_CONTENT_DIR` - Directory with `roster.ron`, `items.ron`, `battle.toml`
    ///   (default: embedded content)
    /// - `WHISKER_TURN_DELAY_MS` - Pause between enemy turn steps (default: from `battle.toml`)
    /// - `WHISKER_SEED` - Game seed for reproducible battles (default: random)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self {
            content_dir: read("WHISKER_CONTENT_DIR").map(PathBuf::from),
            ..Self::default()
        };

        if let Some(raw) = read("WHISKER_TURN_DELAY_MS") {
            match raw.trim().parse() {
                Ok(delay) => config.turn_delay_ms = Some(delay),
                Err(_) => tracing::warn!("Ignoring invalid WHISKER_TURN_DELAY_MS: {}", raw),
            }
        }
        if let Some(raw) = read("WHISKER_SEED") {
            match raw.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => tracing::warn!("Ignoring invalid WHISKER_SEED: {}", raw),
            }
        }

        config
    }

    /// Command-line flags take precedence over the environment.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(dir) = &args.content_dir {
            self.content_dir = Some(dir.clone());
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.fast {
            self.turn_delay_ms = Some(0);
        }
        self
    }
}

/// Whisker Wars battle runner
#[derive(Parser, Debug, Clone)]
#[command(name = "whisker-wars")]
#[command(about = "Fight automated Whisker Wars battles", long_about = None)]
#[command(version)]
pub struct Args {
    /// Roster id of the enemy to fight
    #[arg(short, long, default_value = "sewer_rat")]
    pub enemy: String,

    /// Game seed for reproducible battles
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of battles to fight in a row (stops after a defeat)
    #[arg(short, long, default_value_t = 1)]
    pub battles: u32,

    /// Skip the pauses between enemy turn steps
    #[arg(short, long)]
    pub fast: bool,

    /// Print a JSON session report instead of the battle log
    #[arg(long)]
    pub json: bool,

    /// Load content from this directory instead of the embedded data
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Grant an ability before the first battle (e.g. FleetFootwork)
    #[arg(long = "ability")]
    pub abilities: Vec<String>,

    /// Herbs handed to the player before the first battle
    #[arg(long, default_value_t = 0)]
    pub herbs: u32,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("WHISKER_CONTENT_DIR", "/srv/whisker"),
            ("WHISKER_TURN_DELAY_MS", "250"),
            ("WHISKER_SEED", "99"),
        ]));

        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/whisker")));
        assert_eq!(config.turn_delay_ms, Some(250));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn invalid_and_empty_values_are_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("WHISKER_CONTENT_DIR", "  "),
            ("WHISKER_TURN_DELAY_MS", "soon"),
        ]));

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn flags_override_environment() {
        let args = Args::parse_from(["whisker-wars", "--seed", "5", "--fast", "-b", "3"]);
        let config = ClientConfig::from_lookup(lookup(&[
            ("WHISKER_SEED", "99"),
            ("WHISKER_TURN_DELAY_MS", "250"),
        ]))
        .merge_args(&args);

        assert_eq!(config.seed, Some(5));
        assert_eq!(config.turn_delay_ms, Some(0));
        assert_eq!(args.battles, 3);
        assert_eq!(args.enemy, "sewer_rat");
    }
}
