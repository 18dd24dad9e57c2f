//! Terminal presentation of a running battle.
use std::io::Write;

use battle_core::{Combatant, Presenter};

const BAR_WIDTH: usize = 20;

/// Writes health bars and battle log lines to a text stream.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(error) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write battle output: {}", error);
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn update_health_bars(&mut self, player: &Combatant, enemy: &Combatant) {
        let line = format!("  {}   {}", health_bar(player), health_bar(enemy));
        self.write_line(&line);
    }

    fn show_battle_log(&mut self, message: &str) {
        self.write_line(message);
    }
}

fn health_bar(combatant: &Combatant) -> String {
    let max = combatant.max_health().max(1) as usize;
    let filled = (combatant.current_health() as usize * BAR_WIDTH).div_ceil(max);
    format!(
        "{} [{}{}] {}/{}",
        combatant.name(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        combatant.current_health(),
        combatant.max_health()
    )
}
