//! Host-side collaborators notified by a battle.

use crate::combatant::Combatant;

/// Presentation layer (battle UI, terminal log, ...).
pub trait Presenter {
    /// Called after every state change that touched health.
    ///
    /// Events that leave both health values unchanged (taking a guard
    /// stance, the end of the battle) do not trigger a refresh.
    fn update_health_bars(&mut self, player: &Combatant, enemy: &Combatant);

    /// Shows one battle log line.
    fn show_battle_log(&mut self, message: &str);
}

/// Receives the single end-of-battle notification.
pub trait EncounterListener {
    fn end_encounter(&mut self, player_won: bool);
}
