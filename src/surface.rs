use crate::action::{GameEvent, TurnAction};
use crate::card::Color;
use crate::state::GameStateView;

/// Interface between the engine and whatever supplies player decisions:
/// a human at a terminal, a bot, or a scripted test harness.
///
/// Implementations own their input discipline; `choose_action` and
/// `choose_color` must return a usable answer (re-prompting internally as
/// needed) and never fail past this boundary.
pub trait Surface {
    /// Asks the active player to draw or to pick a hand index to play.
    fn choose_action(&mut self, state: &GameStateView) -> TurnAction;

    /// Asks for the color a just-played wild card should take.
    fn choose_color(&mut self, state: &GameStateView) -> Color;

    /// Reports an engine event concerning this surface's player.
    fn notify(&mut self, _event: &GameEvent) {}
}
