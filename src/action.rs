use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Choice a surface returns when the active player is prompted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Take one card from the draw pile and keep the turn.
    Draw,
    /// Play the card at the given hand index onto the discard pile.
    Play(usize),
}

/// Engine notification delivered to the surface of the player it concerns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card entered the player's hand, voluntarily or as a penalty.
    Drew { player: PlayerId, card: Card },
    /// The player's card landed on the discard pile.
    Played { player: PlayerId, card: Card },
    /// The chosen card does not match the discard top; the player will be
    /// prompted again.
    Rejected { player: PlayerId, card: Card },
    /// The player holds a counter card and may play it instead of drawing
    /// the pending penalty.
    CounterAdvisory { player: PlayerId, count: usize },
}
