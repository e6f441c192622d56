use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    /// Draw pile empty and the discard pile has no cards to recycle.
    /// Fatal to the round.
    #[error("draw pile is empty and the discard pile has no cards to reshuffle")]
    DeckExhausted,
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
