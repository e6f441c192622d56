use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, HAND_SIZE, MAX_PLAYERS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(2..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 10",
            ));
        }
        Ok(Self {
            num_players,
            hand_size: HAND_SIZE,
        })
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub hand_size: usize,
    pub is_current: bool,
}

/// Game state snapshot handed to surfaces. Display-neutral: contains only
/// data, no formatting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub direction: i8,
    pub draw_pile_count: usize,
    pub discard_count: usize,
    pub discard_top: Option<Card>,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}
