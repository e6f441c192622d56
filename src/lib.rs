//! Uno-style shedding card game engine for terminal play and scripted simulation.

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod render;
pub mod rules;
pub mod state;
pub mod surface;
pub mod surfaces;
pub mod turn;

pub use crate::action::{GameEvent, PlayerId, TurnAction};
pub use crate::card::{COLORS, Card, CardKind, Category, Color};
pub use crate::deck::Deck;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::render::{format_card, render_state};
pub use crate::rules::is_valid_play;
pub use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState};
pub use crate::surface::Surface;
pub use crate::surfaces::{HumanSurface, RandomSurface, ScriptedSurface};
pub use crate::turn::TurnOrder;
