use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::TurnAction;
use crate::card::{COLORS, Color};
use crate::rules::is_valid_play;
use crate::state::GameStateView;
use crate::surface::Surface;

/// Baseline surface that plays a uniformly random legal card and draws
/// when it has none.
pub struct RandomSurface<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSurface<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Surface for RandomSurface<R> {
    fn choose_action(&mut self, state: &GameStateView) -> TurnAction {
        let playable: Vec<usize> = match state.discard_top {
            Some(top) => state
                .hand
                .iter()
                .enumerate()
                .filter(|(_, card)| is_valid_play(card, &top))
                .map(|(index, _)| index)
                .collect(),
            None => Vec::new(),
        };
        match playable.choose(&mut self.rng) {
            Some(&index) => TurnAction::Play(index),
            None => TurnAction::Draw,
        }
    }

    fn choose_color(&mut self, _state: &GameStateView) -> Color {
        *COLORS
            .choose(&mut self.rng)
            .expect("color list is non-empty")
    }
}
