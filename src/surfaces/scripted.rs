use std::collections::VecDeque;

use crate::action::{GameEvent, TurnAction};
use crate::card::Color;
use crate::state::GameStateView;
use crate::surface::Surface;

/// Surface that replays fixed queues of actions and color choices, logging
/// every event it receives. Intended for tests and replay harnesses;
/// running off the end of a script is a programming error.
#[derive(Default)]
pub struct ScriptedSurface {
    actions: VecDeque<TurnAction>,
    colors: VecDeque<Color>,
    pub events: Vec<GameEvent>,
}

impl ScriptedSurface {
    pub fn new(actions: impl IntoIterator<Item = TurnAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            colors: VecDeque::new(),
            events: Vec::new(),
        }
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }
}

impl Surface for ScriptedSurface {
    fn choose_action(&mut self, _state: &GameStateView) -> TurnAction {
        self.actions
            .pop_front()
            .expect("scripted surface ran out of actions")
    }

    fn choose_color(&mut self, _state: &GameStateView) -> Color {
        self.colors
            .pop_front()
            .expect("scripted surface ran out of colors")
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}
