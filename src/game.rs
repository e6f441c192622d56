use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{GameEvent, PlayerId, TurnAction};
use crate::card::{Card, CardKind, Color};
use crate::deck::Deck;
use crate::error::GameError;
use crate::rules::is_valid_play;
use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState};
use crate::surface::Surface;
use crate::turn::TurnOrder;

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(num_players)?;
        Ok(Self { num_players, seed })
    }
}

/// Builder that enables deterministic deck injection for tests and replays.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use the given cards verbatim as the draw pile instead of a shuffled
    /// full deck. The last card is drawn first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core game engine: hands, piles, turn order, and effect resolution.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    turn: TurnOrder,
    players: Vec<Vec<Card>>,
    deck: Deck,
    rng: StdRng,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.num_players)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut deck = match deck {
            Some(cards) => Deck::from_draw_pile(cards),
            None => Deck::shuffled(&mut rng),
        };

        if deck.draw_count() < settings.num_players * settings.hand_size + 1 {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal",
            ));
        }

        let mut players: Vec<Vec<Card>> = (0..settings.num_players)
            .map(|_| Vec::with_capacity(settings.hand_size))
            .collect();
        for _ in 0..settings.hand_size {
            for hand in players.iter_mut() {
                hand.push(deck.draw(&mut rng)?);
            }
        }
        let seed_card = deck.draw(&mut rng)?;
        deck.discard(seed_card);

        Ok(Game {
            turn: TurnOrder::new(settings.num_players),
            settings,
            status: GameStatus::Ongoing,
            players,
            deck,
            rng,
        })
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn.current()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        if perspective >= self.players.len() {
            return Err(GameError::InvalidPlayer(perspective));
        }
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(id, hand)| PlayerPublicState {
                id,
                hand_size: hand.len(),
                is_current: id == self.turn.current(),
            })
            .collect();
        Ok(GameStateView {
            settings: self.settings,
            status: self.status,
            self_player: perspective,
            current_player: self.turn.current(),
            direction: self.turn.direction(),
            draw_pile_count: self.deck.draw_count(),
            discard_count: self.deck.discard_count(),
            discard_top: self.deck.top().copied(),
            players,
            hand: self.players[perspective].clone(),
        })
    }

    /// Runs one full turn of the active player: prompts until a legal play
    /// lands on the discard pile (drawing keeps the turn), resolves the
    /// played card's effect, and advances the turn order.
    pub fn play_turn(&mut self, surfaces: &mut [&mut dyn Surface]) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if surfaces.len() != self.settings.num_players {
            return Err(GameError::InvalidConfiguration(
                "one surface per player is required",
            ));
        }
        let player = self.turn.current();
        loop {
            let view = self.state_view(player)?;
            match surfaces[player].choose_action(&view) {
                TurnAction::Draw => {
                    let card = self.deck.draw(&mut self.rng)?;
                    self.players[player].push(card);
                    surfaces[player].notify(&GameEvent::Drew { player, card });
                }
                TurnAction::Play(index) => {
                    let Some(card) = self.players[player].get(index).copied() else {
                        continue;
                    };
                    let legal = self
                        .deck
                        .top()
                        .is_some_and(|top| is_valid_play(&card, top));
                    if !legal {
                        surfaces[player].notify(&GameEvent::Rejected { player, card });
                        continue;
                    }
                    let card = self.players[player].remove(index);
                    self.deck.discard(card);
                    surfaces[player].notify(&GameEvent::Played { player, card });
                    let sequencer_moved = self.apply_card_effects(surfaces)?;
                    if !sequencer_moved {
                        self.turn.advance(1);
                    }
                    break;
                }
            }
        }
        if let Some(winner) = self.players.iter().position(|hand| hand.is_empty()) {
            self.status = GameStatus::Finished { winner };
        }
        Ok(())
    }

    /// Repeats turns until a hand empties; returns the winner's index.
    pub fn play_round(&mut self, surfaces: &mut [&mut dyn Surface]) -> Result<PlayerId, GameError> {
        loop {
            self.play_turn(surfaces)?;
            if let GameStatus::Finished { winner } = self.status {
                return Ok(winner);
            }
        }
    }

    /// Applies the consequence of the card just placed on the discard top.
    /// Returns true when the forced-draw flow already advanced the turn
    /// order, in which case the caller must not apply the normal one-step
    /// advance.
    fn apply_card_effects(&mut self, surfaces: &mut [&mut dyn Surface]) -> Result<bool, GameError> {
        let Some(top) = self.deck.top() else {
            return Ok(false);
        };
        match top.kind() {
            CardKind::Number(_) => Ok(false),
            CardKind::Reverse => {
                self.turn.flip();
                Ok(false)
            }
            CardKind::Skip => {
                self.turn.advance(1);
                Ok(false)
            }
            CardKind::DrawTwo => {
                self.forced_draw(2, surfaces)?;
                Ok(true)
            }
            CardKind::Wild => {
                let color = self.prompt_color(surfaces)?;
                if let Some(card) = self.deck.top_mut() {
                    card.assign_color(color);
                }
                Ok(false)
            }
            CardKind::WildDrawFour => {
                // Stacking heuristic: inherit the color of a Draw Two lying
                // directly beneath, otherwise ask the player.
                let inherited = match self.deck.beneath_top() {
                    Some(card) if card.kind() == CardKind::DrawTwo => card.color(),
                    _ => None,
                };
                let color = match inherited {
                    Some(color) => color,
                    None => self.prompt_color(surfaces)?,
                };
                if let Some(card) = self.deck.top_mut() {
                    card.assign_color(color);
                }
                self.forced_draw(4, surfaces)?;
                Ok(true)
            }
        }
    }

    /// Penalty flow for Draw Two and Wild Draw Four. Owns all turn-order
    /// movement for the turn: one net step when the target holds a counter
    /// card (the target acts next and keeps the choice), two net steps when
    /// the penalty is drawn (the target is skipped entirely).
    fn forced_draw(
        &mut self,
        count: usize,
        surfaces: &mut [&mut dyn Surface],
    ) -> Result<(), GameError> {
        self.turn.advance(1);
        let target = self.turn.current();
        let counter = if count == 2 {
            CardKind::DrawTwo
        } else {
            CardKind::WildDrawFour
        };
        if self.players[target].iter().any(|card| card.kind() == counter) {
            surfaces[target].notify(&GameEvent::CounterAdvisory {
                player: target,
                count,
            });
            return Ok(());
        }
        for _ in 0..count {
            let card = self.deck.draw(&mut self.rng)?;
            self.players[target].push(card);
            surfaces[target].notify(&GameEvent::Drew {
                player: target,
                card,
            });
        }
        self.turn.advance(1);
        Ok(())
    }

    fn prompt_color(&mut self, surfaces: &mut [&mut dyn Surface]) -> Result<Color, GameError> {
        let player = self.turn.current();
        let view = self.state_view(player)?;
        Ok(surfaces[player].choose_color(&view))
    }
}
