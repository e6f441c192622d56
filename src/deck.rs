use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::GameError;

/// Owns the draw pile and the discard pile. The top of each pile is the end
/// of its vec.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Full 108-card deck, uniformly shuffled.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self::from_draw_pile(cards)
    }

    /// Uses the given cards verbatim as the draw pile. Deterministic setup
    /// for tests and replays.
    pub fn from_draw_pile(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    /// Pops the top card of the draw pile, reshuffling the discard pile
    /// into it first when empty.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Result<Card, GameError> {
        if let Some(card) = self.draw_pile.pop() {
            return Ok(card);
        }
        self.reshuffle(rng)?;
        self.draw_pile.pop().ok_or(GameError::DeckExhausted)
    }

    /// Keeps the top discard in place and turns the shuffled remainder into
    /// the new draw pile. Requires at least two discards.
    pub fn reshuffle(&mut self, rng: &mut impl Rng) -> Result<(), GameError> {
        if self.discard_pile.len() <= 1 {
            return Err(GameError::DeckExhausted);
        }
        let Some(top) = self.discard_pile.pop() else {
            return Err(GameError::DeckExhausted);
        };
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(rng);
        self.discard_pile.push(top);
        Ok(())
    }

    /// Places a played (or setup seed) card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Current play target.
    pub fn top(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Mutable discard top, used to paint a played wild card.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.discard_pile.last_mut()
    }

    /// Card directly under the discard top, if any.
    pub fn beneath_top(&self) -> Option<&Card> {
        let len = self.discard_pile.len();
        if len < 2 {
            return None;
        }
        self.discard_pile.get(len - 2)
    }

    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draw_prefers_existing_pile() -> Result<(), GameError> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::from_draw_pile(vec![
            Card::number(Color::Red, 1),
            Card::number(Color::Red, 2),
        ]);
        deck.discard(Card::number(Color::Blue, 9));
        assert_eq!(deck.draw(&mut rng)?, Card::number(Color::Red, 2));
        assert_eq!(deck.discard_count(), 1);
        Ok(())
    }

    #[test]
    fn reshuffle_keeps_top_and_recycles_rest() -> Result<(), GameError> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::from_draw_pile(Vec::new());
        deck.discard(Card::number(Color::Red, 5));
        deck.discard(Card::number(Color::Blue, 2));

        // Exactly two discards: one more draw succeeds, the top stays put.
        let drawn = deck.draw(&mut rng)?;
        assert_eq!(drawn, Card::number(Color::Red, 5));
        assert_eq!(deck.top(), Some(&Card::number(Color::Blue, 2)));
        assert_eq!(deck.draw_count(), 0);
        assert_eq!(deck.discard_count(), 1);
        Ok(())
    }

    #[test]
    fn reshuffle_with_single_discard_is_fatal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::from_draw_pile(Vec::new());
        deck.discard(Card::number(Color::Green, 3));
        assert!(matches!(deck.draw(&mut rng), Err(GameError::DeckExhausted)));
        // The lone discard is untouched by the failed attempt.
        assert_eq!(deck.top(), Some(&Card::number(Color::Green, 3)));
    }
}
