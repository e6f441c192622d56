use serde::{Deserialize, Serialize};

/// Suit color of a non-wild card; wild cards carry no color until played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

/// The four colors in the order they are offered when a wild card is played.
pub const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

/// Face of a card: a digit, a colored action, or a wild.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Coarse grouping of card kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    Number,
    Special,
    Wild,
}

impl CardKind {
    #[inline]
    pub fn category(&self) -> Category {
        match self {
            CardKind::Number(_) => Category::Number,
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo => Category::Special,
            CardKind::Wild | CardKind::WildDrawFour => Category::Wild,
        }
    }
}

pub const MAX_NUMBER: u8 = 9;
pub const NUMBER_COPIES: usize = 2;
pub const SPECIAL_COPIES: usize = 2;
pub const WILD_COPIES: usize = 4;
pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 3;
pub const MAX_PLAYERS: usize = 10;

/// A single card. Immutable after construction except that a wild card is
/// assigned a color when played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    kind: CardKind,
    color: Option<Color>,
}

impl Card {
    /// Numbered card. The value must be a single digit.
    #[inline]
    pub fn number(color: Color, value: u8) -> Self {
        debug_assert!(value <= MAX_NUMBER);
        Self {
            kind: CardKind::Number(value),
            color: Some(color),
        }
    }

    /// Colored action card (Skip, Reverse or Draw Two).
    #[inline]
    pub fn special(color: Color, kind: CardKind) -> Self {
        debug_assert!(matches!(
            kind,
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo
        ));
        Self {
            kind,
            color: Some(color),
        }
    }

    /// Colorless wild card (Wild or Wild Draw Four).
    #[inline]
    pub fn wild(kind: CardKind) -> Self {
        debug_assert!(matches!(kind, CardKind::Wild | CardKind::WildDrawFour));
        Self { kind, color: None }
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self.kind, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Gives a wild card the color chosen when it is played.
    #[inline]
    pub fn assign_color(&mut self, color: Color) {
        debug_assert!(self.is_wild());
        self.color = Some(color);
    }
}

/// Builds the full 108-card deck in deterministic order (unshuffled).
///
/// Per color: one 0 and two of each 1-9, plus two of each action card.
/// Four Wild and four Wild Draw Four round out the deck.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &color in COLORS.iter() {
        deck.push(Card::number(color, 0));
        for value in 1..=MAX_NUMBER {
            for _ in 0..NUMBER_COPIES {
                deck.push(Card::number(color, value));
            }
        }
    }
    for &color in COLORS.iter() {
        for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
            for _ in 0..SPECIAL_COPIES {
                deck.push(Card::special(color, kind));
            }
        }
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::wild(CardKind::Wild));
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::wild(CardKind::WildDrawFour));
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_has_documented_size() {
        assert_eq!(full_deck().len(), DECK_SIZE);
    }

    #[test]
    fn full_deck_counts_by_category() {
        let deck = full_deck();
        let count_of = |category: Category| {
            deck.iter()
                .filter(|card| card.category() == category)
                .count()
        };
        assert_eq!(count_of(Category::Number), 76);
        assert_eq!(count_of(Category::Special), 24);
        assert_eq!(count_of(Category::Wild), 8);
    }

    #[test]
    fn full_deck_counts_per_color() {
        let deck = full_deck();
        for color in COLORS {
            let zeros = deck
                .iter()
                .filter(|c| c.color() == Some(color) && c.kind() == CardKind::Number(0))
                .count();
            assert_eq!(zeros, 1);
            for value in 1..=MAX_NUMBER {
                let copies = deck
                    .iter()
                    .filter(|c| c.color() == Some(color) && c.kind() == CardKind::Number(value))
                    .count();
                assert_eq!(copies, NUMBER_COPIES);
            }
            for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
                let copies = deck
                    .iter()
                    .filter(|c| c.color() == Some(color) && c.kind() == kind)
                    .count();
                assert_eq!(copies, SPECIAL_COPIES);
            }
        }
        for kind in [CardKind::Wild, CardKind::WildDrawFour] {
            let copies = deck.iter().filter(|c| c.kind() == kind).count();
            assert_eq!(copies, WILD_COPIES);
            assert!(
                deck.iter()
                    .filter(|c| c.kind() == kind)
                    .all(|c| c.color().is_none())
            );
        }
    }

    #[test]
    fn wild_card_takes_assigned_color() {
        let mut card = Card::wild(CardKind::Wild);
        assert_eq!(card.color(), None);
        card.assign_color(Color::Blue);
        assert_eq!(card.color(), Some(Color::Blue));
        assert_eq!(card.kind(), CardKind::Wild);
    }
}
