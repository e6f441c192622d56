use crate::card::Card;

/// Whether the candidate may legally be played on the current discard top.
///
/// A wild card is always playable. Otherwise the candidate must share the
/// top card's color or its exact face: numbers match numerically, action
/// cards match the same action regardless of color.
pub fn is_valid_play(candidate: &Card, top: &Card) -> bool {
    candidate.is_wild() || candidate.color() == top.color() || candidate.kind() == top.kind()
}
