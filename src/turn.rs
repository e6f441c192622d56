use serde::{Deserialize, Serialize};

use crate::action::PlayerId;

/// Tracks whose turn it is and which way play proceeds around the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnOrder {
    current: PlayerId,
    direction: i8,
    player_count: usize,
}

impl TurnOrder {
    /// Starts at player 0 moving forward.
    pub fn new(player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self {
            current: 0,
            direction: 1,
            player_count,
        }
    }

    #[inline]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// Moves the given number of steps in the current direction, wrapping
    /// to a non-negative index in both directions.
    pub fn advance(&mut self, steps: usize) {
        let count = self.player_count as i64;
        let shifted = self.current as i64 + self.direction as i64 * steps as i64;
        self.current = shifted.rem_euclid(count) as usize;
    }

    /// Reverses the direction of play.
    pub fn flip(&mut self) {
        self.direction = -self.direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_forward() {
        let mut order = TurnOrder::new(3);
        order.advance(1);
        order.advance(1);
        order.advance(1);
        assert_eq!(order.current(), 0);
    }

    #[test]
    fn advance_wraps_backward_to_last_player() {
        let mut order = TurnOrder::new(3);
        order.flip();
        order.advance(1);
        assert_eq!(order.current(), 2);
        order.advance(2);
        assert_eq!(order.current(), 0);
    }

    #[test]
    fn double_flip_restores_direction_without_moving() {
        let mut order = TurnOrder::new(4);
        order.advance(1);
        let before = order.current();
        order.flip();
        order.flip();
        assert_eq!(order.direction(), 1);
        assert_eq!(order.current(), before);
    }

    #[test]
    fn skip_advances_two_steps() {
        let mut order = TurnOrder::new(4);
        order.advance(2);
        assert_eq!(order.current(), 2);
    }
}
