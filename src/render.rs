use std::fmt::Write;

use crate::card::{Card, CardKind, Color};
use crate::state::{GameStateView, GameStatus};

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Green => "Green",
        Color::Blue => "Blue",
        Color::Yellow => "Yellow",
    }
}

pub fn format_card(card: Card) -> String {
    let face = match card.kind() {
        CardKind::Number(value) => value.to_string(),
        CardKind::Skip => String::from("Skip"),
        CardKind::Reverse => String::from("Reverse"),
        CardKind::DrawTwo => String::from("Draw 2"),
        CardKind::Wild => String::from("Wild"),
        CardKind::WildDrawFour => String::from("Wild Draw 4"),
    };
    match card.color() {
        Some(color) => format!("{} {}", color_name(color), face),
        None => face,
    }
}

pub fn render_state(state: &GameStateView) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: Player {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Current player: {}{}",
        state.current_player,
        if state.current_player == state.self_player {
            " (You)"
        } else {
            ""
        }
    );
    let direction = if state.direction >= 0 {
        "clockwise"
    } else {
        "counter-clockwise"
    };
    let _ = writeln!(out, "Direction: {direction}");
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard pile: {}",
        state.draw_pile_count, state.discard_count
    );
    let top = state
        .discard_top
        .map(format_card)
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(out, "Top card: {top}");
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.id == state.self_player {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let _ = writeln!(out, "  Player {}{}{}", player.id, label_you, current_tag);
        if player.id == state.self_player {
            if state.hand.is_empty() {
                let _ = writeln!(out, "    Hand: (empty)");
            } else {
                let mut entries = Vec::with_capacity(state.hand.len());
                for (idx, card) in state.hand.iter().enumerate() {
                    entries.push(format!("{}:{}", idx, format_card(*card)));
                }
                let _ = writeln!(out, "    Hand: {}", entries.join("  "));
            }
        } else {
            let _ = writeln!(out, "    Hand size: {}", player.hand_size);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn format_card_covers_all_faces() {
        assert_eq!(format_card(Card::number(Color::Red, 5)), "Red 5");
        assert_eq!(
            format_card(Card::special(Color::Green, CardKind::DrawTwo)),
            "Green Draw 2"
        );
        assert_eq!(format_card(Card::wild(CardKind::WildDrawFour)), "Wild Draw 4");
        let mut painted = Card::wild(CardKind::Wild);
        painted.assign_color(Color::Blue);
        assert_eq!(format_card(painted), "Blue Wild");
    }

    #[test]
    fn render_includes_expected_phrases() {
        let game = GameBuilder::new(2).expect("builder").build().expect("game");
        let view = game.state_view(0).expect("state view");
        let text = render_state(&view);
        assert!(text.contains("Player 0 (You)"));
        assert!(text.contains("Top card:"));
        assert!(text.contains("Hand:"));
        assert!(text.contains("Direction: clockwise"));
    }
}
