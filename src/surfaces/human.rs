use std::io::{self, Write};

use crate::action::{GameEvent, TurnAction};
use crate::card::{COLORS, Color};
use crate::render::{color_name, format_card, render_state};
use crate::state::GameStateView;
use crate::surface::Surface;

/// Interactive surface that queries a human via standard input.
pub struct HumanSurface {
    name: String,
}

impl HumanSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanSurface {
    fn default() -> Self {
        Self::new("Human")
    }
}

fn read_trimmed_line() -> Option<String> {
    if io::stdout().flush().is_err() {
        eprintln!("failed to flush stdout");
    }
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        eprintln!("failed to read input");
        return None;
    }
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        println!("Exiting game at user's request.");
        std::process::exit(0);
    }
    Some(trimmed.to_string())
}

impl Surface for HumanSurface {
    fn choose_action(&mut self, state: &GameStateView) -> TurnAction {
        println!(
            "\n=== {}'s turn (player {}) ===",
            self.name, state.self_player
        );
        println!("{}", render_state(state));
        let max_index = state.hand.len().saturating_sub(1);
        loop {
            print!("Choose a card to play (0-{max_index}) or -1 to draw ('q' to quit): ");
            let Some(trimmed) = read_trimmed_line() else {
                continue;
            };
            let Ok(choice) = trimmed.parse::<i64>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if choice == -1 {
                return TurnAction::Draw;
            }
            if choice >= 0 && (choice as usize) < state.hand.len() {
                return TurnAction::Play(choice as usize);
            }
            println!("Invalid input. Please choose a number between 0 and {max_index} or -1 to draw.");
        }
    }

    fn choose_color(&mut self, _state: &GameStateView) -> Color {
        println!("Choose a new color:");
        for (index, color) in COLORS.iter().enumerate() {
            println!("  [{index}] {}", color_name(*color));
        }
        loop {
            print!("Enter the number corresponding to your color choice: ");
            let Some(trimmed) = read_trimmed_line() else {
                continue;
            };
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(color) = COLORS.get(choice) {
                println!("You chose: {}", color_name(*color));
                return *color;
            }
            println!(
                "Invalid choice. Please enter a number between 0 and {}.",
                COLORS.len() - 1
            );
        }
    }

    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Drew { player, card } => {
                println!("Player {} draws: {}", player, format_card(*card));
            }
            GameEvent::Played { player, card } => {
                println!("Player {} played: {}", player, format_card(*card));
            }
            GameEvent::Rejected { .. } => {
                println!("Invalid card. You must play a valid card or draw a card.");
            }
            GameEvent::CounterAdvisory { player, count } => {
                println!(
                    "Player {player} has a counter card. They can play it or draw {count} cards."
                );
            }
        }
    }
}
