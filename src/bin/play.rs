use std::error::Error;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use uno::{Game, HumanSurface, RandomSurface, Surface};

const DEFAULT_SEED: u64 = 0xCA4D_5EED_CA4D_5EED;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play a round of Uno in the terminal.")]
struct Args {
    /// Seed for deck shuffling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop after the specified number of turns
    #[arg(long)]
    max_turns: Option<usize>,

    /// Player entries (2-10 total): human[:name] or random[:seed].
    /// Defaults to three hot-seat human players.
    players: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let specs = if args.players.is_empty() {
        vec![
            String::from("human:Player 0"),
            String::from("human:Player 1"),
            String::from("human:Player 2"),
        ]
    } else {
        args.players
    };

    let num_players = specs.len();
    let mut game = Game::builder(num_players)?.with_seed(args.seed).build()?;

    let mut surfaces: Vec<Box<dyn Surface>> = Vec::with_capacity(num_players);
    for (index, spec) in specs.iter().enumerate() {
        surfaces.push(create_surface(spec, index, args.seed)?);
    }
    let mut slots: Vec<&mut dyn Surface> = Vec::with_capacity(surfaces.len());
    for surface in surfaces.iter_mut() {
        slots.push(surface.as_mut());
    }

    println!("Starting a round of Uno with {num_players} players.");
    let mut turns = 0usize;
    let winner = loop {
        if let Some(limit) = args.max_turns {
            if turns >= limit {
                break None;
            }
        }
        game.play_turn(&mut slots)?;
        turns += 1;
        if let Some(winner) = game.winner() {
            break Some(winner);
        }
    };

    match winner {
        Some(winner) => println!("Player {winner} wins!"),
        None => println!("Turn limit reached. Stopping the round."),
    }
    Ok(())
}

fn create_surface(spec: &str, index: usize, seed: u64) -> Result<Box<dyn Surface>, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    if spec_lower.starts_with("human") {
        let name = spec
            .split_once(':')
            .map(|(_, name)| name.trim().to_string())
            .unwrap_or_else(|| format!("Player {index}"));
        Ok(Box::new(HumanSurface::new(name)))
    } else if spec_lower.starts_with("random") {
        let custom_seed = spec
            .split_once(':')
            .and_then(|(_, value)| value.parse::<u64>().ok())
            .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
        Ok(Box::new(RandomSurface::new(StdRng::seed_from_u64(
            custom_seed,
        ))))
    } else {
        Err(format!("unrecognized player spec: {spec}").into())
    }
}
