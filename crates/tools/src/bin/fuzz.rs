use anyhow::Result;
use clap::Parser;
use game_core::{AdvanceStopReason, Direction, Game, GameConfig, Phase, WordList};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u32,
    #[arg(short, long, default_value_t = 1000)]
    units: u32,
}

const DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} units...", args.seed, args.units);
    let mut game = Game::new(args.seed, WordList::embedded(), GameConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(args.seed));

    let mut total_units = 0;
    while total_units < args.units {
        if rng.next_u64() % 2 == 0 {
            let dir = DIRECTIONS[rng.next_u64() as usize % DIRECTIONS.len()];
            game.set_direction(dir);
        }

        let result = game.advance(10);
        total_units += result.simulated_units;

        // Assert invariants
        let state = game.state();
        for seg in state.snake.segments() {
            assert!(state.board.in_bounds(*seg), "Invariant failed: segment out of bounds");
        }
        for pellet in state.pellets.values() {
            assert!(state.board.in_bounds(pellet.pos), "Invariant failed: pellet out of bounds");
            assert!(!state.snake.contains(pellet.pos), "Invariant failed: pellet under snake");
        }
        if state.phase == Phase::Running && state.pending.len() < 5 {
            let need = state.target.chars().nth(state.pending.len());
            if let Some(need) = need {
                assert!(
                    state.pellets.values().any(|p| p.letter == need),
                    "Invariant failed: needed letter absent"
                );
            }
        }

        match result.stop_reason {
            AdvanceStopReason::Finished(outcome) => {
                println!("Finished with outcome {:?} after {} units", outcome, total_units);
                break;
            }
            AdvanceStopReason::PausedAtBoundary => {
                // Not using manual pauses in fuzz
            }
            AdvanceStopReason::BudgetExhausted => {}
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
