use app::frame_input::capture_frame_input;
use app::render::draw_frame;
use app::seed::session_seed;
use core::{Game, GameConfig, Phase, WordList};
use macroquad::prelude::{get_time, next_frame};

#[macroquad::main("Word Snake")]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let run_seed = match session_seed(&args) {
        Ok(seed) => seed,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };
    let mut game = Game::new(run_seed, WordList::embedded(), GameConfig::default());

    loop {
        let input = capture_frame_input();

        if input.new_game {
            game.new_game();
        }
        if let Some(dir) = input.direction {
            game.set_direction(dir);
        }
        if input.toggle_pause {
            match game.state().phase {
                Phase::Running => {
                    let _ = game.pause();
                }
                Phase::Paused => {
                    let _ = game.resume();
                }
                _ => {}
            }
        }

        game.tick(get_time() * 1000.0);
        draw_frame(&game, run_seed);
        next_frame().await
    }
}
