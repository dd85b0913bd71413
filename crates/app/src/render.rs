//! Rendering for the board and the guess panel.

use crate::ui_text::{buffer_text, stats_lines, status_text};
use core::{Game, LetterScore, Pos};
use macroquad::prelude::*;

const CELL: f32 = 32.0;
const MARGIN: f32 = 16.0;
const PANEL_GAP: f32 = 24.0;
const LINE_HEIGHT: f32 = 22.0;
const GRID_COLOR: Color = Color { r: 0.16, g: 0.16, b: 0.2, a: 1.0 };
const SNAKE_BODY: Color = Color { r: 0.2, g: 0.65, b: 0.3, a: 1.0 };
const SNAKE_HEAD: Color = Color { r: 0.35, g: 0.85, b: 0.45, a: 1.0 };
const SCORE_CORRECT: Color = Color { r: 0.33, g: 0.66, b: 0.33, a: 1.0 };
const SCORE_PRESENT: Color = Color { r: 0.78, g: 0.70, b: 0.25, a: 1.0 };
const SCORE_ABSENT: Color = Color { r: 0.35, g: 0.35, b: 0.38, a: 1.0 };

pub fn draw_frame(game: &Game, run_seed: u32) {
    clear_background(BLACK);
    draw_board(game);
    draw_guess_panel(game, run_seed);
    draw_status_line(game);
}

fn cell_origin(pos: Pos) -> (f32, f32) {
    (MARGIN + pos.x as f32 * CELL, MARGIN + pos.y as f32 * CELL)
}

fn draw_board(game: &Game) {
    let state = game.state();
    let board = state.board;

    for y in 0..board.rows {
        for x in 0..board.cols {
            let (px, py) = cell_origin(Pos { x, y });
            draw_rectangle_lines(px, py, CELL, CELL, 1.0, GRID_COLOR);
        }
    }

    for pellet in state.pellets.values() {
        let (px, py) = cell_origin(pellet.pos);
        let label = pellet.letter.to_string();
        draw_text(&label, px + CELL * 0.3, py + CELL * 0.72, CELL * 0.8, SKYBLUE);
    }

    for (i, seg) in state.snake.segments().iter().enumerate() {
        let (px, py) = cell_origin(*seg);
        let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        draw_rectangle(px + 2.0, py + 2.0, CELL - 4.0, CELL - 4.0, color);
    }
}

fn score_color(score: LetterScore) -> Color {
    match score {
        LetterScore::Correct => SCORE_CORRECT,
        LetterScore::Present => SCORE_PRESENT,
        LetterScore::Absent => SCORE_ABSENT,
    }
}

fn draw_guess_panel(game: &Game, run_seed: u32) {
    let state = game.state();
    let panel_x = MARGIN + state.board.cols as f32 * CELL + PANEL_GAP;
    let mut y = MARGIN + LINE_HEIGHT;

    draw_text("Guesses", panel_x, y, 24.0, WHITE);
    y += LINE_HEIGHT;

    for record in &state.guesses {
        let mut x = panel_x;
        for (letter, score) in record.word.chars().zip(record.result.iter()) {
            draw_rectangle(x, y - 16.0, 20.0, 20.0, score_color(*score));
            draw_text(&letter.to_string(), x + 4.0, y, 20.0, BLACK);
            x += 24.0;
        }
        y += LINE_HEIGHT;
    }

    y += LINE_HEIGHT;
    draw_text(&format!("Buffer: {}", buffer_text(&state.pending)), panel_x, y, 20.0, WHITE);

    y += LINE_HEIGHT * 2.0;
    for line in stats_lines(game, run_seed) {
        draw_text(&line, panel_x, y, 18.0, LIGHTGRAY);
        y += LINE_HEIGHT;
    }
}

fn draw_status_line(game: &Game) {
    let state = game.state();
    let y = MARGIN + state.board.rows as f32 * CELL + LINE_HEIGHT;
    draw_text(&status_text(game), MARGIN, y, 22.0, YELLOW);
}
