use macroquad::prelude::*;

use crate::game::{FoodKind, Game};
use crate::grid::{Cell, CELL_FILL, SURFACE_SIZE, TILE_SIZE};

const GRID_LINE: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const SNAKE_FILL: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const FOOD_NORMAL: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const FOOD_SPECIAL: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.4);

// Repaints the whole surface from the current state. Pure function of the
// state, so repeated draws with an unchanged game produce identical frames.
pub fn draw(game: &Game) {
    clear_background(BLACK);

    let surface = SURFACE_SIZE as f32;
    for i in (0..SURFACE_SIZE).step_by(TILE_SIZE as usize) {
        let at = i as f32;
        draw_line(at, 0.0, at, surface, 1.0, GRID_LINE);
        draw_line(0.0, at, surface, at, 1.0, GRID_LINE);
    }

    for cell in &game.snake {
        fill_cell(*cell, SNAKE_FILL);
    }
    fill_cell(game.food.cell, food_color(game.food.kind));

    let prompt = if game.paused { "Resume" } else { "Pause" };
    let status = format!(
        "Score: {} | High Score: {} | Difficulty: {} | Press 'P' to {}",
        game.score,
        game.high_score,
        game.difficulty.label(),
        prompt
    );
    draw_text(&status, 10.0, 30.0, 16.0, WHITE);
    draw_text(
        "Arrows/WASD to move | 1-3 difficulty | P pause",
        10.0,
        surface - 8.0,
        16.0,
        GRAY,
    );

    if game.over {
        draw_rectangle(0.0, 0.0, surface, surface, OVERLAY);
        let title = "GAME OVER";
        let tm = measure_text(title, None, 36, 1.0);
        draw_text(title, (surface - tm.width) * 0.5, surface * 0.45, 36.0, FOOD_NORMAL);
        let hint = "R: Play Again";
        let hm = measure_text(hint, None, 22, 1.0);
        draw_text(hint, (surface - hm.width) * 0.5, surface * 0.45 + 32.0, 22.0, WHITE);
    }
}

fn fill_cell(cell: Cell, color: Color) {
    draw_rectangle(
        (cell.x * TILE_SIZE) as f32,
        (cell.y * TILE_SIZE) as f32,
        CELL_FILL as f32,
        CELL_FILL as f32,
        color,
    );
}

fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Normal => FOOD_NORMAL,
        FoodKind::Special => FOOD_SPECIAL,
    }
}
