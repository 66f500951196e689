use macroquad::prelude::*;

mod clock;
mod game;
mod grid;
mod render;

use clock::Clock;
use game::{Difficulty, Game};
use grid::Direction;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: grid::SURFACE_SIZE,
        window_height: grid::SURFACE_SIZE,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn handle_input(game: &mut Game) {
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        game.steer(Direction::Up);
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        game.steer(Direction::Down);
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        game.steer(Direction::Left);
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        game.steer(Direction::Right);
    }

    if is_key_pressed(KeyCode::P) {
        game.toggle_pause();
    }
    if is_key_pressed(KeyCode::Key1) {
        game.set_difficulty(Difficulty::Easy);
    }
    if is_key_pressed(KeyCode::Key2) {
        game.set_difficulty(Difficulty::Medium);
    }
    if is_key_pressed(KeyCode::Key3) {
        game.set_difficulty(Difficulty::Hard);
    }

    // Restart is only live on the game-over screen.
    if game.over && is_key_pressed(KeyCode::R) {
        game.reset();
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let mut game = Game::new();
    let mut clock = Clock::new();

    loop {
        handle_input(&mut game);

        let now = get_time();
        clock.sync(game.tick_period(), now);
        if clock.poll(now) {
            game.step();
        }

        render::draw(&game);
        next_frame().await;
    }
}
