use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Direction, GRID_SIZE};

// Chance that a spawned food is the 3-point kind
const SPECIAL_FOOD_CHANCE: f32 = 0.2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    // Tick period in seconds
    pub fn tick_period(self) -> f64 {
        match self {
            Difficulty::Easy => 0.150,
            Difficulty::Medium => 0.100,
            Difficulty::Hard => 0.070,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    Normal,
    Special,
}

impl FoodKind {
    pub fn points(self) -> u32 {
        match self {
            FoodKind::Normal => 1,
            FoodKind::Special => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

impl Food {
    fn initial() -> Self {
        Self { cell: Cell::new(15, 15), kind: FoodKind::Normal }
    }

    // Resamples until the food lands on a free cell. One draw decides the
    // kind, so point value and display tier cannot disagree.
    fn spawn(occupied: &[Cell]) -> Self {
        let kind = if macroquad::rand::gen_range(0.0f32, 1.0) < SPECIAL_FOOD_CHANCE {
            FoodKind::Special
        } else {
            FoodKind::Normal
        };
        loop {
            let cell = Cell::new(
                macroquad::rand::gen_range(0, GRID_SIZE),
                macroquad::rand::gen_range(0, GRID_SIZE),
            );
            if !occupied.contains(&cell) {
                return Self { cell, kind };
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub snake: Vec<Cell>, // head first, never empty
    pub direction: Direction,
    pending: Direction,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub paused: bool,
    pub over: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            snake: vec![Cell::new(10, 10)],
            direction: Direction::Right,
            pending: Direction::Right,
            food: Food::initial(),
            score: 0,
            high_score: 0,
            difficulty: Difficulty::Medium,
            paused: false,
            over: false,
        }
    }

    // Starts a fresh round; high score and difficulty carry over.
    pub fn reset(&mut self) {
        self.snake = vec![Cell::new(10, 10)];
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.food = Food::initial();
        self.score = 0;
        self.paused = false;
        self.over = false;
    }

    /// Period the tick clock should run at, `None` while nothing should fire.
    pub fn tick_period(&self) -> Option<f64> {
        if self.over || self.paused {
            None
        } else {
            Some(self.difficulty.tick_period())
        }
    }

    // A reversal would fold the snake onto its own neck, so it is ignored.
    // Repeated presses within one tick overwrite each other.
    pub fn steer(&mut self, direction: Direction) {
        if self.over {
            return;
        }
        if direction != self.direction.opposite() {
            self.pending = direction;
        }
    }

    pub fn toggle_pause(&mut self) {
        if !self.over {
            self.paused = !self.paused;
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if !self.over {
            self.difficulty = difficulty;
        }
    }

    /// Advance the round by one tick: move, resolve collisions, eat or shift.
    pub fn step(&mut self) {
        if self.over || self.paused {
            return;
        }

        self.direction = self.pending;
        let head = self.snake[0].shifted(self.direction);

        // Wall first, then the pre-move body. The cell the tail is about to
        // vacate still counts.
        if !head.in_bounds() || self.snake.contains(&head) {
            self.over = true;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            return;
        }

        self.snake.insert(0, head);
        if head == self.food.cell {
            self.score += self.food.kind.points();
            self.food = Food::spawn(&self.snake);
        } else {
            self.snake.pop();
        }
    }
}
