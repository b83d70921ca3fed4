use crate::session_rng::SessionRng;
use crate::{debug, log};
use super::settings::{SnakeSessionSettings, DEFAULT_INITIAL_LENGTH};
use super::snake::Snake;
use super::types::{DeathReason, Direction, FieldSize, Point, TickOutcome};

const START_DIRECTION: Direction = Direction::West;
const RANDOM_APPLE_ATTEMPTS: usize = 1000;

/// Where the apple is parked when the snake covers every cell of the field.
pub const OFF_FIELD_APPLE: Point = Point { x: -1, y: -1 };

/// A single-player snake game. Driven by `tick`, steered by
/// `request_direction`; a death restarts the same session in place.
pub struct SnakeGameState {
    snake: Snake,
    apple: Point,
    field_size: FieldSize,
    initial_length: usize,
    score: u32,
    paused: bool,
    auto_mode: bool,
    direction_consumed: bool,
    tick_count: u64,
    rng: SessionRng,
}

impl SnakeGameState {
    /// `initial_length` is clamped to the number of cells in the field.
    pub fn new(field_size: FieldSize, initial_length: usize, rng: SessionRng) -> Self {
        let max_length = usize::try_from(field_size.cell_count()).unwrap_or(usize::MAX);
        let initial_length = initial_length.clamp(1, max_length);
        let mut state = Self {
            snake: Snake::new(field_size.center(), initial_length, START_DIRECTION),
            apple: OFF_FIELD_APPLE,
            field_size,
            initial_length,
            score: 0,
            paused: false,
            auto_mode: false,
            direction_consumed: false,
            tick_count: 0,
            rng,
        };
        state.start_game();
        state
    }

    pub fn new_with_dimensions(width: u32, height: u32) -> Self {
        Self::new(
            FieldSize::new(width, height),
            DEFAULT_INITIAL_LENGTH,
            SessionRng::from_random(),
        )
    }

    pub fn with_settings(settings: &SnakeSessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::new(settings.field_size, settings.initial_length, rng)
    }

    /// Puts a fresh snake in the middle of the field, zeroes the score and
    /// places a new apple. Pause and auto flags are left as they are.
    pub fn start_game(&mut self) {
        self.snake = Snake::new(self.field_size.center(), self.initial_length, START_DIRECTION);
        self.score = 0;
        self.tick_count = 0;
        self.relocate_apple();
        debug!(
            "Game started on {}x{} field, apple at ({}, {})",
            self.field_size.width(),
            self.field_size.height(),
            self.apple.x,
            self.apple.y
        );
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = if self.paused {
            TickOutcome::Paused
        } else {
            self.advance()
        };
        self.direction_consumed = false;
        outcome
    }

    fn advance(&mut self) -> TickOutcome {
        self.snake.move_forward();
        self.tick_count += 1;

        let mut outcome = TickOutcome::Moved;

        let head = self.snake.head();
        if head == self.apple {
            self.snake.eat_apple();
            self.relocate_apple();
            self.score += 1;
            outcome = TickOutcome::AteApple { score: self.score };
            debug!("Ate apple at ({}, {}). Score: {}", head.x, head.y, self.score);
        }

        if let Some(reason) = self.check_collision() {
            let final_score = self.score;
            log!(
                "Snake died ({:?}) at ({}, {}) after {} ticks. Score: {}",
                reason,
                head.x,
                head.y,
                self.tick_count,
                final_score
            );
            self.start_game();
            return TickOutcome::Died {
                reason,
                final_score,
            };
        }

        outcome
    }

    fn check_collision(&self) -> Option<DeathReason> {
        if self.snake.head_overlaps_body() {
            return Some(DeathReason::SelfCollision);
        }
        if !self.field_size.contains(self.snake.head()) {
            return Some(DeathReason::WallCollision);
        }
        None
    }

    /// Draws random cells until one is free of the snake. Falls back to a
    /// uniform pick among the free cells when the field is crowded.
    fn relocate_apple(&mut self) {
        for _ in 0..RANDOM_APPLE_ATTEMPTS {
            let candidate = self.random_cell();
            if !self.snake.occupies(candidate) {
                self.apple = candidate;
                return;
            }
        }

        let free_cells: Vec<Point> = self
            .field_size
            .cells()
            .filter(|&cell| !self.snake.occupies(cell))
            .collect();

        self.apple = if free_cells.is_empty() {
            OFF_FIELD_APPLE
        } else {
            free_cells[self.rng.random_range(0..free_cells.len())]
        };
    }

    fn random_cell(&mut self) -> Point {
        let x = self.rng.random_range(0..self.field_size.width());
        let y = self.rng.random_range(0..self.field_size.height());
        Point::new(x as i32, y as i32)
    }

    /// At most one request per tick reaches the snake; the rest, and any made
    /// while paused, are dropped.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.direction_consumed || self.paused {
            return;
        }
        self.snake.change_direction(direction);
        self.direction_consumed = true;
    }

    pub fn toggle_auto_mode(&mut self) {
        self.auto_mode = !self.auto_mode;
        log!("Auto mode {}", if self.auto_mode { "on" } else { "off" });
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_length(&self) -> usize {
        self.snake.len()
    }

    pub fn body_cell_at(&self, index: usize) -> Option<Point> {
        self.snake.cell_at(index)
    }

    pub fn apple_cell(&self) -> Point {
        self.apple
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    /// Ticks advanced since the current game started.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
