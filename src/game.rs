use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{self, DeathReason};
use crate::config::GameConfig;
use crate::direction::{Direction, DirectionIntent, INITIAL_HEADING};
use crate::food::FoodPool;
use crate::grid::{Cell, GridSpace};
use crate::scheduler::{Scheduler, TickKind};
use crate::snake::{INITIAL_SNAKE_LENGTH, SnakeBody};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Final result handed to the restart/exit prompt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverSummary {
    pub score: u32,
    pub reason: DeathReason,
}

/// What a movement tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game is over; nothing changed.
    Ignored,
    Moved,
    Ate,
    /// This tick ended the game. Reported once per run.
    GameOver(GameOverSummary),
}

/// Read-only snapshot for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub grid: GridSpace,
    pub snake: &'a SnakeBody,
    pub food: &'a [Cell],
    pub score: u32,
    pub status: GameStatus,
    pub heading: Direction,
    pub death_reason: Option<DeathReason>,
}

/// Owns one play session: board state, lifecycle, score and tick timers.
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    grid: GridSpace,
    snake: SnakeBody,
    food: FoodPool,
    intent: DirectionIntent,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    scheduler: Scheduler,
    rng: StdRng,
}

impl GameController {
    /// Creates a game seeded from OS entropy.
    ///
    /// `config` must pass [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
        let grid = config.grid();
        let scheduler = Scheduler::new(config.movement_interval(), config.food_interval());

        let mut game = Self {
            grid,
            snake: initial_snake(&config, grid),
            food: FoodPool::new(config.food_limits()),
            intent: DirectionIntent::default(),
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            scheduler,
            rng,
            config,
        };
        game.food.spawn_initial_batch(&mut game.rng, game.grid, &game.snake);

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            food = game.food.len(),
            "game started"
        );
        game
    }

    /// Advances simulation by one movement tick.
    pub fn on_movement_tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Ignored;
        }

        let heading = self.intent.commit();
        self.snake.advance(heading);

        let head = self.snake.head();
        let ate = self.food.try_consume(head);
        if ate {
            self.snake.grow();
            self.score += 1;
            tracing::debug!(col = head.col, row = head.row, score = self.score, "food eaten");
        }

        if let Some(reason) = collision::check(&self.snake, self.grid) {
            return TickOutcome::GameOver(self.end(reason));
        }

        if ate { TickOutcome::Ate } else { TickOutcome::Moved }
    }

    /// Spawns one timed food item. Returns the new cell, if any.
    pub fn on_food_tick(&mut self) -> Option<Cell> {
        if self.status != GameStatus::Playing {
            return None;
        }

        let spawned = self.food.spawn_one(&mut self.rng, self.grid, &self.snake);
        match spawned {
            Some(cell) => tracing::debug!(col = cell.col, row = cell.row, "food spawned"),
            None => tracing::warn!(active = self.food.len(), "food spawn skipped, pool saturated"),
        }
        spawned
    }

    /// Runs every tick due at `now`, in deadline order.
    ///
    /// Returns the summary on the tick that ends the game.
    pub fn advance(&mut self, now: Instant) -> Option<GameOverSummary> {
        let mut game_over = None;

        for tick in self.scheduler.due(now) {
            match tick {
                TickKind::Movement => {
                    if let TickOutcome::GameOver(summary) = self.on_movement_tick() {
                        game_over = Some(summary);
                    }
                }
                TickKind::Food => {
                    let _ = self.on_food_tick();
                }
            }
        }

        game_over
    }

    /// Submits a heading for the next move. Reversals are ignored.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.intent.request_change(direction);
        }
    }

    /// Resets to a fresh game and re-enables the tick timers.
    pub fn restart(&mut self) {
        self.snake = initial_snake(&self.config, self.grid);
        self.intent.reset();
        self.score = 0;
        self.death_reason = None;
        self.food.spawn_initial_batch(&mut self.rng, self.grid, &self.snake);
        self.status = GameStatus::Playing;
        self.scheduler.start();

        tracing::info!(food = self.food.len(), "game restarted");
    }

    fn end(&mut self, reason: DeathReason) -> GameOverSummary {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.scheduler.stop();

        tracing::info!(score = self.score, ?reason, "game over");
        GameOverSummary {
            score: self.score,
            reason,
        }
    }

    /// Returns a read-only snapshot of the board.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            grid: self.grid,
            snake: &self.snake,
            food: self.food.cells(),
            score: self.score,
            status: self.status,
            heading: self.intent.committed(),
            death_reason: self.death_reason,
        }
    }

    /// Earliest instant a tick can fire, while the timers run.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.intent.committed()
    }

    #[must_use]
    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> &FoodPool {
        &self.food
    }

    /// Places food on `cell` for staging scenarios. Refuses cells held by
    /// food or the snake, and a saturated pool.
    pub fn place_food(&mut self, cell: Cell) -> bool {
        self.food.place(cell, &self.snake)
    }

    pub fn clear_food(&mut self) {
        self.food.clear();
    }

    /// Replaces the snake, e.g. to stage a collision.
    pub fn set_snake(&mut self, snake: SnakeBody) {
        self.snake = snake;
    }
}

fn initial_snake(config: &GameConfig, grid: GridSpace) -> SnakeBody {
    SnakeBody::new(
        config.start,
        INITIAL_HEADING,
        INITIAL_SNAKE_LENGTH,
        grid.capacity(),
    )
}
