use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::audio::{AudioCue, AudioSink};
use crate::config::{GameConfig, GridSize, POINTS_PER_FOOD};
use crate::error::ConfigError;
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::rules::{MoveOutcome, evaluate_move};
use crate::score::HighScoreStore;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Fresh session waiting for the first direction key.
    NotStarted,
    Running,
    Paused,
    Over,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell and no food can be placed.
    BoardFull,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// Not running; nothing moved.
    Idle,
    Moved,
    Ate,
    Ended(EndReason),
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Snake cells, tail first and head last.
    pub snake_cells: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub started: bool,
    pub paused: bool,
    pub over: bool,
    pub end_reason: Option<EndReason>,
    pub grid: GridSize,
    pub tick_interval_ms: u64,
}

/// Complete mutable game state for one session, plus its collaborators.
///
/// The game never sleeps or schedules anything itself: the driver calls
/// [`Game::tick`] every [`Game::tick_interval`] and feeds inputs in between.
pub struct Game<A: AudioSink, S: HighScoreStore> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u32,
    high_score: u32,
    tick_interval_ms: u64,
    status: GameStatus,
    started: bool,
    end_reason: Option<EndReason>,
    rng: StdRng,
    audio: A,
    scores: S,
}

impl<A: AudioSink, S: HighScoreStore> Game<A, S> {
    /// Creates a game seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns an error when `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig, audio: A, scores: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy(), audio, scores)
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    ///
    /// # Errors
    ///
    /// Returns an error when `config` fails [`GameConfig::validate`].
    pub fn new_with_seed(
        config: GameConfig,
        seed: u64,
        audio: A,
        scores: S,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed), audio, scores)
    }

    fn with_rng(
        config: GameConfig,
        mut rng: StdRng,
        audio: A,
        mut scores: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::initial(config.grid);
        let food = Self::place_food(&mut rng, config.grid, &snake);
        let high_score = scores.load();

        Ok(Self {
            config,
            snake,
            food,
            score: 0,
            high_score,
            tick_interval_ms: config.initial_interval_ms,
            status: GameStatus::NotStarted,
            started: false,
            end_reason: None,
            rng,
            audio,
            scores,
        })
    }

    /// Applies one external input event.
    ///
    /// Returns true when this input started the game, so the driver can run
    /// the first tick right away. `GameInput::Quit` belongs to the driver and
    /// is ignored here.
    pub fn apply_input(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Direction(direction) => self.steer(direction),
            GameInput::Pause => {
                self.toggle_pause();
                false
            }
            GameInput::Restart => {
                self.restart();
                false
            }
            GameInput::Quit => false,
        }
    }

    /// Buffers a heading; the first accepted heading of a game starts it.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.snake.buffer_direction(direction) {
            return false;
        }

        if self.started || self.status == GameStatus::Over {
            return false;
        }

        self.started = true;
        self.status = GameStatus::Running;
        self.audio.play(AudioCue::StartMusic);
        info!(?direction, "game started");
        true
    }

    /// Flips between running and paused once the game has started.
    pub fn toggle_pause(&mut self) {
        if !self.started {
            return;
        }

        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
        debug!(status = ?self.status, "pause toggled");
    }

    /// Resets the session to its initial layout and reloads the high score.
    ///
    /// Unless the config asks to wait, the snake resumes moving on the next
    /// tick without a fresh direction key; the key still starts the music.
    pub fn restart(&mut self) {
        self.snake = Snake::initial(self.config.grid);
        self.score = 0;
        self.tick_interval_ms = self.config.initial_interval_ms;
        self.started = false;
        self.end_reason = None;
        self.status = if self.config.restart_waits_for_input {
            GameStatus::NotStarted
        } else {
            GameStatus::Running
        };
        self.food = Self::place_food(&mut self.rng, self.config.grid, &self.snake);
        // A failed save leaves the store behind; never drop below what this session saw.
        self.high_score = self.scores.load().max(self.high_score);
        info!(high_score = self.high_score, "game restarted");
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickEvent {
        if self.status != GameStatus::Running {
            return TickEvent::Idle;
        }

        let heading = self.snake.commit_direction();
        let event = match evaluate_move(self.config.grid, &self.snake, heading, &self.food) {
            MoveOutcome::WallCollision => self.end(EndReason::WallCollision),
            MoveOutcome::SelfCollision => self.end(EndReason::SelfCollision),
            MoveOutcome::Moved {
                head,
                ate_food: false,
            } => {
                self.snake.advance(head, false);
                TickEvent::Moved
            }
            MoveOutcome::Moved {
                head,
                ate_food: true,
            } => {
                self.snake.advance(head, true);
                self.eat()
            }
        };

        debug!(?event, head = ?self.snake.head(), score = self.score, "tick");
        event
    }

    fn eat(&mut self) -> TickEvent {
        self.score += POINTS_PER_FOOD;
        self.audio.play(AudioCue::Eat);
        self.record_high_score();

        if self.score % self.config.speed_up_points == 0 {
            self.speed_up();
        }

        match Food::spawn(&mut self.rng, self.config.grid, &self.snake) {
            Some(food) => {
                self.food = food;
                TickEvent::Ate
            }
            None => self.end(EndReason::BoardFull),
        }
    }

    fn end(&mut self, reason: EndReason) -> TickEvent {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        self.audio.play(AudioCue::StopMusic);
        self.audio.play(AudioCue::GameOver);
        self.record_high_score();
        info!(?reason, score = self.score, high_score = self.high_score, "game over");
        TickEvent::Ended(reason)
    }

    fn record_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }

        self.high_score = self.score;
        self.scores.save(self.high_score);
    }

    fn speed_up(&mut self) {
        let next = self
            .tick_interval_ms
            .saturating_sub(self.config.speed_step_ms)
            .max(self.config.min_interval_ms);
        if next != self.tick_interval_ms {
            info!(interval_ms = next, score = self.score, "speed up");
        }
        self.tick_interval_ms = next;
    }

    /// Places food for the starting layout.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no free cell, which `GameConfig::validate` rules out
    /// for the starting snake.
    fn place_food(rng: &mut StdRng, bounds: GridSize, snake: &Snake) -> Food {
        Food::spawn(rng, bounds, snake).expect("validated grid has room beyond the starting snake")
    }

    /// Returns the renderable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake_cells: self.snake.segments().copied().collect(),
            direction: self.snake.direction(),
            food: self.food.position,
            score: self.score,
            high_score: self.high_score,
            status: self.status,
            started: self.started,
            paused: self.status == GameStatus::Paused,
            over: self.status == GameStatus::Over,
            end_reason: self.end_reason,
            grid: self.config.grid,
            tick_interval_ms: self.tick_interval_ms,
        }
    }

    /// Delay the driver waits before the next tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    #[must_use]
    pub fn scores(&self) -> &S {
        &self.scores
    }

    /// Replaces the snake; for scripted scenarios.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Replaces the food; for scripted scenarios.
    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    /// Overrides the current tick interval; for scripted scenarios.
    pub fn set_tick_interval_ms(&mut self, interval_ms: u64) {
        self.tick_interval_ms = interval_ms;
    }

    /// Overrides the current score; for scripted scenarios.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
