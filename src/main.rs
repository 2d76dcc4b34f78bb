use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use arcade_snake::audio::{AudioSink, SilentAudio, TerminalBell};
use arcade_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GameConfig, GridSize,
    MIN_TICK_INTERVAL_MS, SPEED_STEP_MS, SPEED_UP_POINTS, THEME_MIDNIGHT,
};
use arcade_snake::error::AppError;
use arcade_snake::game::Game;
use arcade_snake::input::{GameInput, InputHandler};
use arcade_snake::logging::{init_file_logging, log_path};
use arcade_snake::score::{HighScoreStore, JsonScoreFile};
use arcade_snake::terminal_runtime::TerminalSession;
use clap::Parser;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Tick interval at the start of a game, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    initial_interval_ms: u64,

    /// Fastest tick interval, in milliseconds.
    #[arg(long, default_value_t = MIN_TICK_INTERVAL_MS)]
    min_interval_ms: u64,

    /// Interval reduction on each speed-up, in milliseconds.
    #[arg(long, default_value_t = SPEED_STEP_MS)]
    speed_step_ms: u64,

    /// Speed up every time the score reaches a multiple of this.
    #[arg(long, default_value_t = SPEED_UP_POINTS)]
    speed_up_points: u32,

    /// Keep the snake still after a restart until a direction key is pressed.
    #[arg(long)]
    wait_after_restart: bool,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file (defaults to the per-user data directory).
    #[arg(long)]
    scores_file: Option<PathBuf>,

    /// Log file (defaults to the per-user data directory).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            grid: GridSize {
                width: self.width,
                height: self.height,
            },
            initial_interval_ms: self.initial_interval_ms,
            min_interval_ms: self.min_interval_ms,
            speed_step_ms: self.speed_step_ms,
            speed_up_points: self.speed_up_points,
            restart_waits_for_input: self.wait_after_restart,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.game_config();

    let log_file = cli.log_file.clone().unwrap_or_else(log_path);
    if let Err(error) = init_file_logging(&log_file) {
        eprintln!("Logging disabled ({}): {error}", log_file.display());
    }

    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(SilentAudio)
    } else {
        Box::new(TerminalBell::stdout())
    };
    let scores = cli
        .scores_file
        .clone()
        .map_or_else(JsonScoreFile::default_location, JsonScoreFile::new);
    info!(?config, scores = %scores.path().display(), "starting");

    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(config, seed, audio, scores)?,
        None => Game::new(config, audio, scores)?,
    };

    let mut session = TerminalSession::enter()?;
    play(&mut session, &mut game)?;
    drop(session);

    info!(high_score = game.high_score(), "exiting");
    Ok(())
}

fn play<A: AudioSink, S: HighScoreStore>(
    session: &mut TerminalSession,
    game: &mut Game<A, S>,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        session.draw(&game.snapshot(), &THEME_MIDNIGHT)?;

        let timeout = game.tick_interval().saturating_sub(last_tick.elapsed());
        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                return Ok(());
            }

            debug!(?game_input, "input");
            if game.apply_input(game_input) {
                // The first key moves the snake at once instead of after a full interval.
                game.tick();
                last_tick = Instant::now();
            }
        }

        if last_tick.elapsed() >= game.tick_interval() {
            game.tick();
            last_tick = Instant::now();
        }
    }
}
