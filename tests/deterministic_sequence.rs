use arcade_snake::audio::{AudioCue, AudioSink};
use arcade_snake::config::{GameConfig, GridSize};
use arcade_snake::food::Food;
use arcade_snake::game::{EndReason, Game, GameStatus, TickEvent};
use arcade_snake::input::{Direction, GameInput};
use arcade_snake::score::MemoryScores;
use arcade_snake::snake::{Position, Snake};

#[derive(Debug, Default)]
struct RecordingAudio {
    cues: Vec<AudioCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

fn started_game(high_score: u32) -> Game<RecordingAudio, MemoryScores> {
    let mut game = Game::new_with_seed(
        GameConfig::default(),
        42,
        RecordingAudio::default(),
        MemoryScores::with_high_score(high_score),
    )
    .expect("default config should be valid");
    assert_eq!(
        game.config().grid,
        GridSize {
            width: 20,
            height: 16
        }
    );
    game.set_food(Food::at(Position { x: 0, y: 0 }));
    assert!(game.apply_input(GameInput::Direction(Direction::Right)));
    game
}

fn cells(game: &Game<RecordingAudio, MemoryScores>) -> Vec<Position> {
    game.snake().segments().copied().collect()
}

#[test]
fn scenario_a_eating_food_in_front() {
    let mut game = started_game(0);
    game.set_food(Food::at(Position { x: 11, y: 8 }));

    assert_eq!(game.tick(), TickEvent::Ate);

    // The tail stays put on an eating move, so the snake grows by one.
    assert_eq!(
        cells(&game),
        vec![
            Position { x: 8, y: 8 },
            Position { x: 9, y: 8 },
            Position { x: 10, y: 8 },
            Position { x: 11, y: 8 },
        ]
    );
    assert_eq!(game.score(), 10);
    assert!(!game.snake().occupies(game.food().position));
    assert_eq!(game.tick_interval_ms(), 120);
}

#[test]
fn scenario_b_running_into_the_right_wall() {
    let mut game = started_game(0);
    game.set_snake(Snake::from_segments(
        vec![
            Position { x: 17, y: 8 },
            Position { x: 18, y: 8 },
            Position { x: 19, y: 8 },
        ],
        Direction::Right,
    ));
    game.set_food(Food::at(Position { x: 2, y: 2 }));

    assert_eq!(game.tick(), TickEvent::Ended(EndReason::WallCollision));

    let snapshot = game.snapshot();
    assert!(snapshot.over);
    assert_eq!(snapshot.status, GameStatus::Over);
    assert_eq!(
        game.audio().cues,
        vec![
            AudioCue::StartMusic,
            AudioCue::StopMusic,
            AudioCue::GameOver
        ]
    );
}

#[test]
fn scenario_c_turning_into_own_tail() {
    let mut game = started_game(0);
    game.set_snake(Snake::from_segments(
        vec![Position { x: 2, y: 1 }, Position { x: 2, y: 2 }],
        Direction::Up,
    ));

    assert_eq!(game.tick(), TickEvent::Ended(EndReason::SelfCollision));
    assert!(game.snapshot().over);
}

#[test]
fn scenario_d_speed_up_at_thirty_points() {
    let mut game = started_game(0);
    game.set_score(20);
    game.set_food(Food::at(Position { x: 11, y: 8 }));

    game.tick();

    assert_eq!(game.score(), 30);
    assert_eq!(game.tick_interval_ms(), 112);

    // Near the floor the step is clamped.
    let mut fast = started_game(0);
    fast.set_score(20);
    fast.set_tick_interval_ms(49);
    fast.set_food(Food::at(Position { x: 11, y: 8 }));

    fast.tick();

    assert_eq!(fast.tick_interval_ms(), 45);
}

#[test]
fn scenario_e_restart_after_game_over() {
    let mut game = started_game(0);
    game.set_score(50);
    game.set_snake(Snake::from_segments(
        vec![Position { x: 19, y: 8 }],
        Direction::Right,
    ));
    game.tick();
    assert!(game.snapshot().over);
    assert_eq!(game.scores().high_score(), 50);

    game.apply_input(GameInput::Restart);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score, 0);
    assert!(!snapshot.over);
    assert_eq!(snapshot.high_score, 50);
    assert_eq!(
        snapshot.snake_cells,
        vec![
            Position { x: 8, y: 8 },
            Position { x: 9, y: 8 },
            Position { x: 10, y: 8 },
        ]
    );
    assert_eq!(snapshot.direction, Direction::Right);
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut game = Game::new_with_seed(
        GameConfig {
            grid: GridSize {
                width: 6,
                height: 4,
            },
            ..GameConfig::default()
        },
        42,
        RecordingAudio::default(),
        MemoryScores::default(),
    )
    .expect("6x4 grid should be valid");

    // Snake (1,2),(2,2),(3,2) heading right.
    game.apply_input(GameInput::Direction(Direction::Up));
    game.set_food(Food::at(Position { x: 3, y: 1 }));

    assert_eq!(game.tick(), TickEvent::Ate);
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.snake().head(), Position { x: 3, y: 1 });

    game.apply_input(GameInput::Direction(Direction::Down));
    game.set_food(Food::at(Position { x: 0, y: 3 }));
    assert_eq!(game.tick(), TickEvent::Moved);
    assert_eq!(game.snake().head(), Position { x: 3, y: 0 });

    assert_eq!(game.tick(), TickEvent::Ended(EndReason::WallCollision));
    assert_eq!(game.status(), GameStatus::Over);
    assert_eq!(game.high_score(), 10);
    assert_eq!(game.scores().saves(), 1);
}
