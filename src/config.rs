use ratatui::style::Color;
use ratatui::symbols::border;

use crate::error::ConfigError;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when `position` lies inside the grid.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.is_within_bounds(self)
    }

    /// Returns the centre cell, rounding towards the bottom-right.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Grid width used when none is given on the command line.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Grid height used when none is given on the command line.
pub const DEFAULT_GRID_HEIGHT: u16 = 16;

/// Tick interval at the start of every game, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 45;

/// Interval reduction applied on every speed-up.
pub const SPEED_STEP_MS: u64 = 8;

/// Score multiple at which the game speeds up.
pub const SPEED_UP_POINTS: u32 = 30;

/// Score granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Length of the snake at the start of every game.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tunable rules for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_interval_ms: u64,
    pub min_interval_ms: u64,
    pub speed_step_ms: u64,
    pub speed_up_points: u32,
    /// Keep the snake still after a restart until a direction key is pressed.
    pub restart_waits_for_input: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            initial_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            min_interval_ms: MIN_TICK_INTERVAL_MS,
            speed_step_ms: SPEED_STEP_MS,
            speed_up_points: SPEED_UP_POINTS,
            restart_waits_for_input: false,
        }
    }
}

impl GameConfig {
    /// Checks that the grid fits the starting snake and the speed settings are coherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The initial snake spans (cx - 2, cy)..=(cx, cy) with cx = width / 2.
        if self.grid.width < 4 || self.grid.height == 0 {
            return Err(ConfigError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        if self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::IntervalRange {
                min_ms: self.min_interval_ms,
                initial_ms: self.initial_interval_ms,
            });
        }

        if self.speed_up_points == 0 {
            return Err(ConfigError::ZeroSpeedUpPoints);
        }

        Ok(())
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Dark navy board with cyan snake and coral food.
pub const THEME_MIDNIGHT: Theme = Theme {
    name: "Midnight",
    snake_head: Color::Rgb(0x00, 0xff, 0x88),
    snake_body: Color::Rgb(0x00, 0xd9, 0xff),
    food: Color::Rgb(0xff, 0x6b, 0x6b),
    play_bg: Color::Rgb(0x1a, 0x1a, 0x2e),
    border_fg: Color::Rgb(0xff, 0xd9, 0x3d),
    border_bg: Color::Rgb(0x16, 0x21, 0x3e),
    hud_text: Color::Rgb(0xea, 0xea, 0xea),
    hud_accent: Color::Rgb(0xff, 0xd9, 0x3d),
    menu_title: Color::Rgb(0xff, 0xd9, 0x3d),
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph for every snake segment except the head.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Head glyphs per heading.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";

#[cfg(test)]
mod tests {
    use crate::error::ConfigError;
    use crate::snake::Position;

    use super::{GameConfig, GridSize};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn grid_contains_only_cells_inside_bounds() {
        let grid = GridSize {
            width: 20,
            height: 16,
        };

        assert!(grid.contains(Position { x: 0, y: 0 }));
        assert!(grid.contains(Position { x: 19, y: 15 }));
        assert!(!grid.contains(Position { x: 20, y: 8 }));
        assert!(!grid.contains(Position { x: -1, y: 8 }));
        assert!(!grid.contains(Position { x: 3, y: 16 }));
        assert!(!grid.contains(Position { x: 3, y: -1 }));
    }

    #[test]
    fn grid_center_rounds_down() {
        let grid = GridSize {
            width: 20,
            height: 16,
        };
        assert_eq!(grid.center(), Position { x: 10, y: 8 });

        let odd = GridSize {
            width: 7,
            height: 5,
        };
        assert_eq!(odd.center(), Position { x: 3, y: 2 });
    }

    #[test]
    fn narrow_grid_is_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 3,
                height: 10,
            },
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooSmall {
                width: 3,
                height: 10
            })
        );
    }

    #[test]
    fn grid_without_room_to_grow_is_rejected() {
        let config = GameConfig {
            grid: GridSize {
                width: 4,
                height: 0,
            },
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_interval_range_is_rejected() {
        let config = GameConfig {
            initial_interval_ms: 40,
            min_interval_ms: 45,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::IntervalRange {
                min_ms: 45,
                initial_ms: 40
            })
        );
    }

    #[test]
    fn zero_speed_up_points_is_rejected() {
        let config = GameConfig {
            speed_up_points: 0,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroSpeedUpPoints));
    }
}
