use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GridSize, Theme,
};
use crate::game::{GameStatus, Snapshot};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let area = frame.area();
    let hud_area = render_hud(frame, area, snapshot, theme);
    let play_area = board_area(hud_area, snapshot.grid);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if snapshot.over {
        render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.high_score,
            snapshot.end_reason,
            theme,
        );
        return;
    }

    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    match snapshot.status {
        GameStatus::NotStarted => render_start_menu(frame, play_area, snapshot.high_score, theme),
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::Running | GameStatus::Over => {}
    }
}

/// Centers a bordered board of `grid` cells inside `area`, clipped to fit.
fn board_area(area: Rect, grid: GridSize) -> Rect {
    let width = grid.width.saturating_add(2).min(area.width);
    let height = grid.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some((head, body)) = snapshot.snake_cells.split_last() else {
        return;
    };

    let buffer = frame.buffer_mut();
    for segment in body {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_BODY,
            Style::new().fg(theme.snake_body).bg(theme.play_bg),
        );
    }

    if let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *head) {
        buffer.set_string(
            x,
            y,
            head_glyph(snapshot.direction),
            Style::new()
                .fg(theme.snake_head)
                .bg(theme.play_bg)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::{
        GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_RIGHT, GridSize, THEME_MIDNIGHT,
    };
    use crate::game::{GameStatus, Snapshot};
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{board_area, logical_to_terminal, render};

    fn running_snapshot() -> Snapshot {
        Snapshot {
            snake_cells: vec![
                Position { x: 1, y: 2 },
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
            ],
            direction: Direction::Right,
            food: Position { x: 6, y: 1 },
            score: 20,
            high_score: 50,
            status: GameStatus::Running,
            started: true,
            paused: false,
            over: false,
            end_reason: None,
            grid: GridSize {
                width: 8,
                height: 5,
            },
            tick_interval_ms: 120,
        }
    }

    #[test]
    fn out_of_bounds_cells_are_not_mapped() {
        let inner = Rect::new(1, 1, 8, 5);
        let grid = GridSize {
            width: 8,
            height: 5,
        };

        assert_eq!(
            logical_to_terminal(inner, grid, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, grid, Position { x: 8, y: 0 }),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, grid, Position { x: -1, y: 2 }),
            None
        );
    }

    #[test]
    fn board_is_centered_and_clipped() {
        let grid = GridSize {
            width: 8,
            height: 5,
        };

        assert_eq!(board_area(Rect::new(0, 0, 20, 11), grid), Rect::new(5, 2, 10, 7));
        assert_eq!(board_area(Rect::new(0, 0, 6, 4), grid), Rect::new(0, 0, 6, 4));
    }

    #[test]
    fn running_frame_draws_snake_and_food() {
        let backend = TestBackend::new(20, 12);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let snapshot = running_snapshot();

        terminal
            .draw(|frame| render(frame, &snapshot, &THEME_MIDNIGHT))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let board = board_area(Rect::new(0, 0, 20, 10), snapshot.grid);
        let origin = (board.x + 1, board.y + 1);

        let cell = |p: Position| {
            buffer[(origin.0 + p.x as u16, origin.1 + p.y as u16)]
                .symbol()
                .to_string()
        };

        assert_eq!(cell(Position { x: 3, y: 2 }), GLYPH_SNAKE_HEAD_RIGHT);
        assert_eq!(cell(Position { x: 1, y: 2 }), GLYPH_SNAKE_BODY);
        assert_eq!(cell(Position { x: 6, y: 1 }), GLYPH_FOOD);
    }
}
