use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::{EndReason, GameStatus, Snapshot};

const HUD_MARGIN_X: u16 = 1;

/// Renders the two-line HUD and returns the remaining area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) -> Rect {
    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot, theme)).alignment(Alignment::Center),
        inset_horizontal(score_area, HUD_MARGIN_X),
    );

    frame.render_widget(
        Paragraph::new(Line::from(status_hint(snapshot)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        inset_horizontal(hint_area, HUD_MARGIN_X),
    );

    play_area
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

fn score_line(snapshot: &Snapshot, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_text);
    let value = Style::default()
        .fg(theme.hud_accent)
        .add_modifier(Modifier::BOLD);
    let sep = Span::styled("  •  ", Style::default().fg(theme.menu_footer));

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(snapshot.score.to_string(), value),
        sep.clone(),
        Span::styled("High Score: ", label),
        Span::styled(snapshot.high_score.to_string(), value),
        sep.clone(),
        Span::styled("Length: ", label),
        Span::styled(snapshot.snake_cells.len().to_string(), value),
        sep,
        Span::styled("Tick: ", label),
        Span::styled(format!("{}ms", snapshot.tick_interval_ms), value),
    ])
}

/// Key hint shown under the score, depending on game phase.
#[must_use]
pub fn status_hint(snapshot: &Snapshot) -> &'static str {
    match (snapshot.status, snapshot.end_reason) {
        (GameStatus::Over, Some(EndReason::WallCollision)) => {
            "You hit the wall! Press R or Space to restart."
        }
        (GameStatus::Over, Some(EndReason::SelfCollision)) => {
            "You hit yourself! Press R or Space to restart."
        }
        (GameStatus::Over, _) => "Board cleared! Press R or Space to restart.",
        (GameStatus::Paused, _) => "Paused • Press P to resume • R or Space to restart",
        (GameStatus::NotStarted, _) => "Press an arrow key to start • Q to quit",
        // After a restart the snake moves on its own, but pause waits for a key.
        (GameStatus::Running, _) if !snapshot.started => {
            "Press an arrow key to resume control • R or Space to restart"
        }
        (GameStatus::Running, _) => "Arrow keys • Pause: P • Restart: R or Space • Quit: Q",
    }
}
