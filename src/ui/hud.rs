use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameView;
use crate::theme::Theme;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";
const HELP_TEXT: &str = "arrows/WASD move · q quit";

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, view: &GameView<'_>, theme: &Theme) -> Rect {
    let [play_area, info_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let info_area = inset_horizontal(info_area, HUD_MARGIN_X);

    let info = info_line(view, theme);
    let info_width = u16::try_from(info.width()).unwrap_or(u16::MAX);
    let [help_area, values_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(info_width)]).areas(info_area);

    frame.render_widget(
        Paragraph::new(Line::from(HELP_TEXT))
            .alignment(Alignment::Left)
            .style(Style::default().fg(theme.hud_label)),
        help_area,
    );
    frame.render_widget(Paragraph::new(info).alignment(Alignment::Right), values_area);

    play_area
}

fn info_line(view: &GameView<'_>, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_value);

    Line::from(vec![
        Span::styled("Length: ", label),
        Span::styled(view.snake.len().to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled("Food: ", label),
        Span::styled(view.food.len().to_string(), Style::default().fg(theme.food)),
        Span::styled(SEPARATOR, label),
        Span::styled("Score: ", label),
        Span::styled(view.score.to_string(), value),
    ])
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
