use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::direction::Direction;
use crate::game::{GameStatus, GameView};
use crate::grid::{Cell, GridSpace};
use crate::theme::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, Theme,
};
use crate::ui::hud::render_hud;
use crate::ui::prompt::{RestartPrompt, render_restart_prompt};

/// Renders the full game frame from an immutable snapshot.
pub fn render(
    frame: &mut Frame<'_>,
    view: &GameView<'_>,
    prompt: Option<&RestartPrompt>,
    theme: &Theme,
) {
    let area = frame.area();
    let available = render_hud(frame, area, view, theme);
    let play_area = playfield_rect(available, view.grid);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, view, theme);
    render_snake(frame, inner, view, theme);

    if view.status == GameStatus::GameOver {
        if let Some(prompt) = prompt {
            render_restart_prompt(frame, play_area, prompt, theme);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, view: &GameView<'_>, theme: &Theme) {
    let width = view.grid.cell_size();
    let text = centered_glyph(GLYPH_FOOD, width);
    let style = Style::new().fg(theme.food).bg(theme.play_bg);

    let buffer = frame.buffer_mut();
    for cell in view.food {
        if let Some((x, y)) = logical_to_terminal(inner, view.grid, *cell) {
            buffer.set_string(x, y, &text, style);
        }
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, view: &GameView<'_>, theme: &Theme) {
    let width = view.grid.cell_size();
    let last = view.snake.len().saturating_sub(1);
    let segments: Vec<Cell> = view.snake.segments().copied().collect();

    let buffer = frame.buffer_mut();
    // Tail first so the head stays visible when it overlaps the body.
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, view.grid, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                centered_glyph(head_glyph(view.heading), width),
                Style::new()
                    .fg(theme.play_bg)
                    .bg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        let color = if index == last {
            theme.snake_tail
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, " ".repeat(usize::from(width)), Style::new().bg(color));
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

/// Pads `glyph` with spaces to `width` columns, glyph in the middle.
fn centered_glyph(glyph: &str, width: u16) -> String {
    let width = usize::from(width.max(1));
    let left = (width - 1) / 2;
    let right = width - 1 - left;
    format!("{}{glyph}{}", " ".repeat(left), " ".repeat(right))
}

/// Sizes the bordered playfield to the grid and centers it in `area`.
fn playfield_rect(area: Rect, grid: GridSpace) -> Rect {
    let width = grid
        .width()
        .saturating_mul(grid.cell_size())
        .saturating_add(2)
        .min(area.width);
    let height = grid.height().saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSpace, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let col = u16::try_from(cell.col).ok()?;
    let row = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(col.saturating_mul(grid.cell_size()));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(grid.cell_size()) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
