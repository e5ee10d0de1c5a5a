use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::DeathReason;
use crate::direction::Direction;
use crate::game::GameOverSummary;
use crate::input::GameInput;
use crate::theme::Theme;

/// Options offered once a run ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PromptChoice {
    TryAgain,
    Exit,
}

impl PromptChoice {
    fn toggled(self) -> Self {
        match self {
            Self::TryAgain => Self::Exit,
            Self::Exit => Self::TryAgain,
        }
    }
}

/// Restart-or-exit prompt shown after game over.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RestartPrompt {
    summary: GameOverSummary,
    selected: PromptChoice,
}

impl RestartPrompt {
    #[must_use]
    pub fn new(summary: GameOverSummary) -> Self {
        Self {
            summary,
            selected: PromptChoice::TryAgain,
        }
    }

    /// Feeds one input to the prompt. Returns the choice once it is made.
    pub fn handle(&mut self, input: GameInput) -> Option<PromptChoice> {
        match input {
            GameInput::Direction(Direction::Left | Direction::Right) => {
                self.selected = self.selected.toggled();
                None
            }
            GameInput::Direction(_) => None,
            GameInput::Confirm => Some(self.selected),
            GameInput::Decline | GameInput::Quit => Some(PromptChoice::Exit),
        }
    }

    #[must_use]
    pub fn selected(&self) -> PromptChoice {
        self.selected
    }

    #[must_use]
    pub fn summary(&self) -> GameOverSummary {
        self.summary
    }
}

/// Draws the game-over prompt as a centered popup.
pub fn render_restart_prompt(
    frame: &mut Frame<'_>,
    area: Rect,
    prompt: &RestartPrompt,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let summary = prompt.summary();
    let cause = match summary.reason {
        DeathReason::WallCollision => "Cause: hit wall",
        DeathReason::SelfCollision => "Cause: hit yourself",
    };

    let lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Your Score: {}", summary.score)),
        Line::from(cause),
        Line::from(""),
        Line::from("Would you like to try again?"),
        Line::from(""),
        Line::from(vec![
            choice_span(" Try Again ", prompt.selected() == PromptChoice::TryAgain, theme),
            Span::raw("   "),
            choice_span(" Exit ", prompt.selected() == PromptChoice::Exit, theme),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[←/→] choose · [Enter] confirm · [Y]/[N]",
            Style::default().fg(theme.menu_footer),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" timed snake ")),
        popup,
    );
}

fn choice_span(label: &'static str, selected: bool, theme: &Theme) -> Span<'static> {
    if selected {
        Span::styled(
            label,
            Style::default()
                .fg(theme.play_bg)
                .bg(theme.menu_selected)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(label)
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use crate::collision::DeathReason;
    use crate::direction::Direction;
    use crate::game::GameOverSummary;
    use crate::input::GameInput;

    use super::{PromptChoice, RestartPrompt};

    fn prompt() -> RestartPrompt {
        RestartPrompt::new(GameOverSummary {
            score: 4,
            reason: DeathReason::SelfCollision,
        })
    }

    #[test]
    fn confirm_defaults_to_try_again() {
        let mut prompt = prompt();

        assert_eq!(prompt.handle(GameInput::Confirm), Some(PromptChoice::TryAgain));
    }

    #[test]
    fn horizontal_input_toggles_selection() {
        let mut prompt = prompt();

        assert_eq!(prompt.handle(GameInput::Direction(Direction::Right)), None);
        assert_eq!(prompt.selected(), PromptChoice::Exit);
        assert_eq!(prompt.handle(GameInput::Direction(Direction::Up)), None);
        assert_eq!(prompt.handle(GameInput::Confirm), Some(PromptChoice::Exit));

        assert_eq!(prompt.handle(GameInput::Direction(Direction::Left)), None);
        assert_eq!(prompt.selected(), PromptChoice::TryAgain);
    }

    #[test]
    fn decline_and_quit_exit() {
        assert_eq!(prompt().handle(GameInput::Decline), Some(PromptChoice::Exit));
        assert_eq!(prompt().handle(GameInput::Quit), Some(PromptChoice::Exit));
    }
}
