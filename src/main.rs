use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use timed_snake::config::GameConfig;
use timed_snake::error::{AppError, Result};
use timed_snake::game::GameController;
use timed_snake::input::{GameInput, InputHandler};
use timed_snake::logging::init_file_logging;
use timed_snake::renderer;
use timed_snake::terminal_runtime::{AppTerminal, TerminalSession};
use timed_snake::theme::THEME_CLASSIC;
use timed_snake::ui::prompt::{PromptChoice, RestartPrompt};

/// Upper bound on how long the loop waits for input between redraws.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; defaults to the per-user config when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playfield width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Playfield height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Append tracing output to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("timed-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if let Some(path) = &cli.log_file {
        init_file_logging(path).map_err(AppError::Logging)?;
    }

    let game = match cli.seed {
        Some(seed) => GameController::new_with_seed(config, seed),
        None => GameController::new(config),
    };

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), game)
}

fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(cli.config.as_deref())?;

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    config.validate()?;
    Ok(config)
}

fn run(terminal: &mut AppTerminal, mut game: GameController) -> Result<()> {
    let mut input = InputHandler::new();
    let mut prompt: Option<RestartPrompt> = None;

    loop {
        terminal.draw(|frame| {
            renderer::render(frame, &game.view(), prompt.as_ref(), &THEME_CLASSIC)
        })?;

        let now = Instant::now();
        let timeout = game.next_deadline().map_or(FRAME_INTERVAL, |deadline| {
            deadline.saturating_duration_since(now).min(FRAME_INTERVAL)
        });

        if let Some(game_input) = input.poll_input(timeout)? {
            if let Some(active) = prompt.as_mut() {
                match active.handle(game_input) {
                    Some(PromptChoice::TryAgain) => {
                        prompt = None;
                        game.restart();
                    }
                    Some(PromptChoice::Exit) => break,
                    None => {}
                }
            } else {
                match game_input {
                    GameInput::Quit => break,
                    GameInput::Direction(direction) => game.request_direction(direction),
                    GameInput::Confirm | GameInput::Decline => {}
                }
            }
        }

        if let Some(summary) = game.advance(Instant::now()) {
            prompt = Some(RestartPrompt::new(summary));
        }
    }

    Ok(())
}
