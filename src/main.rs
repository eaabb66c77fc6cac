use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use term_snake::config::{DEFAULT_GRID, THEME_CLASSIC, TICK_INTERVAL};
use term_snake::error::AppError;
use term_snake::game::{Flow, GameEvent, GameState};
use term_snake::input::{GameInput, InputHandler};
use term_snake::logging;
use term_snake::renderer;
use term_snake::terminal_runtime::{self, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the point placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the log to this file instead of the default location.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.verbose)?;
    info!("starting session, seed {:?}", cli.seed);

    terminal_runtime::install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &cli);
    drop(session);

    info!("session ended");
    result
}

fn run(session: &mut TerminalSession, cli: &Cli) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(DEFAULT_GRID, seed),
        None => GameState::new(DEFAULT_GRID),
    };
    let mut last_tick = Instant::now();

    loop {
        let snapshot = state.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &THEME_CLASSIC))?;

        let timeout = if state.is_running() {
            TICK_INTERVAL.saturating_sub(last_tick.elapsed())
        } else {
            TICK_INTERVAL
        };
        match input.poll_input(timeout)? {
            Some(GameInput::Quit) => {
                info!("quit at score {}, highscore {}", state.score, state.highscore);
                return Ok(());
            }
            Some(GameInput::Restart) if !state.is_running() => {
                info!("restarting, session highscore {}", state.highscore);
                state = state.restart();
                last_tick = Instant::now();
                continue;
            }
            Some(GameInput::Direction(direction)) => {
                let (next, _) = state.handle_event(GameEvent::Turn(direction));
                state = next;
            }
            Some(GameInput::Restart) | None => {}
        }

        if state.is_running() && last_tick.elapsed() >= TICK_INTERVAL {
            let (next, flow) = state.handle_event(GameEvent::Tick);
            state = next;
            last_tick = Instant::now();

            if flow == Flow::Stop {
                log_final_snapshot(&state);
            }
        }
    }
}

fn log_final_snapshot(state: &GameState) {
    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => info!("final state: {json}"),
        Err(error) => warn!("failed to serialise final state: {error}"),
    }
}
