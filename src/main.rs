//! Terminal Minesweeper runner (default binary).
//!
//! Parses the board preset, sets up optional file logging, then runs the
//! session loop against the real terminal using crossterm for input and the
//! framebuffer renderer for output.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_minesweeper::cli::Args;
use tui_minesweeper::core::{Board, BoardSnapshot};
use tui_minesweeper::input::TerminalSource;
use tui_minesweeper::session::{poll_timeout, run_session};
use tui_minesweeper::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_minesweeper::types::Outcome;

fn main() -> Result<()> {
    // Usage errors (conflicting presets, bad --custom) exit non-zero here,
    // before any board exists.
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.board_config();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(%config, seed, "starting game");
    let mut board = Board::new(config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board);

    // Always try to restore terminal state.
    let _ = term.exit();
    let outcome = result?;

    println!(
        "{} ({} x {}, {} mines) in {} ms, seed {}",
        board.status(),
        board.height(),
        board.width(),
        board.mines(),
        board.elapsed_time(),
        board.seed()
    );
    info!(?outcome, "exiting");
    Ok(())
}

fn run(term: &mut TerminalRenderer, board: &mut Board) -> Result<Outcome> {
    let view = BoardView::default();
    let mut source = TerminalSource::new();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    board.snapshot_into(&mut snap);
    let needed = view.required_size(&snap);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    if w < needed.width || h < needed.height {
        warn!(
            width = w,
            height = h,
            needed_width = needed.width,
            needed_height = needed.height,
            "terminal is smaller than the board"
        );
    }

    let draw = |board: &Board| -> Result<()> {
        board.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)
    };
    let outcome = run_session(board, &mut source, poll_timeout(), draw)?;

    // Leave the final board on screen until the player has seen it.
    if matches!(outcome, Outcome::Won | Outcome::Lost) {
        source.wait_for_key()?;
    }
    Ok(outcome)
}

/// Send tracing output to `path`, if given. The terminal itself belongs to
/// the game, so nothing is logged to stdout or stderr.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("MINESWEEPER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
