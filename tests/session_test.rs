use std::time::Duration;

use anyhow::{bail, Result};

use tui_minesweeper::core::Board;
use tui_minesweeper::input::{ActionSource, ScriptedSource};
use tui_minesweeper::session::{poll_timeout, run_session};
use tui_minesweeper::types::{GameAction, Outcome, Visibility, POLL_TIMEOUT_MS};

#[test]
fn session_renders_before_and_after_every_poll() {
    let mut board = Board::from_mines(3, 3, &[(2, 2)], 0).unwrap();
    let mut source = ScriptedSource::new([None, Some(GameAction::MoveRight), None, Some(GameAction::Quit)]);

    let mut frames = 0;
    let outcome = run_session(&mut board, &mut source, Duration::ZERO, |_| {
        frames += 1;
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, Outcome::Aborted);
    assert_eq!(source.polls(), 4);
    // One initial frame plus one per iteration.
    assert_eq!(frames, 5);
    assert_eq!(board.cursor(), (0, 1));
}

#[test]
fn session_stops_on_win() {
    let mut board = Board::from_mines(3, 3, &[(2, 2)], 0).unwrap();
    let mut source = ScriptedSource::new([Some(GameAction::Reveal), Some(GameAction::MoveDown)]);

    let outcome = run_session(&mut board, &mut source, Duration::ZERO, |_| Ok(())).unwrap();

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(source.remaining(), 1);
    assert_eq!(board.cursor(), (0, 0));
}

#[test]
fn session_stops_on_loss_and_renders_final_state() {
    let mut board = Board::from_mines(3, 3, &[(0, 2), (2, 2)], 0).unwrap();
    let mut source = ScriptedSource::new([
        Some(GameAction::Reveal),
        Some(GameAction::MoveRight),
        Some(GameAction::MoveRight),
        Some(GameAction::Reveal),
    ]);

    let mut last_seen = None;
    let outcome = run_session(&mut board, &mut source, Duration::ZERO, |b| {
        last_seen = Some(b.outcome());
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, Outcome::Lost);
    assert_eq!(last_seen, Some(Outcome::Lost));
    assert_eq!(board.visibility(0, 2), Some(Visibility::Revealed));
}

#[test]
fn session_ignores_timeouts_and_keeps_playing() {
    let mut board = Board::from_mines(4, 4, &[(3, 3)], 0).unwrap();
    let mut source = ScriptedSource::new(vec![None; 10]);

    // The scripted source quits once the script runs out.
    let outcome = run_session(&mut board, &mut source, Duration::ZERO, |_| Ok(())).unwrap();
    assert_eq!(outcome, Outcome::Aborted);
    assert_eq!(source.polls(), 11);
    assert_eq!(board.revealed_count(), 0);
}

struct FailingSource;

impl ActionSource for FailingSource {
    fn poll_action(&mut self, _timeout: Duration) -> Result<Option<GameAction>> {
        bail!("input closed")
    }
}

#[test]
fn session_propagates_input_and_render_errors() {
    let mut board = Board::from_mines(2, 2, &[(1, 1)], 0).unwrap();
    let err = run_session(&mut board, &mut FailingSource, Duration::ZERO, |_| Ok(())).unwrap_err();
    assert!(err.to_string().contains("input closed"));

    let mut source = ScriptedSource::new([]);
    let err = run_session(&mut board, &mut source, Duration::ZERO, |_| bail!("draw failed")).unwrap_err();
    assert!(err.to_string().contains("draw failed"));
    assert_eq!(source.polls(), 0);
}

#[test]
fn session_passes_poll_timeout_through() {
    struct Recording(Vec<Duration>);
    impl ActionSource for Recording {
        fn poll_action(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
            self.0.push(timeout);
            Ok(Some(GameAction::Quit))
        }
    }

    let mut board = Board::from_mines(2, 2, &[(1, 1)], 0).unwrap();
    let mut source = Recording(Vec::new());
    run_session(&mut board, &mut source, poll_timeout(), |_| Ok(())).unwrap();
    assert_eq!(source.0, vec![Duration::from_millis(POLL_TIMEOUT_MS)]);
}
