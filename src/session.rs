//! Session loop: polls for input, drives the board, redraws.
//!
//! Single-threaded and synchronous. Each iteration waits at most one poll
//! timeout for an action, applies at most one action to the board, then
//! renders, whether or not anything arrived, so the clock readout keeps
//! moving. The loop ends as soon as the board reports a terminal outcome.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, trace};

use crate::core::Board;
use crate::input::ActionSource;
use crate::types::{Outcome, POLL_TIMEOUT_MS};

/// Default input poll timeout.
pub fn poll_timeout() -> Duration {
    Duration::from_millis(POLL_TIMEOUT_MS)
}

/// Run one game to completion and return its outcome.
///
/// `render` is called once before the first poll and once after every
/// iteration, including the one that ended the game.
pub fn run_session<S, R>(
    board: &mut Board,
    source: &mut S,
    poll_timeout: Duration,
    mut render: R,
) -> Result<Outcome>
where
    S: ActionSource + ?Sized,
    R: FnMut(&Board) -> Result<()>,
{
    render(board)?;

    let mut iterations = 0u64;
    while !board.is_terminal() {
        if let Some(action) = source.poll_action(poll_timeout)? {
            let changed = board.apply_action(action);
            trace!(action = action.as_str(), changed, "applied action");
        }
        render(board)?;
        iterations += 1;
    }

    debug!(iterations, outcome = ?board.outcome(), "session finished");
    Ok(board.outcome())
}
