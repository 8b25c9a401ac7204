//! Action sources polled by the session loop.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Something the session loop can poll for the next player action.
pub trait ActionSource {
    /// Wait at most `timeout` for an action.
    ///
    /// `Ok(None)` means the timeout elapsed or the input was not a game key.
    fn poll_action(&mut self, timeout: Duration) -> Result<Option<GameAction>>;
}

/// Reads key presses from the controlling terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalSource;

impl TerminalSource {
    pub fn new() -> Self {
        Self
    }

    /// Block until any key is pressed.
    pub fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl ActionSource for TerminalSource {
    fn poll_action(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Ignore auto-repeat and release events; one press is one action.
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed sequence of poll results, then reports `Quit` forever.
///
/// Each entry is one poll: `Some(action)` for a key press, `None` for a
/// timeout.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<Option<GameAction>>,
    polls: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Option<GameAction>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    /// Number of times the source has been polled.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionSource for ScriptedSource {
    fn poll_action(&mut self, _timeout: Duration) -> Result<Option<GameAction>> {
        self.polls += 1;
        Ok(self.script.pop_front().unwrap_or(Some(GameAction::Quit)))
    }
}
