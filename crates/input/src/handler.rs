//! Soft-drop aware key handler for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a soft drop is released once no soft-drop key has arrived for the grace
//! period.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{is_soft_drop_key, map_key};
use crate::types::{Command, SOFT_DROP_GRACE_MS};

/// Turns key events into commands and tracks the held soft-drop key
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Remaining grace while a soft drop is held
    soft_drop_ms: Option<u32>,
    grace_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            soft_drop_ms: None,
            grace_ms,
        }
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop_ms.is_some()
    }

    /// Handle one key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Command> {
        let command = map_key(code)?;
        if command == Command::SoftDrop {
            self.soft_drop_ms = Some(self.grace_ms);
        }
        Some(command)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<Command> {
        if is_soft_drop_key(code) && self.soft_drop_ms.take().is_some() {
            return Some(Command::SoftDropRelease);
        }
        None
    }

    /// Advance the grace timer; emits the release when it runs out
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        let remaining = self.soft_drop_ms?;
        if elapsed_ms >= remaining {
            self.soft_drop_ms = None;
            Some(Command::SoftDropRelease)
        } else {
            self.soft_drop_ms = Some(remaining - elapsed_ms);
            None
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
