/// Key-event translation.  Only the four arrow keys steer the player; the
/// quit keys are the host's business.  Everything else is dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::entities::Direction;

/// DOM-style key codes for the arrow keys.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    Quit,
}

/// Numeric key code → direction.
pub fn direction_for_code(code: u32) -> Option<Direction> {
    match code {
        KEY_LEFT => Some(Direction::Left),
        KEY_UP => Some(Direction::Up),
        KEY_RIGHT => Some(Direction::Right),
        KEY_DOWN => Some(Direction::Down),
        _ => None,
    }
}

/// Terminal key → direction.
pub fn direction_for_key(code: &KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Decides which key events count.
///
/// Moves fire on key *release*.  Terminals without keyboard-enhancement
/// support never send releases, so there we fall back to key press.
#[derive(Clone, Copy, Debug)]
pub struct InputHandler {
    trigger: KeyEventKind,
}

impl InputHandler {
    pub fn new(release_events: bool) -> Self {
        let trigger = if release_events {
            KeyEventKind::Release
        } else {
            KeyEventKind::Press
        };
        Self { trigger }
    }

    /// Handler for a terminal whose keyboard-enhancement support has been
    /// queried.  `None` (query failed) is treated as unsupported.
    pub fn for_terminal(supports_enhancement: Option<bool>) -> Self {
        Self::new(supports_enhancement.unwrap_or(false))
    }

    /// Whether moves wait for key release.
    pub fn moves_on_release(&self) -> bool {
        self.trigger == KeyEventKind::Release
    }

    pub fn translate(&self, event: &KeyEvent) -> Option<InputCommand> {
        if event.kind == KeyEventKind::Press {
            match event.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Some(InputCommand::Quit);
                }
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(InputCommand::Quit);
                }
                _ => {}
            }
        }

        if event.kind != self.trigger {
            return None;
        }
        let direction = direction_for_key(&event.code)?;
        debug!("pressed key {:?}", direction);
        Some(InputCommand::Move(direction))
    }
}
