//! Key handling: maps terminal key events to game inputs and buffers them
//! until the next tick.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Any ordinary key: jump while playing, start/restart on menus.
    Jump,
    /// Esc, q or Ctrl-C.
    Quit,
}

/// Map a key event. Key releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        _ => Some(GameInput::Jump),
    }
}

/// Inputs gathered between two ticks.
///
/// Several jumps in one tick collapse into one: a jump overwrites velocity,
/// so only the last one matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn record(&mut self, input: GameInput) {
        match input {
            GameInput::Jump => self.jump = true,
            GameInput::Quit => self.quit = true,
        }
    }

    /// Return the buffered jump and clear it for the next tick.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }
}
