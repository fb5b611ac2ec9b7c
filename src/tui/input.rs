//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::session::InputEvent;
use crate::core::Operator;

/// Commands the event loop acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Forward an event to the session
    Input(InputEvent),
    /// Reset the session and wipe the history
    ClearAll,
    /// Load the last result back into the entry line
    RecallLast,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps key events to commands
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a command
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyCommand {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyCommand::Quit,
                KeyCode::Char('l') => KeyCommand::ClearAll,
                _ => KeyCommand::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyCommand::Input(InputEvent::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.') => KeyCommand::Input(InputEvent::Decimal),
            KeyCode::Char('+') => KeyCommand::Input(InputEvent::Op(Operator::Add)),
            KeyCode::Char('-') => KeyCommand::Input(InputEvent::Op(Operator::Subtract)),
            KeyCode::Char('*') => KeyCommand::Input(InputEvent::Op(Operator::Multiply)),
            KeyCode::Char('/') => KeyCommand::Input(InputEvent::Op(Operator::Divide)),
            // '%' starts fraction entry so '/' stays free for division
            KeyCode::Char('%') => KeyCommand::Input(InputEvent::FractionSlash),
            KeyCode::Char('p' | 'P') => KeyCommand::Input(InputEvent::Pi),
            KeyCode::Char('s' | 'S') => KeyCommand::Input(InputEvent::ToggleSign),
            KeyCode::Char('c' | 'C') => KeyCommand::Input(InputEvent::Clear),
            KeyCode::Char('=') | KeyCode::Enter => KeyCommand::Input(InputEvent::Equals),
            KeyCode::Backspace => KeyCommand::Input(InputEvent::Backspace),
            KeyCode::Esc => KeyCommand::Input(InputEvent::Clear),
            KeyCode::Up => KeyCommand::RecallLast,
            _ => KeyCommand::None,
        }
    }
}
