//! Application state: session, history, and keypad glue

use crate::core::fraction::Fraction;
use crate::core::history::History;
use crate::core::session::{InputEvent, Session};

use super::input::KeyCommand;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    session: Session,
    history: History,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(
            Fraction::DEFAULT_MAX_DENOMINATOR,
            History::DEFAULT_MAX_ENTRIES,
        )
    }

    /// Creates an app with explicit fraction and history limits
    #[must_use]
    pub fn with_limits(max_denominator: i64, history_limit: usize) -> Self {
        Self {
            session: Session::new(max_denominator),
            history: History::with_capacity(history_limit),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// The session state machine
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The calculation history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The keypad, for rendering
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Executes a command from the input handler
    pub fn handle(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Input(event) => self.input(event),
            KeyCommand::ClearAll => {
                self.session.apply(InputEvent::Clear);
                self.history.clear();
            }
            KeyCommand::RecallLast => self.recall_last(),
            KeyCommand::Quit => self.quit(),
            KeyCommand::None => {}
        }
    }

    /// Feeds one event to the session, highlighting the matching keypad
    /// button and recording completed calculations
    pub fn input(&mut self, event: InputEvent) {
        self.keypad.highlight(event);
        self.session.apply(event);
        if let Some((expression, result)) = self.session.take_last_evaluation() {
            self.history.record(&expression, &result);
        }
    }

    /// Loads the most recent result back into the entry line
    pub fn recall_last(&mut self) {
        if let Some(entry) = self.history.last() {
            let result = entry.result.clone();
            self.session.load_value(&result);
        }
    }

    /// Clears any keypad highlight (called when input goes idle)
    pub fn release_keypad(&mut self) {
        self.keypad.release_all();
    }
}
