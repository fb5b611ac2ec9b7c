//! Calculator session state machine
//!
//! A [`Session`] holds the pending expression, the number being typed, and
//! the fraction-entry state, and advances one [`InputEvent`] at a time. It
//! knows nothing about terminals or widgets; the frontend projects its
//! state through the display accessors and feeds events back in.

use crate::core::evaluator::Evaluator;
use crate::core::fraction::Fraction;
use crate::core::{CalcResult, Operator};

/// Display text for a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Display text for a fraction with a zero denominator
pub const DIV_ZERO_DISPLAY: &str = "Error (divide by zero)";

/// Digits inserted by the pi shortcut
pub const PI_LITERAL: &str = "3.14";

/// Which number component the next digit lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Plain decimal entry
    #[default]
    Normal,
    /// Typing the numerator of a fraction
    FractionNumerator,
    /// Typing the denominator of a fraction
    FractionDenominator,
}

/// A single user action, already stripped of its keyboard/button origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of the four arithmetic operators
    Op(Operator),
    /// Evaluate the pending expression
    Equals,
    /// Reset the session
    Clear,
    /// Delete the most recently entered character
    Backspace,
    /// Negate the number being typed
    ToggleSign,
    /// Insert the pi shortcut digits
    Pi,
    /// Start or advance fraction entry
    FractionSlash,
}

/// Renders a result for display: integers without a decimal point,
/// everything else to ten decimal places with trailing zeros removed
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let mut text = format!("{value:.10}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

/// The calculator state machine
#[derive(Debug, Clone)]
pub struct Session {
    expression: String,
    current: String,
    numerator: String,
    denominator: String,
    mode: InputMode,
    error: Option<&'static str>,
    fraction_note: Option<Fraction>,
    last_evaluation: Option<(String, String)>,
    evaluator: Evaluator,
    max_denominator: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Fraction::DEFAULT_MAX_DENOMINATOR)
    }
}

impl Session {
    /// Creates a session with the given denominator bound for fraction
    /// approximation of results
    #[must_use]
    pub fn new(max_denominator: i64) -> Self {
        Self {
            expression: String::new(),
            current: String::new(),
            numerator: String::new(),
            denominator: String::new(),
            mode: InputMode::Normal,
            error: None,
            fraction_note: None,
            last_evaluation: None,
            evaluator: Evaluator::new(),
            max_denominator,
        }
    }

    /// Advances the state machine by one event
    pub fn apply(&mut self, event: InputEvent) {
        // Any action dismisses a shown error
        self.error = None;
        if !matches!(event, InputEvent::Equals | InputEvent::Clear) {
            self.fraction_note = None;
        }

        match event {
            InputEvent::Digit(d) => {
                let ch = char::from(b'0' + (d % 10));
                self.active_component_mut().push(ch);
            }
            InputEvent::Decimal => {
                let component = self.active_component_mut();
                if !component.contains('.') {
                    component.push('.');
                }
            }
            InputEvent::Pi => self.active_component_mut().push_str(PI_LITERAL),
            InputEvent::Op(op) => self.apply_operator(op),
            InputEvent::Equals => self.apply_equals(),
            InputEvent::Clear => self.reset(),
            InputEvent::Backspace => self.apply_backspace(),
            InputEvent::ToggleSign => self.apply_toggle_sign(),
            InputEvent::FractionSlash => self.apply_fraction_slash(),
        }
    }

    /// The pending expression text, ending in an operator glyph when set
    #[must_use]
    pub fn expression_display(&self) -> &str {
        &self.expression
    }

    /// The entry line: the error text when set, otherwise the number (or
    /// fraction) being typed
    #[must_use]
    pub fn input_display(&self) -> String {
        if let Some(message) = self.error {
            return message.to_string();
        }
        match self.mode {
            InputMode::Normal => self.current.clone(),
            InputMode::FractionNumerator => self.numerator.clone(),
            InputMode::FractionDenominator => {
                format!("{}/{}", self.numerator, self.denominator)
            }
        }
    }

    /// Annotation line for a non-terminating decimal result
    #[must_use]
    pub fn fraction_display(&self) -> Option<String> {
        self.fraction_note.map(|f| format!("Fraction: {f}"))
    }

    /// The number currently being typed (normal mode component)
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The active entry mode
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    /// True while an error message occupies the entry line
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Replaces the entry line with `text`, leaving any pending expression
    /// intact. Used to recall a previous result.
    pub fn load_value(&mut self, text: &str) {
        self.mode = InputMode::Normal;
        self.numerator.clear();
        self.denominator.clear();
        self.error = None;
        self.fraction_note = None;
        self.current = text.to_string();
    }

    /// Takes the (expression, result) pair of the most recent successful
    /// evaluation, if one happened since the last call
    pub fn take_last_evaluation(&mut self) -> Option<(String, String)> {
        self.last_evaluation.take()
    }

    fn active_component_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::Normal => &mut self.current,
            InputMode::FractionNumerator => &mut self.numerator,
            InputMode::FractionDenominator => &mut self.denominator,
        }
    }

    fn apply_operator(&mut self, op: Operator) {
        if self.fraction_is_complete() {
            self.fold_fraction();
            if self.error.is_some() {
                return;
            }
        }
        if self.mode != InputMode::Normal || self.current.is_empty() {
            return;
        }
        if !self.expression.is_empty() {
            // Chain: fold the pending expression into the left operand first
            match self.evaluate_joined() {
                Ok(value) => self.current = format_result(value),
                Err(_) => {
                    self.set_error(ERROR_DISPLAY);
                    return;
                }
            }
        }
        self.expression = format!("{}{}", self.current, op.glyph());
        self.current.clear();
    }

    fn apply_equals(&mut self) {
        if self.fraction_is_complete() {
            self.fold_fraction();
            if self.error.is_some() {
                return;
            }
        }
        if self.mode != InputMode::Normal
            || self.expression.is_empty()
            || self.current.is_empty()
        {
            return;
        }
        self.fraction_note = None;
        let shown = format!("{}{}", self.expression, self.current);
        match self.evaluate_joined() {
            Ok(value) => {
                let rendered = format_result(value);
                self.last_evaluation = Some((shown, rendered.clone()));
                self.current = rendered;
                self.expression.clear();
                if value.fract() != 0.0 {
                    if let Some(f) = Fraction::approximate(value, self.max_denominator) {
                        if !f.is_terminating() {
                            self.fraction_note = Some(f);
                        }
                    }
                }
            }
            Err(_) => self.set_error(ERROR_DISPLAY),
        }
    }

    fn apply_fraction_slash(&mut self) {
        match self.mode {
            InputMode::Normal => {
                if self.current.is_empty() {
                    self.mode = InputMode::FractionNumerator;
                } else {
                    self.numerator = std::mem::take(&mut self.current);
                    self.mode = InputMode::FractionDenominator;
                }
            }
            InputMode::FractionNumerator => {
                if !self.numerator.is_empty() {
                    self.mode = InputMode::FractionDenominator;
                }
            }
            InputMode::FractionDenominator => {
                if !self.denominator.is_empty() {
                    self.fold_fraction();
                }
            }
        }
    }

    fn apply_backspace(&mut self) {
        match self.mode {
            InputMode::Normal => {
                self.current.pop();
            }
            InputMode::FractionNumerator => {
                if self.numerator.pop().is_none() {
                    self.mode = InputMode::Normal;
                }
            }
            InputMode::FractionDenominator => {
                if self.denominator.pop().is_none() {
                    self.mode = InputMode::FractionNumerator;
                }
            }
        }
    }

    fn apply_toggle_sign(&mut self) {
        let target = match self.mode {
            InputMode::Normal => &mut self.current,
            InputMode::FractionNumerator | InputMode::FractionDenominator => {
                &mut self.numerator
            }
        };
        if target.is_empty() {
            return;
        }
        if let Some(stripped) = target.strip_prefix('-') {
            *target = stripped.to_string();
        } else {
            target.insert(0, '-');
        }
    }

    fn fraction_is_complete(&self) -> bool {
        matches!(self.mode, InputMode::FractionDenominator)
            && !self.numerator.is_empty()
            && !self.denominator.is_empty()
    }

    /// Collapses the typed fraction into a decimal in `current`. Always
    /// leaves fraction entry state cleared, even on error.
    fn fold_fraction(&mut self) {
        let numerator: Result<f64, _> = self.numerator.parse();
        let denominator: Result<f64, _> = self.denominator.parse();
        self.mode = InputMode::Normal;
        self.numerator.clear();
        self.denominator.clear();
        match (numerator, denominator) {
            (Ok(_), Ok(d)) if d == 0.0 => self.set_error(DIV_ZERO_DISPLAY),
            (Ok(n), Ok(d)) => self.current = format_result(n / d),
            _ => self.set_error(ERROR_DISPLAY),
        }
    }

    fn evaluate_joined(&self) -> CalcResult<f64> {
        let joined = format!("{}{}", self.expression, self.current);
        let substituted: String = joined
            .chars()
            .map(|ch| match ch {
                '×' => '*',
                '÷' => '/',
                other => other,
            })
            .collect();
        self.evaluator.evaluate_str(&substituted)
    }

    fn set_error(&mut self, message: &'static str) {
        self.current.clear();
        self.error = Some(message);
    }

    fn reset(&mut self) {
        self.expression.clear();
        self.current.clear();
        self.numerator.clear();
        self.denominator.clear();
        self.mode = InputMode::Normal;
        self.error = None;
        self.fraction_note = None;
    }
}
