//! fracalc - a terminal calculator with fraction entry
//!
//! The calculator accumulates a textual arithmetic expression from button
//! and key events, evaluates it with a small recursive-descent parser
//! restricted to the four basic operators, and annotates non-terminating
//! decimal results with the closest simple fraction.
//!
//! # Example
//!
//! ```rust
//! use fracalc::prelude::*;
//!
//! let mut session = Session::default();
//! session.apply(InputEvent::Digit(1));
//! session.apply(InputEvent::Op(Operator::Divide));
//! session.apply(InputEvent::Digit(3));
//! session.apply(InputEvent::Equals);
//!
//! assert!(session.input_display().starts_with("0.333"));
//! assert_eq!(session.fraction_display(), Some("Fraction: 1/3".into()));
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::fraction::Fraction;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::session::{
        format_result, InputEvent, InputMode, Session, DIV_ZERO_DISPLAY, ERROR_DISPLAY,
        PI_LITERAL,
    };
    pub use crate::core::{CalcError, CalcResult, Calculator, Operator};
    pub use crate::tui::{CalculatorApp, InputHandler, KeyCommand, Keypad};
}
