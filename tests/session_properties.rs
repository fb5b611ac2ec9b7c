//! End-to-end tests driving the session through realistic key sequences

use proptest::prelude::*;

use fracalc::core::session::{InputEvent, InputMode, Session, DIV_ZERO_DISPLAY, ERROR_DISPLAY};
use fracalc::core::Operator;

// ===== Helpers and strategies =====

fn type_digits(session: &mut Session, text: &str) {
    for ch in text.chars() {
        match ch {
            '0'..='9' => session.apply(InputEvent::Digit(ch as u8 - b'0')),
            '.' => session.apply(InputEvent::Decimal),
            _ => panic!("not typeable: {ch}"),
        }
    }
}

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

// ===== Scenario tests =====

#[test]
fn addition_end_to_end() {
    let mut s = Session::default();
    type_digits(&mut s, "3");
    s.apply(InputEvent::Op(Operator::Add));
    type_digits(&mut s, "4");
    s.apply(InputEvent::Equals);
    assert_eq!(s.input_display(), "7");
}

#[test]
fn repeating_decimal_gets_fraction_note() {
    let mut s = Session::default();
    type_digits(&mut s, "1");
    s.apply(InputEvent::Op(Operator::Divide));
    type_digits(&mut s, "3");
    s.apply(InputEvent::Equals);
    assert!(s.input_display().starts_with("0.333"));
    assert_eq!(s.fraction_display(), Some("Fraction: 1/3".into()));
}

#[test]
fn division_by_zero_clears_entry_and_shows_error() {
    let mut s = Session::default();
    type_digits(&mut s, "5");
    s.apply(InputEvent::Op(Operator::Divide));
    type_digits(&mut s, "0");
    s.apply(InputEvent::Equals);
    assert!(s.has_error());
    assert_eq!(s.input_display(), ERROR_DISPLAY);
    assert_eq!(s.current(), "");
}

#[test]
fn fraction_entry_folds_to_decimal() {
    let mut s = Session::default();
    type_digits(&mut s, "3");
    s.apply(InputEvent::FractionSlash);
    type_digits(&mut s, "4");
    s.apply(InputEvent::Equals);
    assert_eq!(s.input_display(), "0.75");
    assert_eq!(s.mode(), InputMode::Normal);
}

#[test]
fn fraction_with_zero_denominator_is_distinct_error() {
    let mut s = Session::default();
    type_digits(&mut s, "7");
    s.apply(InputEvent::FractionSlash);
    type_digits(&mut s, "0");
    s.apply(InputEvent::Equals);
    assert_eq!(s.input_display(), DIV_ZERO_DISPLAY);
}

#[test]
fn fraction_participates_in_chain() {
    // 1/2 + 1/4 = 0.75
    let mut s = Session::default();
    type_digits(&mut s, "1");
    s.apply(InputEvent::FractionSlash);
    type_digits(&mut s, "2");
    s.apply(InputEvent::Op(Operator::Add));
    type_digits(&mut s, "1");
    s.apply(InputEvent::FractionSlash);
    type_digits(&mut s, "4");
    s.apply(InputEvent::Equals);
    assert_eq!(s.input_display(), "0.75");
}

#[test]
fn pi_shortcut_inserts_digits() {
    let mut s = Session::default();
    s.apply(InputEvent::Pi);
    s.apply(InputEvent::Op(Operator::Multiply));
    type_digits(&mut s, "2");
    s.apply(InputEvent::Equals);
    assert_eq!(s.input_display(), "6.28");
}

#[test]
fn clear_resets_all_displays() {
    let mut s = Session::default();
    type_digits(&mut s, "1");
    s.apply(InputEvent::Op(Operator::Divide));
    type_digits(&mut s, "6");
    s.apply(InputEvent::Equals);
    s.apply(InputEvent::Clear);
    assert_eq!(s.expression_display(), "");
    assert_eq!(s.input_display(), "");
    assert_eq!(s.fraction_display(), None);
}

#[test]
fn backspace_unwinds_fraction_entry() {
    let mut s = Session::default();
    type_digits(&mut s, "12");
    s.apply(InputEvent::FractionSlash);
    type_digits(&mut s, "5");
    s.apply(InputEvent::Backspace);
    s.apply(InputEvent::Backspace);
    assert_eq!(s.mode(), InputMode::FractionNumerator);
    assert_eq!(s.input_display(), "12");
    s.apply(InputEvent::Backspace);
    s.apply(InputEvent::Backspace);
    s.apply(InputEvent::Backspace);
    assert_eq!(s.mode(), InputMode::Normal);
    assert_eq!(s.input_display(), "");
}

// ===== Property tests =====

proptest! {
    /// Typed digits always appear verbatim on the entry line
    #[test]
    fn prop_digits_echo_verbatim(digits in proptest::collection::vec(digit_strategy(), 1..12)) {
        let mut s = Session::default();
        let mut expected = String::new();
        for d in &digits {
            s.apply(InputEvent::Digit(*d));
            expected.push(char::from(b'0' + d));
        }
        prop_assert_eq!(s.input_display(), expected);
    }

    /// At most one decimal point is ever accepted per number
    #[test]
    fn prop_single_decimal_point(digits in proptest::collection::vec(digit_strategy(), 1..6)) {
        let mut s = Session::default();
        for d in &digits {
            s.apply(InputEvent::Digit(*d));
            s.apply(InputEvent::Decimal);
        }
        let dots = s.input_display().matches('.').count();
        prop_assert_eq!(dots, 1);
    }

    /// Toggling the sign twice is the identity
    #[test]
    fn prop_double_sign_toggle_identity(digits in proptest::collection::vec(digit_strategy(), 1..8)) {
        let mut s = Session::default();
        for d in &digits {
            s.apply(InputEvent::Digit(*d));
        }
        let before = s.input_display();
        s.apply(InputEvent::ToggleSign);
        s.apply(InputEvent::ToggleSign);
        prop_assert_eq!(s.input_display(), before);
    }

    /// Backspace always shortens the entry by one character until empty
    #[test]
    fn prop_backspace_shortens(digits in proptest::collection::vec(digit_strategy(), 1..10)) {
        let mut s = Session::default();
        for d in &digits {
            s.apply(InputEvent::Digit(*d));
        }
        for remaining in (0..digits.len()).rev() {
            s.apply(InputEvent::Backspace);
            prop_assert_eq!(s.input_display().len(), remaining);
        }
    }

    /// A two-operand calculation never leaves the session in an
    /// inconsistent state: either a result is shown or an error is
    #[test]
    fn prop_binary_calculation_settles(
        a in 0u8..=9,
        b in 0u8..=9,
        op in operator_strategy(),
    ) {
        let mut s = Session::default();
        s.apply(InputEvent::Digit(a));
        s.apply(InputEvent::Op(op));
        s.apply(InputEvent::Digit(b));
        s.apply(InputEvent::Equals);
        if s.has_error() {
            prop_assert_eq!(op, Operator::Divide);
            prop_assert_eq!(b, 0);
        } else {
            prop_assert_eq!(s.expression_display(), "");
            prop_assert!(!s.input_display().is_empty());
        }
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_is_total_reset(
        digits in proptest::collection::vec(digit_strategy(), 0..6),
        use_fraction in any::<bool>(),
    ) {
        let mut s = Session::default();
        for d in &digits {
            s.apply(InputEvent::Digit(*d));
        }
        if use_fraction {
            s.apply(InputEvent::FractionSlash);
        }
        s.apply(InputEvent::Clear);
        prop_assert_eq!(s.expression_display(), "");
        prop_assert_eq!(s.input_display(), "");
        prop_assert_eq!(s.mode(), InputMode::Normal);
        prop_assert!(!s.has_error());
    }
}
