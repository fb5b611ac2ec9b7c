//! The four basic arithmetic operations

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Returns the operator symbol the evaluator recognizes
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the glyph shown on buttons and in the expression display
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps a display glyph or evaluator symbol back to an operator
    #[must_use]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the precedence level for operator ordering (higher = evaluated first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }
}

/// Core calculator implementing the arithmetic operations
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Performs an operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
        match op {
            Operator::Add => Self::add(a, b),
            Operator::Subtract => Self::subtract(a, b),
            Operator::Multiply => Self::multiply(a, b),
            Operator::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_overflow(a / b)
    }

    /// Checks for overflow (infinity or NaN)
    fn check_overflow(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator enum tests ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!(Operator::Add.glyph(), '+');
        assert_eq!(Operator::Subtract.glyph(), '-');
        assert_eq!(Operator::Multiply.glyph(), '×');
        assert_eq!(Operator::Divide.glyph(), '÷');
    }

    #[test]
    fn test_operator_from_glyph() {
        assert_eq!(Operator::from_glyph('+'), Some(Operator::Add));
        assert_eq!(Operator::from_glyph('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_glyph('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_glyph('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_glyph('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_glyph('^'), None);
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(Operator::Add.precedence(), 1);
        assert_eq!(Operator::Subtract.precedence(), 1);
        assert_eq!(Operator::Multiply.precedence(), 2);
        assert_eq!(Operator::Divide.precedence(), 2);
    }

    // --- Addition tests ---

    #[test]
    fn test_add_positive_numbers() {
        assert_eq!(Calculator::add(2.0, 3.0), Ok(5.0));
    }

    #[test]
    fn test_add_negative_numbers() {
        assert_eq!(Calculator::add(-2.0, -3.0), Ok(-5.0));
    }

    #[test]
    fn test_add_decimals() {
        let result = Calculator::add(0.1, 0.2).unwrap();
        assert!((result - 0.3).abs() < 1e-10);
    }

    // --- Subtraction tests ---

    #[test]
    fn test_subtract_positive_numbers() {
        assert_eq!(Calculator::subtract(5.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_subtract_to_negative() {
        assert_eq!(Calculator::subtract(3.0, 5.0), Ok(-2.0));
    }

    // --- Multiplication tests ---

    #[test]
    fn test_multiply_positive_numbers() {
        assert_eq!(Calculator::multiply(2.0, 3.0), Ok(6.0));
    }

    #[test]
    fn test_multiply_mixed_signs() {
        assert_eq!(Calculator::multiply(-2.0, 3.0), Ok(-6.0));
    }

    #[test]
    fn test_multiply_by_zero() {
        assert_eq!(Calculator::multiply(5.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(
            Calculator::multiply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
    }

    // --- Division tests ---

    #[test]
    fn test_divide_positive_numbers() {
        assert_eq!(Calculator::divide(6.0, 2.0), Ok(3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Calculator::divide(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_zero_by_number() {
        assert_eq!(Calculator::divide(0.0, 5.0), Ok(0.0));
    }

    // --- calculate() dispatch tests ---

    #[test]
    fn test_calculate_all_operators() {
        assert_eq!(Calculator::calculate(2.0, 3.0, Operator::Add), Ok(5.0));
        assert_eq!(Calculator::calculate(5.0, 3.0, Operator::Subtract), Ok(2.0));
        assert_eq!(
            Calculator::calculate(4.0, 3.0, Operator::Multiply),
            Ok(12.0)
        );
        assert_eq!(Calculator::calculate(12.0, 4.0, Operator::Divide), Ok(3.0));
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Calculator::add(a, b);
            let r2 = Calculator::add(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "Commutativity violated"),
            }
        }

        #[test]
        fn prop_multiply_commutative(a in -1e5f64..1e5f64, b in -1e5f64..1e5f64) {
            let r1 = Calculator::multiply(a, b);
            let r2 = Calculator::multiply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "Commutativity violated"),
            }
        }

        #[test]
        fn prop_add_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Calculator::add(a, 0.0), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = Calculator::divide(a, a).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-10);
        }

        #[test]
        fn prop_glyph_roundtrip(op in prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]) {
            prop_assert_eq!(Operator::from_glyph(op.glyph()), Some(op));
            prop_assert_eq!(Operator::from_glyph(op.symbol()), Some(op));
        }
    }
}
