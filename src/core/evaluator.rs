//! AST evaluator

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Calculator};

/// Evaluator for AST expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                Ok(-value)
            }
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                Calculator::calculate(left_val, right_val, *op)
            }
        }
    }

    /// Evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operator};

    #[test]
    fn test_evaluate_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negative_number() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::number(5.0));
        assert_eq!(eval.evaluate(&ast), Ok(-5.0));
    }

    #[test]
    fn test_evaluate_double_negative() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(eval.evaluate(&ast), Ok(5.0));
    }

    #[test]
    fn test_evaluate_nested_expression() {
        let eval = Evaluator::new();
        // (2 + 3) * 4 = 20
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(2.0), Operator::Add, AstNode::number(3.0)),
            Operator::Multiply,
            AstNode::number(4.0),
        );
        assert_eq!(eval.evaluate(&ast), Ok(20.0));
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        let eval = Evaluator::new();
        let ast = AstNode::binary(
            AstNode::number(10.0),
            Operator::Divide,
            AstNode::number(0.0),
        );
        assert_eq!(eval.evaluate(&ast), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_error_propagates_from_right() {
        let eval = Evaluator::new();
        // 5 + (10 / 0)
        let ast = AstNode::binary(
            AstNode::number(5.0),
            Operator::Add,
            AstNode::binary(
                AstNode::number(10.0),
                Operator::Divide,
                AstNode::number(0.0),
            ),
        );
        assert!(matches!(
            eval.evaluate(&ast),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn test_evaluate_str_simple() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2 + 3 * 4"), Ok(14.0)); // 2 + (3*4)
    }

    #[test]
    fn test_evaluate_str_unary_minus() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("-5"), Ok(-5.0));
        assert_eq!(eval.evaluate_str("-5 + 10"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_str_all_operators() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("10 + 5"), Ok(15.0));
        assert_eq!(eval.evaluate_str("10 - 3"), Ok(7.0));
        assert_eq!(eval.evaluate_str("6 * 7"), Ok(42.0));
        assert_eq!(eval.evaluate_str("20 / 4"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_str_empty() {
        let eval = Evaluator::new();
        assert!(matches!(
            eval.evaluate_str(""),
            Err(CalcError::EmptyExpression)
        ));
    }

    #[test]
    fn test_evaluate_str_invalid() {
        let eval = Evaluator::new();
        assert!(matches!(
            eval.evaluate_str("2 +"),
            Err(CalcError::ParseError(_))
        ));
    }
}
