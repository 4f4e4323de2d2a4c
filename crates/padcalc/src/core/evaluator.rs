//! AST evaluator
//!
//! Plain `f64` arithmetic: infinities and NaN propagate instead of failing.

use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node. Always succeeds; arithmetic faults yield
    /// infinities or NaN.
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number(n) => *n,
            AstNode::Negate(inner) => -self.evaluate(inner),
            AstNode::BinaryOp { left, op, right } => {
                op.apply(self.evaluate(left), self.evaluate(right))
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        Ok(self.evaluate(&ast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operation};

    // ===== AST evaluation =====

    #[test]
    fn test_evaluate_number() {
        assert_eq!(Evaluator::new().evaluate(&AstNode::number(42.0)), 42.0);
    }

    #[test]
    fn test_evaluate_negate() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate(&AstNode::negate(AstNode::number(5.0))), -5.0);
        assert_eq!(
            eval.evaluate(&AstNode::negate(AstNode::negate(AstNode::number(5.0)))),
            5.0
        );
    }

    #[test]
    fn test_evaluate_binary() {
        let eval = Evaluator::new();
        let ast = AstNode::binary(AstNode::number(12.0), Operation::Divide, AstNode::number(4.0));
        assert_eq!(eval.evaluate(&ast), 3.0);
    }

    #[test]
    fn test_evaluate_nested() {
        let eval = Evaluator::new();
        // 1 + 2 * 3
        let ast = AstNode::binary(
            AstNode::number(1.0),
            Operation::Add,
            AstNode::binary(AstNode::number(2.0), Operation::Multiply, AstNode::number(3.0)),
        );
        assert_eq!(eval.evaluate(&ast), 7.0);
    }

    // ===== String evaluation =====

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("10-4/2"), Ok(8.0));
        assert_eq!(eval.evaluate_str("2*3+4*5"), Ok(26.0));
    }

    #[test]
    fn test_evaluate_str_left_to_right() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("8/4/2"), Ok(1.0));
        assert_eq!(eval.evaluate_str("10-3-2"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_str_unary_minus() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("5*-3"), Ok(-15.0));
        assert_eq!(eval.evaluate_str("-5+10"), Ok(5.0));
        assert_eq!(eval.evaluate_str("6/-2"), Ok(-3.0));
    }

    #[test]
    fn test_evaluate_str_division_by_zero() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("9/0"), Ok(f64::INFINITY));
        assert_eq!(eval.evaluate_str("-9/0"), Ok(f64::NEG_INFINITY));
        assert!(eval.evaluate_str("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_str_continues_non_finite_results() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("Infinity+1"), Ok(f64::INFINITY));
        assert!(eval.evaluate_str("Infinity-Infinity").unwrap().is_nan());
        assert!(eval.evaluate_str("NaN*2").unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_str_decimals() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("0.5+0.25"), Ok(0.75));
        assert_eq!(eval.evaluate_str("2.+3"), Ok(5.0));
        assert_eq!(eval.evaluate_str("5+.5"), Ok(5.5));
    }

    #[test]
    fn test_evaluate_str_errors() {
        let eval = Evaluator::new();
        for input in ["", "5+", "5*-", "Error", "+", "1..2"] {
            assert!(
                matches!(eval.evaluate_str(input), Err(CalcError::InvalidExpression(_))),
                "{input:?} should be invalid"
            );
        }
    }
}
