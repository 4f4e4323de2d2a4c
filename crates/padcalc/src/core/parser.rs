//! Expression tokenizer and recursive descent parser
//!
//! Reads exactly the text the accumulator can produce: decimal literals
//! (optionally with an exponent), `Infinity`, `NaN` and the four operators.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator character
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            c if c.is_ascii_alphabetic() => self.read_word()?,
            c => {
                let op = Operation::from_symbol(c).ok_or_else(|| {
                    CalcError::invalid_expression(format!("unexpected character '{c}'"))
                })?;
                self.advance();
                // `++` and `--` are increment/decrement, never two signs
                if matches!(op, Operation::Add | Operation::Subtract)
                    && self.current_char() == Some(c)
                {
                    return Err(CalcError::invalid_expression(format!(
                        "unexpected '{c}{c}'"
                    )));
                }
                Token::Operator(op)
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }
        count
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;

        let mut digit_count = self.skip_digits();
        if self.current_char() == Some('.') {
            self.advance();
            digit_count += self.skip_digits();
        }
        if digit_count == 0 {
            return Err(CalcError::invalid_expression("'.' without digits"));
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            let sign_len = usize::from(matches!(self.peek_char(1), Some('+' | '-')));
            if !self
                .peek_char(1 + sign_len)
                .is_some_and(|c| c.is_ascii_digit())
            {
                return Err(CalcError::invalid_expression(format!(
                    "malformed exponent in '{}'",
                    &self.input[start..]
                )));
            }
            for _ in 0..=sign_len {
                self.advance();
            }
            self.skip_digits();
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::invalid_expression(format!("invalid number '{num_str}'")))?;

        Ok(Token::Number(value))
    }

    fn read_word(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        while self.current_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        match &self.input[start..self.pos] {
            "Infinity" => Ok(Token::Number(f64::INFINITY)),
            "NaN" => Ok(Token::Number(f64::NAN)),
            word => Err(CalcError::invalid_expression(format!(
                "unexpected identifier '{word}'"
            ))),
        }
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+') unary | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::invalid_expression("empty expression"));
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::invalid_expression(format!(
                "unexpected {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    /// Sign runs are folded iteratively so arbitrarily long prefixes such as
    /// `-+-+...1` cannot exhaust the stack.
    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let mut negative = false;
        loop {
            let token = self
                .advance()
                .cloned()
                .ok_or_else(|| CalcError::invalid_expression("unexpected end of expression"))?;

            match token {
                Token::Number(n) => {
                    let node = AstNode::number(n);
                    return Ok(if negative { AstNode::negate(node) } else { node });
                }
                Token::Operator(Operation::Subtract) => negative = !negative,
                Token::Operator(Operation::Add) => {}
                Token::Operator(op) => {
                    return Err(CalcError::invalid_expression(format!(
                        "unexpected operator '{}'",
                        op.symbol()
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input).tokenize().unwrap()
    }

    fn is_invalid(input: &str) -> bool {
        matches!(
            Parser::parse_str(input),
            Err(CalcError::InvalidExpression(_))
        )
    }

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_simple_expression() {
        assert_eq!(
            tokens("5+3"),
            vec![
                Token::Number(5.0),
                Token::Operator(Operation::Add),
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_all_operators() {
        let ops: Vec<_> = tokens("1+2-3*4/5")
            .into_iter()
            .filter(|t| matches!(t, Token::Operator(_)))
            .collect();
        assert_eq!(ops.len(), 4);
    }

    #[test]
    fn test_tokenize_leading_zeros_are_decimal() {
        assert_eq!(tokens("005"), vec![Token::Number(5.0)]);
        assert_eq!(tokens("010"), vec![Token::Number(10.0)]);
    }

    #[test]
    fn test_tokenize_trailing_and_leading_dot() {
        assert_eq!(tokens("2."), vec![Token::Number(2.0)]);
        assert_eq!(tokens(".5"), vec![Token::Number(0.5)]);
        assert_eq!(tokens("0."), vec![Token::Number(0.0)]);
    }

    #[test]
    fn test_tokenize_exponent_forms() {
        assert_eq!(tokens("1e+21"), vec![Token::Number(1e21)]);
        assert_eq!(tokens("1.5e-7"), vec![Token::Number(1.5e-7)]);
        assert_eq!(tokens("2E3"), vec![Token::Number(2000.0)]);
    }

    #[test]
    fn test_tokenize_malformed_exponent() {
        assert!(Tokenizer::new("1e").tokenize().is_err());
        assert!(Tokenizer::new("1e+").tokenize().is_err());
    }

    #[test]
    fn test_tokenize_special_words() {
        assert_eq!(tokens("Infinity"), vec![Token::Number(f64::INFINITY)]);
        match tokens("NaN").as_slice() {
            [Token::Number(n)] => assert!(n.is_nan()),
            other => panic!("unexpected tokens: {other:?}"),
        }
    }

    #[test]
    fn test_tokenize_rejects_error_text() {
        let err = Tokenizer::new("Error").tokenize().unwrap_err();
        assert!(err.to_string().contains("Error"));
    }

    #[test]
    fn test_tokenize_rejects_lone_dot() {
        assert!(Tokenizer::new(".").tokenize().is_err());
        assert!(Tokenizer::new("5+.").tokenize().is_err());
    }

    #[test]
    fn test_tokenize_rejects_double_signs() {
        assert!(Tokenizer::new("5--3").tokenize().is_err());
        assert!(Tokenizer::new("5++3").tokenize().is_err());
        // Mixed signs are fine
        assert!(Tokenizer::new("5+-3").tokenize().is_ok());
        assert!(Tokenizer::new("5-+3").tokenize().is_ok());
    }

    #[test]
    fn test_tokenize_rejects_unknown_characters() {
        for input in ["2^3", "(1)", "5%", "2x3"] {
            assert!(Tokenizer::new(input).tokenize().is_err(), "{input}");
        }
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        assert_eq!(tokens(" 1 + 2 ").len(), 3);
    }

    #[test]
    fn test_next_token_is_incremental() {
        let mut t = Tokenizer::new("12+3");
        assert_eq!(t.next_token().unwrap(), Some(Token::Number(12.0)));
        assert_eq!(t.next_token().unwrap(), Some(Token::Operator(Operation::Add)));
        assert_eq!(t.next_token().unwrap(), Some(Token::Number(3.0)));
        assert_eq!(t.next_token().unwrap(), None);
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_precedence() {
        let ast = Parser::parse_str("2+3*4").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(2.0),
                Operation::Add,
                AstNode::binary(AstNode::number(3.0), Operation::Multiply, AstNode::number(4.0)),
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        let ast = Parser::parse_str("8-3-2").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::binary(AstNode::number(8.0), Operation::Subtract, AstNode::number(3.0)),
                Operation::Subtract,
                AstNode::number(2.0),
            )
        );
    }

    #[test]
    fn test_parse_unary_minus_after_operator() {
        let ast = Parser::parse_str("5*-3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(5.0),
                Operation::Multiply,
                AstNode::negate(AstNode::number(3.0)),
            )
        );
    }

    #[test]
    fn test_parse_leading_minus() {
        assert_eq!(
            Parser::parse_str("-5").unwrap(),
            AstNode::negate(AstNode::number(5.0))
        );
    }

    #[test]
    fn test_parse_unary_plus_is_identity() {
        assert_eq!(Parser::parse_str("+5").unwrap(), AstNode::number(5.0));
    }

    #[test]
    fn test_parse_sign_run_folds_to_single_negation() {
        assert_eq!(
            Parser::parse_str("-+-+-7").unwrap(),
            AstNode::negate(AstNode::number(7.0))
        );
        assert_eq!(Parser::parse_str("- -7").unwrap(), AstNode::number(7.0));
    }

    #[test]
    fn test_parse_long_sign_run_does_not_overflow() {
        let even = format!("{}1", "-+".repeat(100_000));
        assert_eq!(Parser::parse_str(&even).unwrap(), AstNode::number(1.0));

        let odd = format!("+{}-1", "-+".repeat(100_000));
        assert_eq!(
            Parser::parse_str(&odd).unwrap(),
            AstNode::negate(AstNode::number(1.0))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(is_invalid(""));
        assert!(is_invalid("   "));
        assert!(is_invalid("5+"));
        assert!(is_invalid("5*-"));
        assert!(is_invalid("*5"));
        assert!(is_invalid("5*/3"));
        assert!(is_invalid("1.5.5"));
        assert!(is_invalid("Error"));
        assert!(is_invalid("Error+3"));
    }

    #[test]
    fn test_parse_empty_message() {
        let err = Parser::parse_str("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid expression: empty expression");
    }

    #[test]
    fn test_parse_direct_from_tokens() {
        let mut parser = Parser::new(vec![Token::Number(1.0)]);
        assert_eq!(parser.parse().unwrap(), AstNode::number(1.0));

        let mut empty = Parser::new(Vec::new());
        assert!(empty.parse().is_err());
    }
}
