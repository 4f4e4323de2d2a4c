//! Expression accumulator state machine
//!
//! `CalcState` is a plain value. Every keypad input maps the current state to a
//! new one and nothing else; side effects live in [`crate::session`].

use serde::{Deserialize, Serialize};

use crate::core::evaluator::Evaluator;
use crate::core::format::format_number;
use crate::core::{CalcResult, Digit, Operation};

/// Text shown after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a freshly mounted or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// One keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// A digit key (0-9)
    Digit(Digit),
    /// An operator key
    Operator(Operation),
    /// The decimal point key
    Decimal,
    /// The AC key
    Clear,
    /// The `=` key
    Equals,
}

impl KeypadAction {
    /// Maps a keyboard character to a keypad action.
    ///
    /// Accepts the display characters plus the usual typographic aliases
    /// (`×`, `x`, `÷`, `−`).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(c) {
            return Some(Self::Digit(digit));
        }
        let action = match c {
            '+' => Self::Operator(Operation::Add),
            '-' | '−' => Self::Operator(Operation::Subtract),
            '*' | 'x' | 'X' | '×' => Self::Operator(Operation::Multiply),
            '/' | '÷' => Self::Operator(Operation::Divide),
            '.' => Self::Decimal,
            '=' => Self::Equals,
            'c' | 'C' => Self::Clear,
            _ => return None,
        };
        Some(action)
    }

    /// Returns the canonical keystroke for this action
    #[must_use]
    pub const fn to_char(&self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Operator(op) => op.symbol(),
            Self::Decimal => '.',
            Self::Clear => 'C',
            Self::Equals => '=',
        }
    }

    /// Returns the button label shown on the keypad
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(Operation::Add) => "+".to_string(),
            Self::Operator(Operation::Subtract) => "−".to_string(),
            Self::Operator(Operation::Multiply) => "×".to_string(),
            Self::Operator(Operation::Divide) => "÷".to_string(),
            Self::Decimal => ".".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// Accumulator state: the display text plus the entry flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcState {
    display: String,
    last_result: String,
    is_new_number: bool,
    is_decimal: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// Creates the mount-time state: display `"0"`, awaiting a new number
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            last_result: String::new(),
            is_new_number: true,
            is_decimal: false,
        }
    }

    /// Creates a state with an arbitrary display (for tests and replays).
    ///
    /// The flags describe an operand in progress: `is_new_number` is false
    /// and `is_decimal` reflects the trailing operand.
    #[must_use]
    pub fn with_display(display: impl Into<String>) -> Self {
        let display = display.into();
        let is_decimal = current_operand(&display).contains('.');
        Self {
            display,
            last_result: String::new(),
            is_new_number: false,
            is_decimal,
        }
    }

    /// The text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The most recent successful result, empty if none since the last clear
    #[must_use]
    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// True when the next digit starts a fresh operand
    #[must_use]
    pub fn is_new_number(&self) -> bool {
        self.is_new_number
    }

    /// True when the operand being typed already has a decimal point
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        self.is_decimal
    }

    /// True when the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Applies one keypad action
    #[must_use]
    pub fn apply(&self, action: KeypadAction) -> Self {
        match action {
            KeypadAction::Digit(d) => self.enter_digit(d),
            KeypadAction::Operator(op) => self.enter_operator(op),
            KeypadAction::Decimal => self.enter_decimal(),
            KeypadAction::Clear => self.clear(),
            KeypadAction::Equals => self.evaluate(),
        }
    }

    /// Enters a digit: starts a new operand or appends to the current one
    #[must_use]
    pub fn enter_digit(&self, digit: Digit) -> Self {
        let mut next = self.clone();
        if next.is_new_number {
            next.display = digit.to_string();
            next.is_new_number = false;
        } else {
            next.display.push(digit.as_char());
        }
        next
    }

    /// Enters an operator.
    ///
    /// A trailing operator is replaced, except that `-` may follow another
    /// operator to start a negative operand (`"5*"` becomes `"5*-"`).
    #[must_use]
    pub fn enter_operator(&self, op: Operation) -> Self {
        let mut next = self.clone();
        let symbol = op.symbol();

        match next.display.chars().last() {
            Some(last) if Operation::is_symbol(last) => {
                if symbol == '-' && last != '-' {
                    next.display.push(symbol);
                } else {
                    next.display.pop();
                    // Adjacent operators are only allowed when the second is '-',
                    // so a non-minus operator replaces the whole run ("5*-" + '+' -> "5+")
                    if symbol != '-'
                        && next.display.chars().last().is_some_and(Operation::is_symbol)
                    {
                        next.display.pop();
                    }
                    next.display.push(symbol);
                }
            }
            _ => next.display.push(symbol),
        }

        next.is_new_number = false;
        next.is_decimal = false;
        next
    }

    /// Enters a decimal point, at most one per operand
    #[must_use]
    pub fn enter_decimal(&self) -> Self {
        let mut next = self.clone();
        if next.is_new_number {
            next.display = "0.".to_string();
            next.is_new_number = false;
            next.is_decimal = true;
        } else if !next.is_decimal && !current_operand(&next.display).contains('.') {
            next.display.push('.');
            next.is_decimal = true;
        }
        next
    }

    /// Resets everything to the mount-time state
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Evaluates the display. Invalid expressions show `"Error"`.
    #[must_use]
    pub fn evaluate(&self) -> Self {
        self.evaluate_detailed().0
    }

    /// Evaluates the display and also returns the raw outcome, so callers can
    /// report why an expression was rejected.
    #[must_use]
    pub fn evaluate_detailed(&self) -> (Self, CalcResult<f64>) {
        let outcome = Evaluator::new().evaluate_str(&self.display);
        let mut next = self.clone();

        match &outcome {
            Ok(value) => {
                let text = format_number(*value);
                next.is_decimal = text.contains('.');
                next.display.clone_from(&text);
                next.last_result = text;
            }
            Err(_) => {
                next.display = ERROR_DISPLAY.to_string();
            }
        }
        next.is_new_number = true;

        (next, outcome)
    }
}

/// Text after the last operator character, or the whole display
fn current_operand(display: &str) -> &str {
    display
        .rsplit(Operation::is_symbol)
        .next()
        .unwrap_or(display)
}
