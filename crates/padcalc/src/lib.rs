//! Padcalc - a four-function keypad calculator
//!
//! The calculator is driven one keypad button at a time. Digits, operators and
//! the decimal point accumulate into a display string; `=` parses that string
//! with the usual precedence rules and replaces it with the result (or
//! `Error`).
//!
//! # Layers
//!
//! - [`core`]: the pure accumulator ([`core::CalcState`]), parser, evaluator
//!   and number formatting
//! - [`session`]: a stateful [`session::Calculator`] that notifies observers
//!   after every key press
//! - [`keypad`]: the 4x5 button grid shared by every front-end
//! - [`driver`]: a front-end agnostic driver trait plus reusable scenarios
//! - `tui`: terminal front-end (feature `tui`)
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let state = CalcState::new()
//!     .enter_digit(Digit::new(7).unwrap())
//!     .enter_operator(Operation::Multiply)
//!     .enter_digit(Digit::new(6).unwrap())
//!     .evaluate();
//! assert_eq!(state.display(), "42");
//! assert_eq!(state.last_result(), "42");
//!
//! let mut calc = Calculator::new();
//! calc.press_keys("0.1+0.2=").unwrap();
//! assert_eq!(calc.display(), "0.30000000000000004");
//! ```

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
pub mod driver;
pub mod keypad;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::format_number;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        CalcError, CalcResult, CalcState, Digit, KeypadAction, Operation, ERROR_DISPLAY,
        INITIAL_DISPLAY,
    };
    pub use crate::driver::{parse_script, CalculatorDriver};
    pub use crate::keypad::{Keypad, KeypadButton};
    pub use crate::session::{Calculator, ResultLogger, StateObserver, TitleObserver};

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
