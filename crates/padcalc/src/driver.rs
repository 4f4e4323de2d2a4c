//! Front-end independent calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against every front-end (the bare session, the terminal app, ...).

use crate::core::{CalcError, CalcResult, CalcState, KeypadAction};
use crate::session::Calculator;

/// Abstract driver for keypad interactions
pub trait CalculatorDriver {
    /// Presses one keypad button
    fn press(&mut self, action: KeypadAction);

    /// Current accumulator state
    fn state(&self) -> &CalcState;

    /// Current display text
    fn display(&self) -> &str {
        self.state().display()
    }

    /// Presses the buttons for each character of `script`.
    ///
    /// Whitespace is ignored; unknown characters stop the script with
    /// [`CalcError::UnknownKey`] before any further key is pressed.
    fn press_keys(&mut self, script: &str) -> CalcResult<()> {
        let actions = parse_script(script)?;
        for action in actions {
            self.press(action);
        }
        Ok(())
    }
}

/// Converts a keystroke script such as `"12+3="` into keypad actions
pub fn parse_script(script: &str) -> CalcResult<Vec<KeypadAction>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| KeypadAction::from_char(c).ok_or(CalcError::UnknownKey(c)))
        .collect()
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: KeypadAction) {
        Calculator::press(self, action);
    }

    fn state(&self) -> &CalcState {
        Calculator::state(self)
    }
}

// ===== Scenario checks =====
// Each check starts by clearing, so they can run back to back on one driver.

fn run<D: CalculatorDriver>(driver: &mut D, script: &str) {
    driver.press(KeypadAction::Clear);
    driver
        .press_keys(script)
        .expect("scenario scripts only use keypad characters");
}

/// Digits typed after a clear are concatenated verbatim
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "005");
    assert_eq!(driver.display(), "005");

    run(driver, "1234567890");
    assert_eq!(driver.display(), "1234567890");
}

/// Basic evaluation and operator precedence
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "5+3=");
    assert_eq!(driver.display(), "8");
    assert!(driver.state().is_new_number());

    run(driver, "2+3*4=");
    assert_eq!(driver.display(), "14");

    run(driver, "5*-3=");
    assert_eq!(driver.display(), "-15");
}

/// Decimal point entry rules
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    run(driver, ".");
    assert_eq!(driver.display(), "0.");
    assert!(driver.state().is_decimal());

    run(driver, "1.5.");
    assert_eq!(driver.display(), "1.5");

    run(driver, "1.5+2.25=");
    assert_eq!(driver.display(), "3.75");
}

/// Invalid expressions and non-finite results
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "5+=");
    assert_eq!(driver.display(), "Error");

    driver.press_keys("7").expect("digit");
    assert_eq!(driver.display(), "7");

    run(driver, "9/0=");
    assert_eq!(driver.display(), "Infinity");
}

/// Clear after an evaluation resets display and last result
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    run(driver, "6*7=");
    assert_eq!(driver.state().last_result(), "42");

    driver.press(KeypadAction::Clear);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.state().last_result(), "");
}

/// Runs every scenario check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_arithmetic(driver);
    verify_decimal_entry(driver);
    verify_error_handling(driver);
    verify_clear(driver);
}
