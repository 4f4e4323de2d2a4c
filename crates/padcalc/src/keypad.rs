//! Keypad layout shared by every front-end
//!
//! A 4 column x 5 row grid. `AC` and `0` are double width, `=` is double height:
//!
//! ```text
//! [   AC    ] [ ÷ ] [ × ]
//! [ 7 ] [ 8 ] [ 9 ] [ − ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [    0    ] [ . ] [   ]
//! ```

use crate::core::{Digit, KeypadAction, Operation};

/// A button placed on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// Top row (0-indexed)
    pub row: usize,
    /// Left column (0-indexed)
    pub col: usize,
    /// Number of rows covered
    pub row_span: usize,
    /// Number of columns covered
    pub col_span: usize,
}

impl KeypadButton {
    /// Creates a single-cell button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    /// Makes the button span two columns
    #[must_use]
    pub fn double_width(mut self) -> Self {
        self.col_span = 2;
        self
    }

    /// Makes the button span two rows
    #[must_use]
    pub fn double_height(mut self) -> Self {
        self.row_span = 2;
        self
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Returns true if the button covers grid cell (row, col)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.col..self.col + self.col_span).contains(&col)
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in reading order
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Grid rows
    pub const ROWS: usize = 5;
    /// Grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let d = |n: u8| Digit::new(n).map(KeypadAction::Digit);
        let op = KeypadAction::Operator;

        let mut buttons = vec![
            // Row 0: AC ÷ ×
            KeypadButton::new(KeypadAction::Clear, 0, 0).double_width(),
            KeypadButton::new(op(Operation::Divide), 0, 2),
            KeypadButton::new(op(Operation::Multiply), 0, 3),
        ];
        // Rows 1-3: digit triplets, right column operator or '='
        let right_column = [
            KeypadButton::new(op(Operation::Subtract), 1, 3),
            KeypadButton::new(op(Operation::Add), 2, 3),
            KeypadButton::new(KeypadAction::Equals, 3, 3).double_height(),
        ];
        for (row, right) in (1..=3).zip(right_column) {
            let first = 7 - 3 * (row as u8 - 1);
            for col in 0..3 {
                if let Ok(action) = d(first + col as u8) {
                    buttons.push(KeypadButton::new(action, row, col));
                }
            }
            buttons.push(right);
        }
        // Row 4: 0 .
        if let Ok(zero) = d(0) {
            buttons.push(KeypadButton::new(zero, 4, 0).double_width());
        }
        buttons.push(KeypadButton::new(KeypadAction::Decimal, 4, 2));

        Self {
            buttons,
            rows: Self::ROWS,
            cols: Self::COLS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering (row, col), honoring spans
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering (row, col)
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button performing `action`
    #[must_use]
    pub fn find_by_action(&self, action: KeypadAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Finds the button a keyboard character would press
    #[must_use]
    pub fn find_by_char(&self, c: char) -> Option<usize> {
        KeypadAction::from_char(c).and_then(|a| self.find_by_action(a))
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Renders the grid as plain text, one line per row
    #[must_use]
    pub fn render_text(&self, cell_width: usize) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let mut col = 0;
            while col < self.cols {
                let width = cell_width.max(3);
                match self.button_at(row, col) {
                    Some(btn) if btn.row == row && btn.col == col => {
                        let span_width = width * btn.col_span + (btn.col_span - 1);
                        out.push_str(&format!("[{:^w$}]", btn.label(), w = span_width - 2));
                        col += btn.col_span;
                    }
                    // Continuation of a taller button from the row above
                    Some(btn) => {
                        let span_width = width * btn.col_span + (btn.col_span - 1);
                        out.push_str(&format!("[{:^w$}]", "", w = span_width - 2));
                        col += btn.col_span;
                    }
                    None => {
                        out.push_str(&" ".repeat(width));
                        col += 1;
                    }
                }
                if col < self.cols {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}
