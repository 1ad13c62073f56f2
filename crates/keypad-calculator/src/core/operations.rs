//! The four binary operators and the pure evaluation helper
//!
//! Division by zero is not an error here: it evaluates to `0`, the same as
//! the phone keypad this calculator mirrors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::format::round_to;
use crate::core::EngineLimits;

/// A binary operator selectable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    /// All operators in keypad order (top row, left to right, then `+`)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the button and written to the equation log
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Besides the button glyphs this accepts the usual keyboard stand-ins:
    /// `*`, `x` and `X` for multiplication and `/` for division.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator without any rounding
    #[must_use]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    0.0
                } else {
                    left / right
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluates `left op right`, rounded to the default eight fractional digits
#[must_use]
pub fn evaluate(op: Operator, left: f64, right: f64) -> f64 {
    evaluate_with_precision(op, left, right, EngineLimits::DEFAULT_PRECISION)
}

/// Evaluates `left op right` and rounds to `precision` fractional digits.
///
/// A result that leaves the finite range degrades to `0`, so the display
/// always holds a parseable number.
#[must_use]
pub fn evaluate_with_precision(op: Operator, left: f64, right: f64, precision: usize) -> f64 {
    let raw = op.apply(left, right);
    if !raw.is_finite() {
        tracing::warn!(
            operator = %op,
            left,
            right,
            "non-finite result replaced with 0"
        );
        return 0.0;
    }
    round_to(raw, precision)
}
