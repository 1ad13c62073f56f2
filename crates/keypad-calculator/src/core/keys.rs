//! Discrete input events fed to the engine
//!
//! One `Key` corresponds to one button tap. Key scripts are plain strings of
//! button glyphs, e.g. `"12+7×3="`.

use std::fmt;

use crate::core::{CalcError, CalcResult, Operator};

/// A single decimal digit, `0` through `9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` if `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Character for the digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or(c)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit button
    Digit(Digit),
    /// One of `+ - × ÷`
    Operator(Operator),
    /// The `.` button
    Decimal,
    /// The `=` button
    Equals,
    /// The `C` button
    Clear,
}

impl Key {
    /// Maps a typed character to a key.
    ///
    /// `,` is accepted as a decimal point and `c`/`C` as clear.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(c) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' | ',' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }

    /// The label printed on the keypad button
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Operator(op) => op.symbol(),
            Self::Decimal => '.',
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a key script into key presses. Whitespace is skipped.
pub fn parse_key_script(script: &str) -> CalcResult<Vec<Key>> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| Key::from_char(c).ok_or(CalcError::UnknownKey { key: c, position }))
        .collect()
}
