//! Calculator core: the input/evaluation engine and its supporting types
//!
//! Nothing in here renders anything. The engine is fed discrete key events
//! and exposes two strings, `display` and `equation`, for whatever front end
//! sits on top.

pub mod engine;
pub mod format;
pub mod keys;
mod operations;

pub use engine::Engine;
pub use keys::{parse_key_script, Digit, Key};
pub use operations::{evaluate, Operator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the edges of the calculator.
///
/// The engine itself never fails: every odd input degrades to a defined
/// next state. These variants cover key scripts, configuration and I/O.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A key script contained a character that maps to no button
    #[error("Unknown key {key:?} at position {position}")]
    UnknownKey {
        /// The offending character
        key: char,
        /// Character index within the script
        position: usize,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Engine limits that would break the display invariants
    #[error("Invalid engine limits: {message}")]
    InvalidLimits {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid limits error
    #[must_use]
    pub fn invalid_limits(message: impl Into<String>) -> Self {
        Self::InvalidLimits {
            message: message.into(),
        }
    }
}

/// Length and precision bounds applied by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineLimits {
    /// Digits are appended to `display` only while it is shorter than this
    pub max_display_len: usize,
    /// A decimal point is appended only while `display` is shorter than this
    pub max_len_for_decimal: usize,
    /// Fractional digits kept when rounding a computed result
    pub precision: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_display_len: Self::DEFAULT_MAX_DISPLAY_LEN,
            max_len_for_decimal: Self::DEFAULT_MAX_LEN_FOR_DECIMAL,
            precision: Self::DEFAULT_PRECISION,
        }
    }
}

impl EngineLimits {
    /// Default display length cap
    pub const DEFAULT_MAX_DISPLAY_LEN: usize = 12;
    /// Default length cap checked before adding a decimal point
    pub const DEFAULT_MAX_LEN_FOR_DECIMAL: usize = 11;
    /// Default rounding precision
    pub const DEFAULT_PRECISION: usize = 8;
    /// Beyond this, `f64` has no meaningful fractional digits left to keep
    pub const MAX_PRECISION: usize = 15;

    /// Checks that the limits leave room for at least one digit and that a
    /// decimal point can never push `display` past its cap.
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_display_len == 0 {
            return Err(CalcError::invalid_limits(
                "max_display_len must be at least 1",
            ));
        }
        if self.max_len_for_decimal == 0 {
            return Err(CalcError::invalid_limits(
                "max_len_for_decimal must be at least 1",
            ));
        }
        if self.max_len_for_decimal >= self.max_display_len {
            return Err(CalcError::invalid_limits(format!(
                "max_len_for_decimal ({}) must be smaller than max_display_len ({})",
                self.max_len_for_decimal, self.max_display_len
            )));
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(CalcError::invalid_limits(format!(
                "precision {} exceeds the maximum of {}",
                self.precision,
                Self::MAX_PRECISION
            )));
        }
        Ok(())
    }
}
