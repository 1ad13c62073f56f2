//! Keypad Calculator
//!
//! A four-function calculator driven by button presses, the way a phone
//! calculator screen works: digits build up an operand, an operator makes
//! the operand pending, `=` applies it. Evaluation is strictly left to
//! right with a single pending operation, so `2 + 3 × 4 =` shows `20`.
//!
//! The engine never fails. Division by zero shows `0`, over-long input is
//! dropped and an early `=` is ignored.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press_all(parse_key_script("1÷3=").unwrap());
//! assert_eq!(engine.display(), "0.33333333");
//!
//! engine.clear();
//! engine.enter_digit(Digit::new(7).unwrap());
//! engine.enter_operator(Operator::Add);
//! engine.enter_operator(Operator::Subtract);
//! engine.enter_digit(Digit::new(2).unwrap());
//! engine.press_equals();
//! assert_eq!(engine.display(), "5");
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

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, UiConfig};
    pub use crate::core::format::{parse_operand, stringify};
    pub use crate::core::{
        evaluate, parse_key_script, CalcError, CalcResult, Digit, Engine, EngineLimits, Key,
        Operator,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad};
}
