//! Unified calculator driver
//!
//! The behaviour checks in this module are written once against the
//! [`CalculatorDriver`] trait and run against every front end: the bare
//! engine and the TUI app.

use crate::core::{parse_key_script, CalcResult, Engine};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses every key in `script`, in order
    fn press_keys(&mut self, script: &str) -> CalcResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the current equation log
    fn equation(&self) -> String;

    /// Resets the calculator state
    fn clear(&mut self);
}

/// Driver that talks to an [`Engine`] directly
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press_keys(&mut self, script: &str) -> CalcResult<()> {
        self.engine.press_all(parse_key_script(script)?);
        Ok(())
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn equation(&self) -> String {
        self.engine.equation().to_string()
    }

    fn clear(&mut self) {
        self.engine.clear();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver};
    use crate::core::{CalcError, Key};
    use crate::tui::{CalculatorApp, InputHandler, KeyAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Driver that types into the TUI app through its keyboard handler
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        input: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_keys(&mut self, script: &str) -> CalcResult<()> {
            for (position, c) in script.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
                match self.input.handle_key(event) {
                    KeyAction::Press(key) => self.app.press(key),
                    KeyAction::Quit | KeyAction::None => {
                        return Err(CalcError::UnknownKey { key: c, position });
                    }
                }
            }
            self.app.release();
            Ok(())
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn equation(&self) -> String {
            self.app.equation().to_string()
        }

        fn clear(&mut self) {
            self.app.press(Key::Clear);
            self.app.release();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies the four operators and left-to-right chaining
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("5+3=").unwrap();
    assert_eq!(driver.display(), "8");
    driver.clear();

    driver.press_keys("10-4=").unwrap();
    assert_eq!(driver.display(), "6");
    driver.clear();

    driver.press_keys("6×7=").unwrap();
    assert_eq!(driver.display(), "42");
    driver.clear();

    driver.press_keys("20÷4=").unwrap();
    assert_eq!(driver.display(), "5");
    driver.clear();

    // No precedence: (2 + 3) × 4
    driver.press_keys("2+3×4=").unwrap();
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies the defined fallbacks for odd input
pub fn verify_edge_cases<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("9÷0=").unwrap();
    assert_eq!(driver.display(), "0");
    driver.clear();

    driver.press_keys("1..5").unwrap();
    assert_eq!(driver.display(), "1.5");
    driver.clear();

    driver.press_keys("7+-2=").unwrap();
    assert_eq!(driver.display(), "5");
    driver.clear();

    driver.press_keys("4+=").unwrap();
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.equation(), "4 + ");
    driver.clear();
}

/// Verifies rounding to eight fractional digits
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    driver.press_keys("1÷3=").unwrap();
    assert_eq!(driver.display(), "0.33333333");
    driver.clear();

    driver.press_keys(".1+.2=").unwrap();
    assert_eq!(driver.display(), "0.3");
    driver.clear();
}

/// Verifies the equation log and the display length cap
pub fn verify_equation_log<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.equation(), "");

    driver.press_keys("12+3.5×").unwrap();
    assert_eq!(driver.equation(), "12 + 3.5 × ");
    assert_eq!(driver.display(), "15.5");

    driver.press_keys("2=").unwrap();
    assert_eq!(driver.equation(), "");
    assert_eq!(driver.display(), "31");
    driver.clear();

    driver.press_keys("9999999999999").unwrap();
    assert_eq!(driver.display(), "999999999999");
    assert_eq!(driver.equation(), "9999999999999");
    driver.clear();
}

/// Complete verification suite - runs all checks
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_edge_cases(driver);
    verify_rounding(driver);
    verify_equation_log(driver);
}
