//! TUI application state

use ratatui::layout::Rect;

use crate::config::UiConfig;
use crate::core::{Engine, EngineLimits, Key};

use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    ui: UiConfig,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineLimits::default(), UiConfig::default())
    }

    /// Creates a calculator app with custom limits and UI settings
    #[must_use]
    pub fn with_config(limits: EngineLimits, ui: UiConfig) -> Self {
        Self {
            engine: Engine::with_limits(limits),
            keypad: Keypad::new(),
            ui,
            should_quit: false,
        }
    }

    /// The underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Operand text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Keystroke log
    #[must_use]
    pub fn equation(&self) -> &str {
        self.engine.equation()
    }

    /// The keypad, including highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// UI settings
    #[must_use]
    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key and highlights its button
    pub fn press(&mut self, key: Key) {
        self.keypad.highlight(key);
        self.engine.press(key);
    }

    /// Handles a mouse click at `(x, y)` on a keypad drawn in `area`.
    ///
    /// Returns the key that was pressed, if the click hit a button.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Option<Key> {
        let key = self.keypad.hit_test(area, x, y)?;
        self.press(key);
        Some(key)
    }

    /// Drops the button highlight
    pub fn release(&mut self) {
        self.keypad.release_all();
    }
}
