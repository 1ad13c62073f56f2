//! Terminal front end: renders `equation` and `display` above a clickable
//! keypad and forwards key presses to the engine.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorUI, UiLayout, HELP_LINE};
