//! On-screen keypad
//!
//! Buttons sit on a 5x4 grid laid out like the phone screen:
//!
//! ```text
//! [ C ] [ ÷ ] [ × ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ]
//! [ 1 ] [ 2 ] [ 3 ]
//! [    0    ] [ . ] [ = ]
//! ```
//!
//! The keypad can be clicked with the mouse and highlights the button for
//! the last key pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Digit, Key, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button sends
    pub key: Key,
    /// Grid row
    pub row: usize,
    /// First grid column covered
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.key.label()
    }

    /// True if the button covers grid cell `(row, col)`
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digits: Vec<Key> = (0..=9).filter_map(Digit::new).map(Key::Digit).collect();
        let op = Key::Operator;

        let mut buttons = vec![
            KeypadButton::new(Key::Clear, 0, 0),
            KeypadButton::new(op(Operator::Divide), 0, 1),
            KeypadButton::new(op(Operator::Multiply), 0, 2),
            KeypadButton::new(op(Operator::Subtract), 0, 3),
        ];
        for (row, first) in [(1, 7), (2, 4), (3, 1)] {
            for col in 0..3 {
                buttons.push(KeypadButton::new(digits[first + col], row, col));
            }
        }
        buttons.push(KeypadButton::new(op(Operator::Add), 1, 3));
        buttons.push(KeypadButton::new(digits[0], 4, 0).wide(2));
        buttons.push(KeypadButton::new(Key::Decimal, 4, 2));
        buttons.push(KeypadButton::new(Key::Equals, 4, 3));

        Self {
            buttons,
            cols: 4,
            rows: 5,
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

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Returns the currently highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Highlights the button for `key`, releasing any other
    pub fn highlight(&mut self, key: Key) {
        for btn in &mut self.buttons {
            btn.pressed = btn.key == key;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Converts a click position inside the bordered `area` to a key
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let btn_width = inner.width / self.cols as u16;
        let btn_height = inner.height / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;
        self.button_at(row, col).map(|b| b.key)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.key {
        Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White),
        Key::Operator(_) => Style::default().fg(Color::Blue),
        Key::Equals => Style::default().fg(Color::Green),
        Key::Clear => Style::default().fg(Color::Red),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = inner_area(area);
        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 * 3 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;
            let width = btn_width * btn.span as u16;

            let label = format!("[{}]", btn.label());
            let label_x = x + width.saturating_sub(3) / 2;
            buf.set_span(label_x, y, &Span::styled(label, button_style(btn)), width);
        }
    }
}
