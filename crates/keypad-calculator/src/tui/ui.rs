//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Key help shown under the keypad
pub const HELP_LINE: &str = "0-9 . +-*/ = | Esc: clear | q: quit";

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Equation and display panel
    pub display: Rect,
    /// Keypad, including its border
    pub keypad: Rect,
    /// Help line (zero-sized when hidden)
    pub help: Rect,
}

impl UiLayout {
    /// Splits the frame area into display, keypad and help regions
    #[must_use]
    pub fn compute(area: Rect, show_help: bool) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let help_height = u16::from(show_help);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),           // Equation + display
                Constraint::Min(7),              // Keypad
                Constraint::Length(help_height), // Help
            ])
            .split(inner);

        Self {
            display: chunks[0],
            keypad: chunks[1],
            help: chunks[2],
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                self.app.equation().to_string(),
                Style::default().fg(Color::Gray),
            ),
            Line::styled(
                self.app.display().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ui = self.app.ui();
        Block::default()
            .title(format!(" {} ", ui.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .render(area, buf);

        let layout = UiLayout::compute(area, ui.show_help);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);

        if ui.show_help {
            Paragraph::new(HELP_LINE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .render(layout.help, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::core::{parse_key_script, EngineLimits};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 24);
        Terminal::new(backend).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn app_with(script: &str) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for key in parse_key_script(script).unwrap() {
            app.press(key);
        }
        app
    }

    #[test]
    fn test_render_initial_state() {
        let mut terminal = create_test_terminal();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();
        let content = screen(&terminal);
        assert!(content.contains("Calculator"));
        assert!(content.contains('0'));
        assert!(content.contains("[C]"));
    }

    #[test]
    fn test_render_shows_equation_and_display() {
        let mut terminal = create_test_terminal();
        let app = app_with("12+34");
        terminal.draw(|f| render(&app, f)).unwrap();
        let content = screen(&terminal);
        assert!(content.contains("12 + 34"));
        assert!(content.contains("34"));
    }

    #[test]
    fn test_render_result() {
        let mut terminal = create_test_terminal();
        let app = app_with("1÷3=");
        terminal.draw(|f| render(&app, f)).unwrap();
        assert!(screen(&terminal).contains("0.33333333"));
    }

    #[test]
    fn test_render_help_toggle() {
        let mut terminal = create_test_terminal();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();
        assert!(screen(&terminal).contains("q: quit"));

        let hidden = CalculatorApp::with_config(
            EngineLimits::default(),
            UiConfig {
                show_help: false,
                ..UiConfig::default()
            },
        );
        let mut terminal = create_test_terminal();
        terminal.draw(|f| render(&hidden, f)).unwrap();
        assert!(!screen(&terminal).contains("q: quit"));
    }

    #[test]
    fn test_help_line_fits_narrow_frame() {
        let inner = UiLayout::compute(Rect::new(0, 0, 40, 24), true).help;
        assert!(HELP_LINE.chars().count() <= usize::from(inner.width));
    }

    #[test]
    fn test_render_custom_title() {
        let app = CalculatorApp::with_config(
            EngineLimits::default(),
            UiConfig {
                title: "Pocket".into(),
                ..UiConfig::default()
            },
        );
        let mut terminal = create_test_terminal();
        terminal.draw(|f| render(&app, f)).unwrap();
        assert!(screen(&terminal).contains("Pocket"));
    }

    #[test]
    fn test_render_small_terminal() {
        let backend = TestBackend::new(10, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn test_layout_regions_stack() {
        let layout = UiLayout::compute(Rect::new(0, 0, 40, 24), true);
        assert_eq!(layout.display.height, 4);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.keypad.y, layout.display.bottom());
        assert_eq!(layout.help.y, layout.keypad.bottom());
        assert_eq!(layout.keypad.height, 24 - 2 - 4 - 1);
    }

    #[test]
    fn test_layout_without_help() {
        let layout = UiLayout::compute(Rect::new(0, 0, 40, 24), false);
        assert_eq!(layout.help.height, 0);
        assert_eq!(layout.keypad.height, 24 - 2 - 4);
    }

    #[test]
    fn test_layout_keypad_accepts_clicks() {
        let layout = UiLayout::compute(Rect::new(0, 0, 40, 24), true);
        let mut app = CalculatorApp::new();
        let k = layout.keypad;
        // Top-left button is C.
        let key = app.click(k, k.x + 1, k.y + 1);
        assert_eq!(key.map(|k| k.label()), Some('C'));
    }
}
