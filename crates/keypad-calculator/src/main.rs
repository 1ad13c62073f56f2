//! keypad-calc: terminal keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                          # Interactive keypad
//! keypad-calc --keys "2+3×4="          # Scripted: prints 20
//! keypad-calc --keys "12+3" --show-equation
//! keypad-calc --config calc.yaml -v --log-file calc.log
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calculator::config::AppConfig;
use keypad_calculator::core::{parse_key_script, CalcResult, Engine};
use keypad_calculator::tui::{render, CalculatorApp, InputHandler, KeyAction, UiLayout};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

/// How long a pressed button stays highlighted without further input
const HIGHLIGHT_TIMEOUT: Duration = Duration::from_millis(150);

/// Keypad calculator with left-to-right evaluation
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Press these keys and print the display instead of opening the keypad
    #[arg(short, long, value_name = "SCRIPT", allow_hyphen_values = true)]
    keys: Option<String>,

    /// In scripted mode, also print the equation log
    #[arg(long, requires = "keys")]
    show_equation: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match &cli.keys {
        Some(script) => run_script(&config, script, cli.show_equation),
        None => run_interactive(&config),
    }
}

fn init_tracing(cli: &Cli) -> CalcResult<()> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match (&cli.log_file, cli.keys.is_some()) {
        (Some(path), _) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, true) => builder.with_writer(io::stderr).init(),
        // The alternate screen owns the terminal; stay silent.
        (None, false) => {}
    }
    Ok(())
}

fn run_script(config: &AppConfig, script: &str, show_equation: bool) -> CalcResult<()> {
    let keys = parse_key_script(script)?;
    let mut engine = Engine::try_with_limits(config.engine)?;
    engine.press_all(keys);

    println!("{}", engine.display());
    if show_equation {
        println!("{}", engine.equation());
    }
    Ok(())
}

fn run_interactive(config: &AppConfig) -> CalcResult<()> {
    let mut session = TerminalSession::enter(config.ui.mouse)?;
    let mut app = CalculatorApp::with_config(config.engine, config.ui.clone());
    let result = run_app(&mut session.terminal, &mut app);
    session.leave()?;
    result
}

/// Raw-mode alternate screen; restored on drop if `leave` was never reached
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    active: bool,
}

impl TerminalSession {
    fn enter(mouse: bool) -> CalcResult<Self> {
        enable_raw_mode()?;
        if let Err(e) = Self::enter_screen(mouse) {
            restore_terminal();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                restore_terminal();
                Err(e.into())
            }
        }
    }

    fn enter_screen(mouse: bool) -> CalcResult<()> {
        let mut stdout = io::stdout();
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(())
    }

    fn leave(mut self) -> CalcResult<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        self.active = false;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            restore_terminal();
            let _ = self.terminal.show_cursor();
        }
    }
}

/// Best-effort teardown for error paths
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> CalcResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(app, f))?;

        if !event::poll(HIGHLIGHT_TIMEOUT)? {
            app.release();
            continue;
        }

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                KeyAction::Press(k) => app.press(k),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                let layout = UiLayout::compute(area, app.ui().show_help);
                app.click(layout.keypad, column, row);
            }
            _ => {}
        }
    }

    Ok(())
}
