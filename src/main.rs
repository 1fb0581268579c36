pub mod app_dirs;
pub mod fast;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;

use crate::{
    fast::Fast,
    runtime::{AppEvent, CrosstermEventSource, Runner},
    session::{FileSessionStore, SessionStore},
};
use chrono::Utc;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// minimal intermittent fasting timer tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal single-screen intermittent fasting timer. Start or stop the fast with the space bar; elapsed time and progress toward the one hour target survive restarts."
)]
pub struct Cli {
    /// override the session state file location
    #[clap(long)]
    state_file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct App<S: SessionStore> {
    pub fast: Fast<S>,
}

impl<S: SessionStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            fast: Fast::new(store),
        }
    }
}

/// What a key press means, decoupled from the terminal loop for testability
#[derive(Debug, Clone, Copy, PartialEq)]
enum KeyAction {
    Toggle,
    Reset,
    Quit,
    Ignore,
}

fn key_action(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Toggle,
        KeyCode::Char('r') => KeyAction::Reset,
        _ => KeyAction::Ignore,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store = match &cli.state_file {
        Some(path) => FileSessionStore::with_path(path),
        None => FileSessionStore::new(),
    };
    let mut app = App::new(store);
    app.fast.on_foreground(Utc::now());

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            AppEvent::Tick => {
                // Redraw only while counting; an idle screen is static
                if app.fast.is_counting() {
                    app.fast.tick(Utc::now());
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            AppEvent::Key(key) => {
                match key_action(&key) {
                    KeyAction::Quit => break,
                    KeyAction::Toggle => app.fast.toggle(Utc::now()),
                    KeyAction::Reset => app.fast.reset(),
                    KeyAction::Ignore => {}
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn ui<S: SessionStore>(app: &App<S>, f: &mut Frame) {
    f.render_widget(app, f.area());
}
