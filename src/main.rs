pub mod config;
pub mod diff;
pub mod feedback;
pub mod metrics;
pub mod runtime;
pub mod sentences;
pub mod session;
pub mod ui;

use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::runtime::{EventPump, TrainerEvent};
use crate::sentences::SentencePool;
use crate::session::{Phase, Session};
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

/// terminal typing speed trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a target sentence against the clock: per-character highlighting, a progress bar, and live WPM and accuracy readouts. Sentences come from a built-in pool of facts, a custom prompt, or a file."
)]
pub struct Cli {
    /// custom sentence to type instead of drawing from the pool
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// newline-separated file of sentences to draw from (remembered for later runs)
    #[clap(long)]
    sentences: Option<PathBuf>,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
}

impl App {
    pub fn new(pool: SentencePool) -> Self {
        let mut session = Session::new(pool);
        // put the first sentence on display; typing waits for an explicit start
        session.reset();
        Self { session }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Quit,
}

fn handle_key(session: &mut Session, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Quit;
        }
        KeyCode::Esc => {
            if session.phase() == Phase::Running {
                session.finish();
            } else {
                return KeyOutcome::Quit;
            }
        }
        KeyCode::Enter => {
            // the start trigger is disabled while a run is armed or active
            if matches!(session.phase(), Phase::Idle | Phase::Finished) {
                session.start();
            }
        }
        KeyCode::Left => session.reset(),
        KeyCode::Right => session.new_sentence(),
        KeyCode::Backspace => session.backspace(),
        KeyCode::Char(c) => session.type_char(c),
        _ => {}
    }
    KeyOutcome::Continue
}

/// Resolves the sentence source from CLI flags and the saved preference,
/// persisting a newly supplied `--sentences` path for later runs.
fn resolve_pool(cli: &Cli, store: &dyn ConfigStore) -> Result<SentencePool, Box<dyn Error>> {
    if let Some(prompt) = &cli.prompt {
        return Ok(SentencePool::single(prompt));
    }

    if let Some(path) = &cli.sentences {
        let pool = SentencePool::from_file(path)?;
        store.save(&Config {
            sentence_file: Some(path.clone()),
        })?;
        return Ok(pool);
    }

    if let Some(path) = store.load().sentence_file {
        // a stale preference (moved or emptied file) falls back to the built-ins
        if let Ok(pool) = SentencePool::from_file(&path) {
            return Ok(pool);
        }
    }

    Ok(SentencePool::builtin())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let pool = resolve_pool(&cli, &store)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(pool);
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let pump = EventPump::terminal(Duration::from_millis(TICK_RATE_MS));

    terminal.draw(|f| draw(app, f))?;

    loop {
        match pump.next() {
            TrainerEvent::Tick => {
                // the per-tick refresh only matters while the timer runs
                if app.session.phase() == Phase::Running {
                    app.session.on_tick();
                    terminal.draw(|f| draw(app, f))?;
                }
            }
            TrainerEvent::Resize => {
                terminal.draw(|f| draw(app, f))?;
            }
            TrainerEvent::Key(key) => {
                if handle_key(&mut app.session, key) == KeyOutcome::Quit {
                    break;
                }
                terminal.draw(|f| draw(app, f))?;
            }
        }
    }

    Ok(())
}

fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
