//! Countries TUI - World Countries Data
//!
//! Terminal directory of world countries: fetched once, searchable,
//! paginated, with placeholder flags for images that fail to load.

mod app;
mod keybindings;
mod mode;
mod tasks;
mod views;
mod widgets;

use std::io;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use countries_core::{Action, CountryClient, DirectoryConfig};

use app::App;
use tasks::Tasks;

/// How long to wait for input before checking for background results
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging to a file; the terminal belongs to the UI
    init_logging()?;

    let config = DirectoryConfig::load()?;
    info!(endpoint = %config.endpoint, page_size = config.page_size, "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut app = App::new(config.page_size, config.probe_flags);
    let mut tasks = match CountryClient::new(&config) {
        Ok(client) => {
            let mut tasks = Tasks::new(runtime.handle().clone(), client, tx);
            tasks.spawn_load();
            Some(tasks)
        }
        Err(err) => {
            warn!(error = %err, "could not build HTTP client");
            app.apply(Action::LoadFinished(Err(err)));
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, tasks.as_mut(), &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Abort outstanding work before the runtime goes away
    drop(tasks);
    runtime.shutdown_timeout(Duration::from_millis(200));

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut tasks: Option<&mut Tasks>,
    rx: &mut UnboundedReceiver<Action>,
) -> io::Result<()> {
    loop {
        while let Ok(action) = rx.try_recv() {
            app.apply(action);
        }

        if let Some(tasks) = tasks.as_deref_mut() {
            for (name, url) in app.take_pending_probes() {
                tasks.spawn_probe(name, url);
            }
        }

        terminal.draw(|f| app.render(f))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}

/// Log to `{cache_dir}/countries/countries.log`; `RUST_LOG` sets the filter.
fn init_logging() -> io::Result<()> {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("countries")) else {
        return Ok(());
    };
    std::fs::create_dir_all(&dir)?;
    let file = std::fs::File::create(dir.join("countries.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
