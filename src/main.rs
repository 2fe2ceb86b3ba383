use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    time::{Duration, Instant},
};

use shotdeck::config::{find_config_path, Config};
use shotdeck::handlers::handle_key;
use shotdeck::{utils, App};

mod ui;

/// Terminal client for the screen capture and analysis backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir log file (shotdeck-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL, overrides the config file
    #[arg(long)]
    base_url: Option<String>,
}

/// Send log output to the debug log file; the terminal belongs to the UI
fn init_logging(debug: bool) -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG, when set, overrides the level chosen here
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let mut config = match find_config_path(args.config)? {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load(&path)?
        }
        None => {
            info!("No config file found, using defaults");
            Config::default()
        }
    };

    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    info!("Backend at {}", config.base_url);

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Stop the poller before tearing the terminal down
    app.shutdown().await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut changes = app.subscribe();
    let mut last_draw: Option<Instant> = None;

    loop {
        // Redraw on state change, and once a second for relative timestamps
        let stale = last_draw.map_or(true, |at| at.elapsed() >= Duration::from_secs(1));
        if stale || changes.has_changed().unwrap_or(true) {
            let _ = changes.borrow_and_update();
            terminal.draw(|f| ui::render(f, app))?;
            last_draw = Some(Instant::now());
        }

        app.expire_toast();

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        app.process_responses();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_key(app, key).await,
                Event::Resize(_, _) => last_draw = None,
                _ => {}
            }
        }
    }

    Ok(())
}
