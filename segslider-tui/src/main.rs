//! SegSlider TUI — drag two handles over a green/amber/red track.
//!
//! The last breakpoints are saved on exit and restored on start. Logs go
//! to a file next to the state file so they never corrupt the screen.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::info;

use segslider_core::SliderConfig;
use segslider_tui::{input, persistence, ui, AppState};

#[derive(Parser)]
#[command(name = "segslider-tui", about = "Segmented slider in the terminal")]
struct Cli {
    /// TOML config with `[slider]` seeds.
    #[arg(long)]
    config: Option<PathBuf>,

    /// State file. Defaults to <config dir>/segslider/state.json.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Start from the config seeds, ignoring saved points.
    #[arg(long, default_value_t = false)]
    fresh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Paths
    let state_path = cli.state.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("segslider")
            .join("state.json")
    });
    init_logging(&state_path);

    let config = match &cli.config {
        Some(path) => SliderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SliderConfig::default(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, config, &state_path, cli.fresh);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: SliderConfig,
    state_path: &Path,
    fresh: bool,
) -> Result<()> {
    let size = terminal.size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    let mut app = AppState::new(config, screen).context("terminal too small for the slider")?;

    if !fresh {
        persistence::apply(&mut app, persistence::load(state_path));
    }
    info!(green = app.slider.green_point(), amber = app.slider.amber_point(), "started");

    let result = run_app(terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(state_path, &persistence::extract(&app)) {
        tracing::warn!(error = %e, "failed to save state");
    }
    info!(green = app.slider.green_point(), amber = app.slider.amber_point(), "exiting");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to `segslider.log` beside the state file. Logging is best effort:
/// if the file cannot be opened the app runs without it.
fn init_logging(state_path: &Path) {
    let Some(dir) = state_path.parent() else { return };
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("segslider.log")) else { return };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}
