//! `planner` — terminal UI for a personal event planner.
//!
//! Events live in memory for the length of the session.
//!
//! # Usage
//!
//! ```
//! planner
//! planner --empty --log-file /tmp/planner.log
//! planner --config ~/.config/planner/config.toml
//! ```

mod app;
mod config;
mod ui;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use chrono::{Datelike, Local};
use clap::Parser;
use config::{ConfigFile, Settings};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use planner_core::sample::sample_events;
use planner_store_memory::MemoryStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "planner", version, about = "Terminal UI for a personal event planner")]
struct Args {
  /// Path to a TOML config file (sample_events, log_file, week_starts_on).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Start with no events instead of the sample set.
  #[arg(long)]
  empty: bool,

  /// Append logs to this file; logging is discarded otherwise.
  #[arg(long, env = "PLANNER_LOG_FILE", value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(&config::expand_tilde(path))?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(file_cfg, args.empty, args.log_file);

  init_tracing(settings.log_file.as_deref())?;

  let today = Local::now().date_naive();
  let store = if settings.sample_events {
    MemoryStore::with_events(sample_events(today.year()))
  } else {
    MemoryStore::new()
  };
  tracing::info!(events = store.len(), "starting planner session");

  let mut app = App::new(store, today, settings.week_start);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  tracing::info!(events = app.store.len(), "planner session ended");
  run_result
}

/// Route `tracing` output to `log_file`, or nowhere. Stdout belongs to the
/// TUI.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .with_env_var("PLANNER_LOG")
    .from_env_lossy();

  match log_file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    None => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::sink)
        .init();
    }
  }
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(250)).context("polling terminal")? {
      continue;
    }

    match event::read().context("reading terminal event")? {
      Event::Key(key) if key.kind == event::KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      Event::Resize(_, _) => {
        // Terminal will redraw on next iteration.
      }
      _ => {}
    }
  }

  Ok(())
}
