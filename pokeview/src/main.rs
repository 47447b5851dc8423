//! `pokeview`, a terminal browser for the PokeAPI catalog.

use std::fs::File;
use std::io;
use std::io::Stdout;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use anyhow::Result;

use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;

use pokecat::Api;

use tracing::info;

use tui::backend::CrosstermBackend;
use tui::Terminal;

mod config;
mod dex;
mod fetch;
mod ui;
mod util;

#[cfg(test)]
mod testing;

use crate::dex::Dex;
use crate::ui::browser::Browser;
use crate::ui::component::catalog::LIST_URL;
use crate::ui::component::StyleSheet;

/// How long to wait for input before redrawing, so that finished downloads
/// show up promptly.
const FRAME: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
  // ── load config ──────────────────────────────────────────────────
  let config_path = std::env::args()
    .nth(1)
    .or_else(|| std::env::var("POKEVIEW_CONFIG").ok())
    .map(PathBuf::from);
  let config =
    config::locate_and_load(config_path).context("Config load failed")?;

  init_logging(&config.log_file)?;
  info!(
    "pokeview v{} starting (base_url={})",
    env!("CARGO_PKG_VERSION"),
    config.base_url
  );

  let api = Arc::new(Api::with_base_url(config.base_url.as_str()));
  let dex = Dex::new(api).page_size(config.page_size);
  let mut browser = Browser::new(LIST_URL, StyleSheet::from_config(&config));

  // ── run the UI ───────────────────────────────────────────────────
  let mut terminal = enter_terminal().context("Cannot set up terminal")?;
  let result = run(&mut terminal, &mut browser, &dex);
  let restored = leave_terminal(&mut terminal).context("Cannot restore terminal");

  result?;
  restored?;
  info!("pokeview exiting");
  Ok(())
}

/// Sends `tracing` output to `path`, since the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
  let file = File::create(path)
    .with_context(|| format!("Cannot create log file: {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pokeview=info,pokecat=info".into()),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn enter_terminal() -> Result<Term> {
  crossterm::terminal::enable_raw_mode()?;
  let mut stdout = io::stdout();
  crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_terminal(terminal: &mut Term) -> Result<()> {
  crossterm::terminal::disable_raw_mode()?;
  crossterm::execute!(
    terminal.backend_mut(),
    LeaveAlternateScreen,
    DisableMouseCapture
  )?;
  terminal.show_cursor()?;
  Ok(())
}

/// Draws and dispatches input until the user quits.
fn run(terminal: &mut Term, browser: &mut Browser, dex: &Dex) -> Result<()> {
  loop {
    terminal.draw(|f| browser.render(dex, f))?;

    if !crossterm::event::poll(FRAME)? {
      continue;
    }
    match crossterm::event::read()? {
      Event::Key(k)
        if k.code == KeyCode::Char('q')
          || (k.code == KeyCode::Char('c')
            && k.modifiers.contains(KeyModifiers::CONTROL)) =>
      {
        return Ok(())
      }
      e => browser.process_event(e, dex),
    }
  }
}
