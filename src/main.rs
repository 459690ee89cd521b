mod app;
mod commands;
mod config;
mod event;
mod fs;
mod icons;
mod opener;
mod pane;
mod theme;
mod ui;
mod view;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
  EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::App;
use crate::event::{Event, EventLoop};
use crate::fs::{DirectoryProvider, LocalFileSystem};
use crate::opener::{ExternalOpener, Launcher};
use crate::theme::Theme;

fn main() -> Result<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();

  let mut show_help = false;
  let mut show_version = false;
  let mut show_init = false;
  let mut path_args: Vec<String> = Vec::new();

  for arg in &args {
    match arg.as_str() {
      "--help" | "-h" => show_help = true,
      "--version" | "-V" => show_version = true,
      "--init" => show_init = true,
      a if !a.starts_with('-') => path_args.push(a.to_string()),
      _ => {
        eprintln!("tcmd: unknown option '{arg}'");
        std::process::exit(1);
      }
    }
  }

  if show_help {
    println!(concat!(
      "tcmd - dual-pane terminal file commander\n",
      "\n",
      "Usage: tcmd [options] [left-path] [right-path]\n",
      "\n",
      "Options:\n",
      "  --init                   Write the default config to ~/.config/tcmd/\n",
      "  -h, --help               Print this help message\n",
      "  -V, --version            Print version\n",
      "\n",
      "Panes without a path open the current directory.",
    ));
    return Ok(());
  }

  if show_version {
    println!("tcmd {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }

  if show_init {
    let config_path = match config::Config::config_path() {
      Ok(p) => p,
      Err(e) => {
        eprintln!("tcmd: {e}");
        std::process::exit(1);
      }
    };
    match config::Config::dump_default_config(&config_path) {
      Ok(()) => println!("{}", config_path.display()),
      Err(e) => {
        eprintln!("tcmd: {e}");
        std::process::exit(1);
      }
    }
    return Ok(());
  }

  let (config, config_errors) = config::Config::load();
  for error in &config_errors {
    eprintln!("tcmd: {error}");
  }

  let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
  let left_path = resolve_start_path(path_args.first(), &cwd)?;
  let right_path = resolve_start_path(path_args.get(1), &cwd)?;

  let theme = Theme::from_name(&config.theme).unwrap_or_default();

  // Restore the terminal before the panic message hits the screen.
  let original_hook = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let _ = restore_terminal();
    original_hook(info);
  }));

  setup_terminal()?;
  let backend = CrosstermBackend::new(io::stdout());
  let mut terminal = Terminal::new(backend)?;

  let provider: Rc<dyn DirectoryProvider> = Rc::new(LocalFileSystem);
  let launcher: Rc<dyn Launcher> = Rc::new(ExternalOpener::new(
    config.viewer.clone(),
    config.editor.clone(),
  ));
  let mut app = App::new(&left_path, &right_path, provider, launcher, 20)?;

  let events = EventLoop::new(Duration::from_millis(config.tick_rate_ms));

  loop {
    terminal.draw(|frame| ui::draw(frame, &mut app, &theme))?;

    match events.next()? {
      Event::Key(key) => app.handle_key(key)?,
      // The next draw picks the new page size up from the layout.
      Event::Resize(_, _) => {}
      Event::Tick => {}
    }

    if app.should_quit {
      break;
    }
  }

  restore_terminal()?;
  Ok(())
}

fn resolve_start_path(arg: Option<&String>, cwd: &PathBuf) -> Result<PathBuf> {
  let path = arg.map(PathBuf::from).unwrap_or_else(|| cwd.clone());
  Ok(std::fs::canonicalize(path)?)
}

fn setup_terminal() -> Result<()> {
  enable_raw_mode()?;
  execute!(io::stdout(), EnterAlternateScreen)?;
  Ok(())
}

fn restore_terminal() -> Result<()> {
  disable_raw_mode()?;
  execute!(io::stdout(), LeaveAlternateScreen)?;
  Ok(())
}
