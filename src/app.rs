use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::commands::{CreateDirectoryCommand, PaneCommand};
use crate::event::InputMode;
use crate::fs::DirectoryProvider;
use crate::opener::Launcher;
use crate::pane::Pane;
use crate::view::{PaneActivation, PaneView, PanelView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
  Left,
  Right,
}

struct PromptState {
  command: Box<dyn PaneCommand>,
  input: String,
  saved_status: String,
}

/// Application shell: owns both panes, decides which one receives keys,
/// and carries the few bindings that are not pane concerns.
pub struct App {
  pub left: Pane<PanelView>,
  pub right: Pane<PanelView>,
  active: ActivePane,
  pub input_mode: InputMode,
  prompt: Option<PromptState>,
  pub show_help: bool,
  pub should_quit: bool,
}

impl App {
  pub fn new(
    left_path: &Path,
    right_path: &Path,
    provider: Rc<dyn DirectoryProvider>,
    launcher: Rc<dyn Launcher>,
    page_size: usize,
  ) -> Result<Self> {
    let left = Pane::new(
      left_path,
      Rc::clone(&provider),
      Rc::clone(&launcher),
      PaneActivation::Active,
      PanelView::new(page_size),
    )?;
    let right = Pane::new(
      right_path,
      provider,
      launcher,
      PaneActivation::Inactive,
      PanelView::new(page_size),
    )?;

    Ok(Self {
      left,
      right,
      active: ActivePane::Left,
      input_mode: InputMode::Normal,
      prompt: None,
      show_help: false,
      should_quit: false,
    })
  }

  pub fn active(&self) -> ActivePane {
    self.active
  }

  pub fn active_pane(&self) -> &Pane<PanelView> {
    match self.active {
      ActivePane::Left => &self.left,
      ActivePane::Right => &self.right,
    }
  }

  pub fn active_pane_mut(&mut self) -> &mut Pane<PanelView> {
    match self.active {
      ActivePane::Left => &mut self.left,
      ActivePane::Right => &mut self.right,
    }
  }

  /// Called by the ui layer once the real viewport height is known.
  pub fn set_page_size(&mut self, rows: usize) {
    if self.left.view().max_visible_item_count() != rows {
      self.left.view_mut().set_max_visible_item_count(rows);
      self.left.viewport_resized();
    }
    if self.right.view().max_visible_item_count() != rows {
      self.right.view_mut().set_max_visible_item_count(rows);
      self.right.viewport_resized();
    }
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
    if self.show_help {
      self.show_help = false;
      return Ok(());
    }
    match self.input_mode {
      InputMode::Prompt => self.handle_prompt_key(key),
      InputMode::Normal => self.handle_normal_key(key),
    }
  }

  fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
    // Quit and pane switching stay shell-owned; 'q' in particular must
    // never reach the filter handler.
    match key.code {
      KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::F(10) => {
        self.should_quit = true;
        return Ok(());
      }
      KeyCode::Tab => {
        self.switch_active_pane();
        return Ok(());
      }
      _ => {}
    }

    if self.active_pane_mut().handle_key(key)? {
      return Ok(());
    }

    // Bindings tried only after the pane reported the key unhandled.
    match key.code {
      KeyCode::F(1) => self.show_help = true,
      KeyCode::F(7) => self.start_prompt(Box::new(CreateDirectoryCommand)),
      _ => {}
    }
    Ok(())
  }

  fn switch_active_pane(&mut self) {
    self.active = match self.active {
      ActivePane::Left => {
        self.left.set_activation(PaneActivation::Inactive);
        self.right.set_activation(PaneActivation::Active);
        ActivePane::Right
      }
      ActivePane::Right => {
        self.right.set_activation(PaneActivation::Inactive);
        self.left.set_activation(PaneActivation::Active);
        ActivePane::Left
      }
    };
  }

  fn start_prompt(&mut self, command: Box<dyn PaneCommand>) {
    let saved_status = self.active_pane().view().status_text().to_string();
    let text = format!("{}: ", command.prompt());
    let view = self.active_pane_mut().view_mut();
    view.set_status_text(text);
    view.draw_status_bar();
    self.prompt = Some(PromptState { command, input: String::new(), saved_status });
    self.input_mode = InputMode::Prompt;
  }

  fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
    let Some(mut prompt) = self.prompt.take() else {
      self.input_mode = InputMode::Normal;
      return Ok(());
    };

    match key.code {
      KeyCode::Esc => {
        self.finish_prompt(prompt.saved_status);
      }
      KeyCode::Enter => {
        self.finish_prompt(prompt.saved_status);
        if let Err(e) = prompt.command.execute(self.active_pane_mut(), &prompt.input) {
          let view = self.active_pane_mut().view_mut();
          view.set_status_text(format!("{e}"));
          view.draw_status_bar();
        }
      }
      KeyCode::Backspace => {
        prompt.input.pop();
        self.draw_prompt(&prompt);
        self.prompt = Some(prompt);
      }
      KeyCode::Char(c) if prompt.command.is_valid_char(c) => {
        prompt.input.push(c);
        self.draw_prompt(&prompt);
        self.prompt = Some(prompt);
      }
      _ => {
        self.prompt = Some(prompt);
      }
    }
    Ok(())
  }

  fn draw_prompt(&mut self, prompt: &PromptState) {
    let text = format!("{}: {}", prompt.command.prompt(), prompt.input);
    let view = self.active_pane_mut().view_mut();
    view.set_status_text(text);
    view.draw_status_bar();
  }

  fn finish_prompt(&mut self, saved_status: String) {
    let view = self.active_pane_mut().view_mut();
    view.set_status_text(saved_status);
    view.draw_status_bar();
    self.input_mode = InputMode::Normal;
  }
}
