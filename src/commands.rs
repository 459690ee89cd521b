use std::io;

use crate::fs::ops;
use crate::pane::Pane;
use crate::view::PanelView;

/// A shell-level command that collects one line of input through the
/// status-bar prompt before acting on the active pane.
pub trait PaneCommand {
  fn prompt(&self) -> &str;
  fn is_valid_char(&self, c: char) -> bool;
  fn execute(&self, pane: &mut Pane<PanelView>, input: &str) -> io::Result<()>;
}

pub struct CreateDirectoryCommand;

impl PaneCommand for CreateDirectoryCommand {
  fn prompt(&self) -> &str {
    "Name"
  }

  fn is_valid_char(&self, c: char) -> bool {
    ops::is_valid_name_char(c)
  }

  fn execute(&self, pane: &mut Pane<PanelView>, input: &str) -> io::Result<()> {
    pane.create_directory(input)
  }
}
