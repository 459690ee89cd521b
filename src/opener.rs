use std::path::Path;
use std::process::{Command, Stdio};

/// External application launcher. Fire-and-forget: the pane never
/// observes the outcome of a launch.
pub trait Launcher {
  fn open_associated(&self, path: &Path);
  fn open_viewer(&self, path: &Path);
  fn open_editor(&self, path: &Path);
}

/// Launches the OS-associated application, or the viewer/editor commands
/// from the config. An unset command makes the call a no-op.
pub struct ExternalOpener {
  viewer: Option<String>,
  editor: Option<String>,
}

impl ExternalOpener {
  pub fn new(viewer: Option<String>, editor: Option<String>) -> Self {
    Self { viewer, editor }
  }

  fn spawn_detached(command: &str, path: &Path) {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
      return;
    };
    let _ = Command::new(program)
      .args(parts)
      .arg(path)
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .spawn();
  }
}

impl Launcher for ExternalOpener {
  fn open_associated(&self, path: &Path) {
    let _ = open::that_detached(path);
  }

  fn open_viewer(&self, path: &Path) {
    if let Some(command) = &self.viewer {
      Self::spawn_detached(command, path);
    }
  }

  fn open_editor(&self, path: &Path) {
    if let Some(command) = &self.editor {
      Self::spawn_detached(command, path);
    }
  }
}
