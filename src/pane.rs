use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::fs::ops;
use crate::fs::{DirectoryListing, DirectoryProvider, EntryKind, FileEntry};
use crate::opener::Launcher;
use crate::view::{PaneActivation, PaneView};

/// Single-pane controller: owns the current listing and the filter, and
/// turns one key event at a time into a consistent view transition.
///
/// Key dispatch order: cursor movement, filter, navigation, selection.
/// The first handler that recognizes the key wins; anything unrecognized
/// returns `Ok(false)` so the application shell can try its own bindings.
pub struct Pane<V: PaneView> {
  current: DirectoryListing,
  filter: Option<String>,
  provider: Rc<dyn DirectoryProvider>,
  launcher: Rc<dyn Launcher>,
  view: V,
}

impl<V: PaneView> Pane<V> {
  pub fn new(
    path: &Path,
    provider: Rc<dyn DirectoryProvider>,
    launcher: Rc<dyn Launcher>,
    activation: PaneActivation,
    mut view: V,
  ) -> io::Result<Self> {
    view.set_activation(activation);
    let mut pane = Self {
      current: DirectoryListing::new(path.to_path_buf(), Vec::new()),
      filter: None,
      provider,
      launcher,
      view,
    };
    // No previous directory to re-highlight and no redraw at construction;
    // the shell draws the first full frame.
    pane.load_directory(path, None, false)?;
    Ok(pane)
  }

  pub fn view(&self) -> &V {
    &self.view
  }

  pub fn view_mut(&mut self) -> &mut V {
    &mut self.view
  }

  pub fn current_path(&self) -> &Path {
    &self.current.path
  }

  pub fn filter(&self) -> Option<&str> {
    self.filter.as_deref()
  }

  pub fn set_activation(&mut self, activation: PaneActivation) {
    self.view.set_activation(activation);
    self.view.redraw();
  }

  /// Re-applies the scroll invariant after the viewport height changed.
  pub fn viewport_resized(&mut self) {
    self.scroll_to_highlighted();
  }

  /// Handles one key event; returns whether the key was recognized.
  pub fn handle_key(&mut self, key: KeyEvent) -> io::Result<bool> {
    if self.process_cursor_key(key) {
      return Ok(true);
    }
    if self.process_filter_key(key) {
      return Ok(true);
    }
    if self.process_navigation_key(key)? {
      return Ok(true);
    }
    Ok(self.process_selection_key(key))
  }

  fn process_cursor_key(&mut self, key: KeyEvent) -> bool {
    let extend = key.modifiers.contains(KeyModifiers::SHIFT);
    let page = self.view.max_visible_item_count() as isize;
    let index = self.view.highlighted_index() as isize;

    let desired = match key.code {
      KeyCode::Up => index - 1,
      KeyCode::Down => index + 1,
      KeyCode::PageUp => index - (page - 1),
      KeyCode::PageDown => index + (page - 1),
      KeyCode::Home => 0,
      KeyCode::End => self.view.items().len() as isize - 1,
      _ => return false,
    };

    self.move_highlight(desired, extend);
    self.scroll_to_highlighted();
    self.view.draw_items();
    true
  }

  fn move_highlight(&mut self, desired: isize, extend: bool) {
    let len = self.view.items().len();
    if len == 0 {
      return;
    }
    let desired = desired.clamp(0, len as isize - 1) as usize;

    if extend {
      self.toggle_range(self.view.highlighted_index(), desired);
    }
    self.view.set_highlighted_index(desired);
  }

  /// Range-select sweep: flips selection over every row from `from` to
  /// `to` inclusive, in the direction given by the pre-move selection
  /// state of the anchor row at `from`. A clamped move (`to == from`)
  /// degenerates to flipping the anchor alone.
  fn toggle_range(&mut self, from: usize, to: usize) {
    let anchor = &self.view.items()[from];
    let deselect = self.view.is_selected(anchor);

    let step: isize = if to < from { -1 } else { 1 };
    let mut index = from as isize;
    loop {
      let path = self.view.items()[index as usize].path.clone();
      if deselect {
        self.view.selected_mut().remove(&path);
      } else {
        self.view.selected_mut().insert(path);
      }
      if index == to as isize {
        break;
      }
      index += step;
    }
  }

  fn scroll_to_highlighted(&mut self) {
    let highlighted = self.view.highlighted_index();
    let page = self.view.max_visible_item_count();
    if highlighted < self.view.first_visible_index() {
      self.view.set_first_visible_index(highlighted);
    } else if highlighted >= self.view.first_visible_index() + page {
      self.view.set_first_visible_index(highlighted + 1 - page);
    }
  }

  fn process_filter_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
      return false;
    }

    match key.code {
      KeyCode::Char(c) if c.is_alphabetic() => {
        let mut text = self.filter.clone().unwrap_or_default();
        text.push(c);
        self.apply_filter(Some(text));
        true
      }
      KeyCode::Backspace if self.filter.is_some() => {
        let mut text = self.filter.clone().unwrap_or_default();
        if text.pop().is_some() {
          self.apply_filter(Some(text));
        }
        true
      }
      KeyCode::Esc if self.filter.is_some() => {
        self.apply_filter(None);
        true
      }
      _ => false,
    }
  }

  fn apply_filter(&mut self, new_filter: Option<String>) {
    let previous = self.view.highlighted_item().cloned();

    match new_filter {
      Some(text) => {
        let needle = text.to_lowercase();
        let matched: Vec<FileEntry> = self
          .current
          .entries
          .iter()
          .filter(|e| e.name.to_lowercase().contains(&needle))
          .cloned()
          .collect();

        // A filter is never allowed to empty the view; the keystroke
        // that would do so is dropped wholesale.
        if !matched.is_empty() {
          self.view.set_status_text(format!("Filter: {text}"));
          self.view.set_items(matched);
          self.filter = Some(text);
        }
      }
      None => {
        self.filter = None;
        let items = self.current.entries.clone();
        self.view.set_items(items);
        let status = self.format_status_text();
        self.view.set_status_text(status);
      }
    }

    self.prune_selection();

    let index = previous
      .and_then(|item| self.view.items().iter().position(|e| e.path == item.path))
      .unwrap_or(0);
    self.view.set_highlighted_index(index);
    self.scroll_to_highlighted();
    self.view.redraw();
  }

  fn prune_selection(&mut self) {
    let visible: HashSet<PathBuf> =
      self.view.items().iter().map(|e| e.path.clone()).collect();
    self.view.selected_mut().retain(|path| visible.contains(path));
  }

  fn process_navigation_key(&mut self, key: KeyEvent) -> io::Result<bool> {
    match key.code {
      KeyCode::Enter => {
        let Some(item) = self.view.highlighted_item() else {
          return Ok(false);
        };
        if item.is_enterable() {
          let target = item.path.clone();
          self.change_directory(&target)?;
          Ok(true)
        } else if item.kind == EntryKind::File {
          self.launcher.open_associated(&item.path);
          Ok(true)
        } else {
          Ok(false)
        }
      }
      // Reached only when no filter is active; an active filter consumes
      // Backspace first. Looks at the unfiltered listing, so the parent
      // link works while a filter hides it.
      KeyCode::Backspace => {
        let parent = self
          .current
          .entries
          .iter()
          .find(|e| e.kind == EntryKind::ParentDirectory)
          .map(|e| e.path.clone());
        match parent {
          Some(path) => {
            self.change_directory(&path)?;
            Ok(true)
          }
          None => Ok(false),
        }
      }
      KeyCode::F(3) => {
        if let Some(item) = self.view.highlighted_item()
          && item.kind == EntryKind::File
        {
          self.launcher.open_viewer(&item.path);
        }
        Ok(true)
      }
      KeyCode::F(4) => {
        if let Some(item) = self.view.highlighted_item()
          && item.kind == EntryKind::File
        {
          self.launcher.open_editor(&item.path);
        }
        Ok(true)
      }
      _ => Ok(false),
    }
  }

  fn process_selection_key(&mut self, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
      KeyCode::Char(' ') if !ctrl => {
        let Some(item) = self.view.highlighted_item() else {
          return false;
        };
        let path = item.path.clone();
        if !self.view.selected_mut().remove(&path) {
          self.view.selected_mut().insert(path);
        }
      }
      KeyCode::Char('a') | KeyCode::Char('A') if ctrl => {
        let all: HashSet<PathBuf> =
          self.view.items().iter().map(|e| e.path.clone()).collect();
        *self.view.selected_mut() = all;
      }
      KeyCode::Char('d') | KeyCode::Char('D') if ctrl => {
        self.view.selected_mut().clear();
      }
      // Invert within the visible items only; anything a filter hides
      // was already pruned from the selection.
      KeyCode::Char('i') | KeyCode::Char('I') if ctrl => {
        let inverted: HashSet<PathBuf> = self
          .view
          .items()
          .iter()
          .map(|e| e.path.clone())
          .filter(|path| !self.view.selected().contains(path))
          .collect();
        *self.view.selected_mut() = inverted;
      }
      _ => return false,
    }
    self.view.draw_items();
    true
  }

  pub fn change_directory(&mut self, path: &Path) -> io::Result<()> {
    let previous = self.current.path.clone();
    self.load_directory(path, Some(&previous), true)
  }

  fn load_directory(
    &mut self,
    path: &Path,
    previous: Option<&Path>,
    redraw: bool,
  ) -> io::Result<()> {
    let listing = self.provider.read_directory(path)?;

    self.filter = None;

    // Navigating up re-highlights the directory just exited.
    let index = previous
      .and_then(|prev| listing.entries.iter().position(|e| paths_equal_fold(&e.path, prev)))
      .unwrap_or(0);

    self.view.set_items(listing.entries.clone());
    self.view.selected_mut().clear();
    self.view.set_highlighted_index(index);
    self.view.set_title(listing.path.display().to_string());
    self.current = listing;
    let status = self.format_status_text();
    self.view.set_status_text(status);
    self.scroll_to_highlighted();
    if redraw {
      self.view.redraw();
    }
    Ok(())
  }

  /// Creates a subdirectory of the current directory, re-lists, and
  /// points the cursor at the new entry.
  pub fn create_directory(&mut self, name: &str) -> io::Result<()> {
    let created = ops::create_directory(&self.current.path, name)?;
    let current = self.current.path.clone();
    self.load_directory(&current, None, true)?;
    if let Some(index) = self.view.items().iter().position(|e| e.path == created) {
      self.view.set_highlighted_index(index);
      self.scroll_to_highlighted();
      self.view.draw_items();
    }
    Ok(())
  }

  fn format_status_text(&self) -> String {
    if self.current.access_allowed {
      let files = self.current.count_of(EntryKind::File);
      let directories = self.current.count_of(EntryKind::Directory);
      format!("Files: {files}, Directories: {directories}")
    } else {
      "ACCESS DENIED".to_string()
    }
  }
}

fn paths_equal_fold(a: &Path, b: &Path) -> bool {
  a.to_string_lossy().eq_ignore_ascii_case(&b.to_string_lossy())
}
