use std::io;
use std::path::{Path, PathBuf};

use super::entry::{EntryKind, FileEntry};

/// Ordered snapshot of one directory. Produced fresh on every navigation
/// and replaced wholesale, never mutated in place.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
  pub path: PathBuf,
  pub entries: Vec<FileEntry>,
  pub access_allowed: bool,
}

impl DirectoryListing {
  pub fn new(path: PathBuf, entries: Vec<FileEntry>) -> Self {
    Self { path, entries, access_allowed: true }
  }

  /// Listing for a directory the user may not enumerate: just the parent
  /// link (when one exists) and the denied flag.
  pub fn access_denied(path: PathBuf) -> Self {
    let entries = match path.parent() {
      Some(parent) => vec![FileEntry::parent_link(parent)],
      None => Vec::new(),
    };
    Self { path, entries, access_allowed: false }
  }

  pub fn count_of(&self, kind: EntryKind) -> usize {
    self.entries.iter().filter(|e| e.kind == kind).count()
  }
}

/// Directory enumeration seam. Permission problems never surface as
/// errors; they come back as an access-denied listing. Everything else
/// propagates.
pub trait DirectoryProvider {
  fn read_directory(&self, path: &Path) -> io::Result<DirectoryListing>;
}

pub struct LocalFileSystem;

impl DirectoryProvider for LocalFileSystem {
  fn read_directory(&self, path: &Path) -> io::Result<DirectoryListing> {
    let read = match std::fs::read_dir(path) {
      Ok(read) => read,
      Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
        return Ok(DirectoryListing::access_denied(path.to_path_buf()));
      }
      Err(e) => return Err(e),
    };

    let mut directories = Vec::new();
    let mut files = Vec::new();
    for entry in read {
      let item = FileEntry::from_path(entry?.path());
      match item.kind {
        EntryKind::Directory => directories.push(item),
        _ => files.push(item),
      }
    }
    directories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let mut entries = Vec::with_capacity(directories.len() + files.len() + 1);
    if let Some(parent) = path.parent() {
      entries.push(FileEntry::parent_link(parent));
    }
    entries.extend(directories);
    entries.extend(files);

    Ok(DirectoryListing::new(path.to_path_buf(), entries))
  }
}
