use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
  File,
  Directory,
  ParentDirectory,
  Symlink,
}

/// One filesystem node shown in a pane. Immutable once built; the `path`
/// is the identity used for selection and highlight tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
  pub path: PathBuf,
  pub name: String,
  pub kind: EntryKind,
}

impl FileEntry {
  pub fn from_path(path: PathBuf) -> Self {
    let is_symlink = path.symlink_metadata().is_ok_and(|m| m.is_symlink());
    let kind = if is_symlink {
      EntryKind::Symlink
    } else if path.metadata().is_ok_and(|m| m.is_dir()) {
      EntryKind::Directory
    } else {
      EntryKind::File
    };
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().to_string())
      .unwrap_or_default();

    Self { path, name, kind }
  }

  /// The ".." row pointing at the enclosing directory.
  pub fn parent_link(parent: &Path) -> Self {
    Self {
      path: parent.to_path_buf(),
      name: "..".to_string(),
      kind: EntryKind::ParentDirectory,
    }
  }

  pub fn is_enterable(&self) -> bool {
    matches!(self.kind, EntryKind::Directory | EntryKind::ParentDirectory)
  }
}
