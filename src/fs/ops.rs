use std::io;
use std::path::{Path, PathBuf};

const INVALID_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Whether `c` may appear in a directory name typed into a prompt.
pub fn is_valid_name_char(c: char) -> bool {
  !c.is_control() && !INVALID_NAME_CHARS.contains(&c)
}

/// Creates `base/name` and returns the new path.
pub fn create_directory(base: &Path, name: &str) -> io::Result<PathBuf> {
  let name = name.trim();
  if name.is_empty() || !name.chars().all(is_valid_name_char) {
    return Err(io::Error::new(
      io::ErrorKind::InvalidInput,
      format!("invalid directory name: {name:?}"),
    ));
  }

  let path = base.join(name);
  if path.exists() {
    return Err(io::Error::new(
      io::ErrorKind::AlreadyExists,
      format!("{name} already exists"),
    ));
  }

  std::fs::create_dir(&path)?;
  Ok(path)
}
