use ratatui::style::Color;

use crate::fs::{EntryKind, FileEntry};

pub struct EntryIcon {
  pub glyph: &'static str,
  pub color: Color,
}

/// Pure lookup from entry kind and filename pattern to a display glyph.
/// Rendering-only; the pane controller never sees styling.
pub fn entry_icon(entry: &FileEntry) -> EntryIcon {
  match entry.kind {
    EntryKind::ParentDirectory => {
      return EntryIcon { glyph: "\u{f062} ", color: Color::Indexed(75) }; //
    }
    EntryKind::Directory => {
      return EntryIcon { glyph: "\u{f114} ", color: Color::Indexed(75) }; //
    }
    EntryKind::Symlink => {
      return EntryIcon { glyph: "\u{f0c1} ", color: Color::Indexed(176) }; //
    }
    EntryKind::File => {}
  }

  let ext = entry.name.rsplit('.').next().unwrap_or("").to_lowercase();
  match ext.as_str() {
    "rs" => EntryIcon { glyph: "\u{e7a8} ", color: Color::Indexed(208) }, //
    "toml" | "yaml" | "yml" | "ini" | "cfg" | "conf" => {
      EntryIcon { glyph: "\u{e615} ", color: Color::Indexed(150) } //
    }
    "json" => EntryIcon { glyph: "\u{e60b} ", color: Color::Indexed(185) }, //
    "md" | "txt" => EntryIcon { glyph: "\u{f0f6} ", color: Color::Indexed(252) }, //
    "py" => EntryIcon { glyph: "\u{e73c} ", color: Color::Indexed(114) }, //
    "js" | "ts" => EntryIcon { glyph: "\u{e74e} ", color: Color::Indexed(185) }, //
    "sh" | "bash" | "zsh" => EntryIcon { glyph: "\u{e795} ", color: Color::Indexed(114) }, //
    "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" => {
      EntryIcon { glyph: "\u{f1c5} ", color: Color::Indexed(139) } //
    }
    "zip" | "tar" | "gz" | "bz2" | "xz" | "7z" | "rar" => {
      EntryIcon { glyph: "\u{f1c6} ", color: Color::Indexed(185) } //
    }
    "mp3" | "flac" | "ogg" | "wav" => {
      EntryIcon { glyph: "\u{f001} ", color: Color::Indexed(139) } //
    }
    "mp4" | "mkv" | "avi" | "mov" | "webm" => {
      EntryIcon { glyph: "\u{f03d} ", color: Color::Indexed(139) } //
    }
    "pdf" => EntryIcon { glyph: "\u{f1c1} ", color: Color::Indexed(167) }, //
    _ => EntryIcon { glyph: "\u{f15b} ", color: Color::Indexed(250) }, //
  }
}
