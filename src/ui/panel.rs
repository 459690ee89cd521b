use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::fs::EntryKind;
use crate::icons::entry_icon;
use crate::theme::Theme;
use crate::view::{PaneActivation, PaneView, PanelView};

pub fn render_panel(view: &PanelView, theme: &Theme, area: Rect, buf: &mut Buffer) {
  let is_active = view.activation() == PaneActivation::Active;

  let inner_height = area.height.saturating_sub(2) as usize;
  let inner_width = area.width.saturating_sub(2) as usize;

  let start = view.first_visible_index().min(view.items().len());
  let end = (start + inner_height).min(view.items().len());

  let mut lines: Vec<Line> = Vec::with_capacity(inner_height);
  for (offset, entry) in view.items()[start..end].iter().enumerate() {
    let index = start + offset;
    let is_highlighted = index == view.highlighted_index();
    let is_selected = view.is_selected(entry);

    let icon = entry_icon(entry);
    let name_color = match entry.kind {
      EntryKind::Directory | EntryKind::ParentDirectory => theme.directory,
      EntryKind::Symlink => theme.symlink,
      EntryKind::File => theme.text,
    };

    let mut style = Style::default().fg(if is_selected { theme.marked } else { name_color });
    if is_selected {
      style = style.add_modifier(Modifier::BOLD);
    }
    if is_highlighted && is_active {
      if !is_selected {
        style = style.fg(Color::Indexed(234));
      }
      style = style.bg(theme.bg_highlight).add_modifier(Modifier::BOLD);
    } else if is_highlighted {
      if !is_selected {
        style = style.fg(Color::Indexed(234));
      }
      style = style.bg(theme.bg_highlight_inactive);
    }

    let (icon_style, name_style) = if is_highlighted || is_selected {
      (style, style)
    } else {
      (Style::default().fg(icon.color), Style::default().fg(name_color))
    };

    let name = truncate_to_width(&entry.name, inner_width.saturating_sub(3));
    lines.push(Line::from(vec![
      Span::styled(icon.glyph, icon_style),
      Span::styled(name, name_style),
    ]));
  }

  let border_color = if is_active { theme.border } else { theme.border_inactive };
  let title_color = if is_active { theme.accent } else { theme.title_inactive };

  let title = format!(" {} ", truncate_to_width(view.title(), inner_width.saturating_sub(2)));
  let status = format!(" {} ", truncate_to_width(view.status_text(), inner_width.saturating_sub(2)));

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border_color))
    .title(Span::styled(
      title,
      Style::default().fg(title_color).add_modifier(Modifier::BOLD),
    ))
    .title_bottom(Line::from(Span::styled(
      status,
      Style::default().fg(theme.text_dim),
    )));

  Paragraph::new(lines).block(block).render(area, buf);
}

fn truncate_to_width(text: &str, max: usize) -> String {
  if text.width() <= max {
    return text.to_string();
  }
  if max == 0 {
    return String::new();
  }

  let mut out = String::new();
  let mut used = 0;
  for c in text.chars() {
    let w = c.width().unwrap_or(0);
    if used + w + 1 > max {
      break;
    }
    out.push(c);
    used += w;
  }
  out.push('…');
  out
}
