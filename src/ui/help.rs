use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

fn section_line(title: &str, theme: &Theme) -> Line<'static> {
  Line::from(Span::styled(
    format!(" {title}"),
    Style::default().fg(theme.title_inactive).add_modifier(Modifier::DIM),
  ))
}

fn entry_line(keys: &str, desc: &str, theme: &Theme) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("  {keys:<18}"),
      Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ),
    Span::styled(desc.to_string(), Style::default().fg(theme.text)),
  ])
}

pub fn render_help(area: Rect, buf: &mut Buffer, theme: &Theme) {
  let width = 48.min(area.width.saturating_sub(4));
  let height = 26.min(area.height.saturating_sub(2));

  if width < 10 || height < 5 {
    return;
  }

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;
  let popup = Rect::new(x, y, width, height);

  Clear.render(popup, buf);

  let lines: Vec<Line> = vec![
    section_line("Cursor", theme),
    entry_line("Up / Down", "Move highlight", theme),
    entry_line("PgUp / PgDn", "Move by one page", theme),
    entry_line("Home / End", "First / last item", theme),
    entry_line("Shift+move", "Extend selection over range", theme),
    section_line("Filter", theme),
    entry_line("a..z", "Narrow list by substring", theme),
    entry_line("Backspace", "Erase last filter character", theme),
    entry_line("Esc", "Clear filter", theme),
    section_line("Navigation", theme),
    entry_line("Enter", "Enter directory / open file", theme),
    entry_line("Backspace", "Go to parent directory", theme),
    entry_line("F3 / F4", "View / edit highlighted file", theme),
    section_line("Selection", theme),
    entry_line("Space", "Toggle highlighted item", theme),
    entry_line("Ctrl+A", "Select all", theme),
    entry_line("Ctrl+D", "Deselect all", theme),
    entry_line("Ctrl+I", "Invert selection", theme),
    section_line("Other", theme),
    entry_line("Tab", "Switch pane", theme),
    entry_line("F7", "Create directory", theme),
    entry_line("q / F10", "Quit", theme),
    Line::from(""),
    Line::from(Span::styled(
      " Press any key to close".to_string(),
      Style::default().fg(theme.text_dim),
    )),
  ];

  let block = Block::default()
    .borders(Borders::ALL)
    .title(" Help ")
    .border_style(Style::default().fg(theme.title_inactive))
    .style(Style::default().bg(theme.bg_overlay));

  Paragraph::new(lines).block(block).render(popup, buf);
}
