pub mod help;
pub mod panel;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::App;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
  let area = frame.area();

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(3),    // panes
      Constraint::Length(1), // key bar
    ])
    .split(area);

  let pane_chunks = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(chunks[0]);

  // Title and status rows live on the borders; the rest hold items.
  app.set_page_size(pane_chunks[0].height.saturating_sub(2) as usize);

  panel::render_panel(app.left.view(), theme, pane_chunks[0], frame.buffer_mut());
  panel::render_panel(app.right.view(), theme, pane_chunks[1], frame.buffer_mut());

  render_key_bar(chunks[1], frame.buffer_mut(), theme);

  if app.show_help {
    help::render_help(area, frame.buffer_mut(), theme);
  }
}

fn render_key_bar(area: Rect, buf: &mut Buffer, theme: &Theme) {
  let bindings = [
    ("Tab", "switch"),
    ("Enter", "open"),
    ("Space", "select"),
    ("F1", "help"),
    ("F3", "view"),
    ("F4", "edit"),
    ("F7", "mkdir"),
    ("F10", "quit"),
  ];

  let mut spans = Vec::new();
  for (key, label) in bindings {
    spans.push(Span::styled(
      format!(" {key}"),
      Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
      format!(" {label} "),
      Style::default().fg(theme.text_dim),
    ));
  }

  Paragraph::new(Line::from(spans))
    .style(Style::default().bg(theme.bg_bar))
    .render(area, buf);
}
