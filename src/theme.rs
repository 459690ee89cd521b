use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
  pub accent: Color,
  pub text: Color,
  pub text_dim: Color,
  pub border: Color,
  pub border_inactive: Color,
  pub title_inactive: Color,
  pub bg_highlight: Color,
  pub bg_highlight_inactive: Color,
  pub bg_bar: Color,
  pub bg_overlay: Color,
  pub marked: Color,
  pub directory: Color,
  pub symlink: Color,
}

impl Theme {
  pub fn dark() -> Self {
    Self {
      accent: Color::Indexed(75),
      text: Color::Indexed(252),
      text_dim: Color::DarkGray,
      border: Color::Indexed(75),
      border_inactive: Color::Indexed(240),
      title_inactive: Color::Indexed(245),
      bg_highlight: Color::Indexed(75),
      bg_highlight_inactive: Color::Indexed(240),
      bg_bar: Color::Indexed(236),
      bg_overlay: Color::Indexed(235),
      marked: Color::Indexed(220),
      directory: Color::Indexed(75),
      symlink: Color::Indexed(176),
    }
  }

  pub fn light() -> Self {
    Self {
      accent: Color::Indexed(27),
      text: Color::Indexed(235),
      text_dim: Color::Indexed(243),
      border: Color::Indexed(27),
      border_inactive: Color::Indexed(250),
      title_inactive: Color::Indexed(243),
      bg_highlight: Color::Indexed(27),
      bg_highlight_inactive: Color::Indexed(250),
      bg_bar: Color::Indexed(253),
      bg_overlay: Color::Indexed(255),
      marked: Color::Indexed(166),
      directory: Color::Indexed(27),
      symlink: Color::Indexed(90),
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "dark" => Some(Self::dark()),
      "light" => Some(Self::light()),
      _ => None,
    }
  }

  pub fn available_themes() -> &'static [&'static str] {
    &["dark", "light"]
  }
}

impl Default for Theme {
  fn default() -> Self {
    Self::dark()
  }
}
