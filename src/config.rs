use serde::Deserialize;

pub struct Config {
  pub tick_rate_ms: u64,
  pub theme: String,
  pub editor: Option<String>,
  pub viewer: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlConfig {
  general: Option<GeneralConfig>,
  programs: Option<ProgramsConfig>,
}

#[derive(Deserialize, Default)]
struct GeneralConfig {
  tick_rate_ms: Option<u64>,
  theme: Option<String>,
}

#[derive(Deserialize, Default)]
struct ProgramsConfig {
  editor: Option<String>,
  viewer: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      tick_rate_ms: 100,
      theme: "dark".to_string(),
      editor: None,
      viewer: None,
    }
  }
}

impl Config {
  /// Loads `~/.config/tcmd/config.toml`, keeping defaults for anything
  /// missing or malformed. Problems come back as messages, never errors.
  pub fn load() -> (Self, Vec<String>) {
    let mut config = Config::default();
    let mut errors = Vec::new();

    if let Ok(path) = Config::config_path()
      && let Ok(content) = std::fs::read_to_string(&path)
    {
      config.apply_toml_str(&content, &mut errors);
    }

    (config, errors)
  }

  fn apply_toml_str(&mut self, s: &str, errors: &mut Vec<String>) {
    let toml_config: TomlConfig = match toml::from_str(s) {
      Ok(c) => c,
      Err(e) => {
        errors.push(format!("failed to parse config.toml: {e}"));
        return;
      }
    };

    if let Some(general) = toml_config.general {
      if let Some(tick) = general.tick_rate_ms {
        self.tick_rate_ms = tick;
      }
      if let Some(theme) = general.theme {
        self.theme = theme;
      }
    }

    if let Some(programs) = toml_config.programs {
      if programs.editor.is_some() {
        self.editor = programs.editor;
      }
      if programs.viewer.is_some() {
        self.viewer = programs.viewer;
      }
    }
  }

  pub fn default_toml() -> &'static str {
    r#"[general]
tick_rate_ms = 100    # event loop tick rate in ms
theme = "dark"        # dark | light

[programs]
# editor = "nano"     # F4, spawned detached with the file path appended
# viewer = "less"     # F3
"#
  }

  pub fn config_path() -> Result<std::path::PathBuf, String> {
    dirs::config_dir()
      .map(|d| d.join("tcmd").join("config.toml"))
      .ok_or_else(|| "could not determine config directory".to_string())
  }

  pub fn dump_default_config(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    std::fs::write(path, Self::default_toml())
      .map_err(|e| format!("failed to write {}: {e}", path.display()))
  }
}
