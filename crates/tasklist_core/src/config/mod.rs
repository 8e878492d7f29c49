use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKLIST_CONFIG_PATH";

/// Display theme for the CLI renderer. Persisted across sessions; task
/// data is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub accent: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn accentize(&self, text: &str) -> String {
        if self.accent.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.accent, text, self.reset)
        }
    }

    pub fn mutedize(&self, text: &str) -> String {
        if self.muted.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.muted, text, self.reset)
        }
    }
}

pub fn palette_for_theme(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: "\x1b[38;5;208m",
            muted: "\x1b[38;5;250m",
            reset: "\x1b[0m",
        },
        Theme::Light => Palette {
            accent: "",
            muted: "",
            reset: "",
        },
    }
}

/// Maps loosely spelled theme names ("Dark-Mode", "vanilla") onto the two
/// known themes. Unknown names are rejected rather than guessed.
pub fn canonical_theme(raw: &str) -> Option<Theme> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    match cleaned.trim_matches('_') {
        "light" | "default" | "vanilla" => Some(Theme::Light),
        "dark" | "dark_mode" | "darkmode" | "noir" => Some(Theme::Dark),
        _ => None,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

pub fn config_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("tasklist")
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasklist")
            .join(CONFIG_FILE_NAME))
    }
}

/// Loads the config, falling back to defaults when the file is missing.
/// A corrupt file also falls back, with the parse error surfaced so the
/// caller can warn without aborting the session.
pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&content).map_err(|err| {
        AppError::data(format!("invalid JSON in {}: {}", path.display(), err))
    })
}

/// Writes the config back, creating the parent directory as needed. The
/// theme is the only durable state in the application.
pub fn save_config(config: &Config) -> Result<(), AppError> {
    let path = config_path()?;
    save_config_to_path(&path, config)
}

fn save_config_to_path(path: &Path, config: &Config) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content = serde_json::to_string_pretty(config)
        .map_err(|err| AppError::data(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))
}
