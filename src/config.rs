use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub cue: CueConfig,
    pub render: RenderConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Delay between accepting a step and jumping the viewport.
    pub settle_delay_ms: u64,
    /// Full length of a guided transition; the lock is held this long.
    pub transition_ms: u64,
    pub smooth_scroll_ms: u64,
    /// Columns moved per free-scroll key press or wheel notch.
    pub free_scroll_step: u16,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            transition_ms: 700,
            smooth_scroll_ms: 240,
            free_scroll_step: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CueConfig {
    pub enabled: bool,
    pub duration_ms: u64,
    pub start_hz: f32,
    pub end_hz: f32,
    pub volume: f32,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 150,
            start_hz: 800.0,
            end_hz: 200.0,
            volume: 0.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub redraw_interval_ms: u64,
    pub sidebar_width: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            redraw_interval_ms: 16,
            sidebar_width: 28,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let defaults = NavigationConfig::default();
        self.navigation.settle_delay_ms = self.navigation.settle_delay_ms.max(1);
        if self.navigation.transition_ms <= self.navigation.settle_delay_ms {
            self.navigation.settle_delay_ms = defaults.settle_delay_ms;
            self.navigation.transition_ms = defaults.transition_ms;
        }
        // The viewport must come to rest before the lock releases.
        let settle_window = self.navigation.transition_ms - self.navigation.settle_delay_ms;
        self.navigation.smooth_scroll_ms = self.navigation.smooth_scroll_ms.clamp(1, settle_window);
        self.navigation.free_scroll_step = self.navigation.free_scroll_step.max(1);

        let cue_defaults = CueConfig::default();
        self.cue.duration_ms = self.cue.duration_ms.clamp(10, 2_000);
        if !self.cue.start_hz.is_finite() || self.cue.start_hz <= 0.0 {
            self.cue.start_hz = cue_defaults.start_hz;
        }
        if !self.cue.end_hz.is_finite() || self.cue.end_hz <= 0.0 {
            self.cue.end_hz = cue_defaults.end_hz;
        }
        if !self.cue.volume.is_finite() {
            self.cue.volume = cue_defaults.volume;
        }
        self.cue.volume = self.cue.volume.clamp(0.0, 1.0);

        self.render.redraw_interval_ms = self.render.redraw_interval_ms.max(1);
        self.render.sidebar_width = self.render.sidebar_width.max(8);
        if self.log.level.trim().is_empty() {
            self.log.level = LogConfig::default().level;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DIARY_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("diary").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("diary")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("diary").join("config.toml"));
    }
    None
}
