use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::{info, warn};

use crate::models::settings::LayoutSettings;

pub const SETTINGS_FILE: &str = "layout.toml";

/// Where layout settings live when the host does not pick a path.
pub fn default_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "CalendarGrid", "CalendarGrid") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}

/// Reads and writes [`LayoutSettings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_default_path() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the stored settings. A missing file gives the defaults.
    pub fn get(&self) -> Result<LayoutSettings> {
        if !self.path.exists() {
            info!(
                "No settings at {}; using defaults",
                self.path.display()
            );
            return Ok(LayoutSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: LayoutSettings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &LayoutSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        info!("Saved layout settings to {}", self.path.display());
        Ok(())
    }

    /// Set first day of week
    pub fn set_first_day_of_week(&self, day: u8) -> Result<()> {
        let mut settings = self.get()?;
        settings.first_day_of_week = day;
        self.update(&settings)
    }

    /// Choose whether multi-day events sort ahead of single-day ones
    pub fn set_spans_have_priority(&self, enabled: bool) -> Result<()> {
        let mut settings = self.get()?;
        settings.spans_have_priority = enabled;
        self.update(&settings)
    }

    pub fn set_max_events_per_day(&self, max: Option<usize>) -> Result<()> {
        let mut settings = self.get()?;
        settings.max_events_per_day = max;
        self.update(&settings)
    }
}
