use super::types::Settings;
use crate::{Result, ToolshedError};
use std::path::Path;

/// Loader for the settings file
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from the given path, falling back to defaults when the
    /// file does not exist. A file that exists but fails to parse is an
    /// error; silently reverting a user's configuration would hide typos.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ToolshedError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ToolshedError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    fn validate(settings: &Settings) -> Result<()> {
        let threshold = settings.search_defaults.fuzzy_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ToolshedError::Config(format!(
                "search_defaults.fuzzy_threshold must be within [0, 1], got {threshold}"
            )));
        }
        if settings.backup.retention == 0 {
            return Err(ToolshedError::Config(
                "backup.retention must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
