use serde::{Deserialize, Serialize};

/// Which front-end the user ran the catalog through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Menu,
    Cli,
}

/// User settings loaded from settings.json
///
/// Every field has a default so a partial or missing settings file merges
/// cleanly instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode assumed when no subcommand is given
    pub default_mode: Mode,
    /// Terminal color theme name, consumed by the presentation layer
    pub color_theme: String,
    pub backup: BackupSettings,
    pub search_defaults: SearchDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    /// Minimum minutes between backups; 0 backs up before every save
    pub frequency_minutes: u64,
    /// Number of timestamped backups kept, oldest pruned first
    pub retention: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    /// Whether searches are fuzzy unless the caller says otherwise
    pub fuzzy: bool,
    /// Default result limit
    pub limit: usize,
    /// Minimum similarity score for a fuzzy match, in [0, 1]
    pub fuzzy_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_mode: Mode::Cli,
            color_theme: "default".to_string(),
            backup: BackupSettings::default(),
            search_defaults: SearchDefaults::default(),
        }
    }
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            frequency_minutes: 0,
            retention: 5,
        }
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            fuzzy: true,
            limit: 20,
            fuzzy_threshold: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backup.retention, 5);
        assert_eq!(settings.backup.frequency_minutes, 0);
        assert!(settings.search_defaults.fuzzy);
        assert_eq!(settings.search_defaults.limit, 20);
        assert_eq!(settings.search_defaults.fuzzy_threshold, 0.6);
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"backup": {"retention": 3}}"#).unwrap();
        assert_eq!(settings.backup.retention, 3);
        // untouched fields keep their defaults
        assert_eq!(settings.backup.frequency_minutes, 0);
        assert_eq!(settings.search_defaults.limit, 20);
        assert_eq!(settings.default_mode, Mode::Cli);
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&Mode::Menu).unwrap(), "\"menu\"");
        assert_eq!(serde_json::to_string(&Mode::Cli).unwrap(), "\"cli\"");
    }
}
