use crate::{Result, ToolshedError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Path management for toolshed data and configuration files
#[derive(Debug, Clone)]
pub struct ToolshedPaths {
    /// Data directory holding the catalog file
    pub data_dir: PathBuf,
    /// Backup directory (data/backups/)
    pub backup_dir: PathBuf,
    /// Configuration directory holding settings.json
    pub config_dir: PathBuf,
}

impl ToolshedPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "toolshed").ok_or_else(|| {
            ToolshedError::Path("Failed to determine project directories".to_string())
        })?;

        let data_dir = dirs.data_dir().to_path_buf();
        let backup_dir = data_dir.join("backups");
        let config_dir = dirs.config_dir().to_path_buf();
        Ok(Self {
            data_dir,
            backup_dir,
            config_dir,
        })
    }

    /// Create paths rooted at a specific directory (used by tests)
    pub fn for_root(root: &Path) -> Self {
        let data_dir = root.join("data");
        let backup_dir = data_dir.join("backups");
        let config_dir = root.join("config");
        Self {
            data_dir,
            backup_dir,
            config_dir,
        }
    }

    /// Primary catalog file path
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("tools.json")
    }

    /// Settings file path
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.backup_dir)?;
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}
