pub mod loader;
pub mod types;

pub use loader::SettingsLoader;
pub use types::{BackupSettings, Mode, SearchDefaults, Settings};
