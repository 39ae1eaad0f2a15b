// Settings service module
// Loads and saves layout preferences as TOML

mod service;

pub use service::{default_path, SettingsService, SETTINGS_FILE};
