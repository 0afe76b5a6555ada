use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::{Path, PathBuf};
use crate::{
    leaderboard::LeaderboardRegistry,
    models::{Result, ScoreError},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub leaderboard: LeaderboardSettings,
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardSettings {
    /// Rows kept per ranking.
    pub max_entries: usize,
    pub default_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory holding `players/<name>.json` snapshots and `guild.json`.
    pub snapshot_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Skyblock Scorer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
                environment: Environment::Development,
            },
            leaderboard: LeaderboardSettings {
                max_entries: 10,
                default_category: "skills".to_string(),
            },
            data: DataSettings {
                snapshot_dir: PathBuf::from("data"),
            },
        }
    }
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("SKYBLOCK_SCORER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self, leaderboards: &LeaderboardRegistry) -> Result<()> {
        if self.leaderboard.max_entries == 0 {
            return Err(ScoreError::ConfigError(
                "leaderboard.max_entries must be at least 1".to_string(),
            ));
        }

        let default_category = &self.leaderboard.default_category;
        if leaderboards.resolve(default_category).is_err() {
            return Err(ScoreError::ConfigError(format!(
                "leaderboard.default_category '{}' is not a leaderboard category",
                default_category
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaderboards() -> LeaderboardRegistry {
        LeaderboardRegistry::builtin().unwrap()
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate(&leaderboards()).is_ok());
    }

    #[test]
    fn test_zero_entries_rejected() {
        let mut settings = Settings::default();
        settings.leaderboard.max_entries = 0;

        assert!(matches!(
            settings.validate(&leaderboards()),
            Err(ScoreError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unknown_default_category_rejected() {
        let mut settings = Settings::default();
        settings.leaderboard.default_category = "catacombs".to_string();

        assert!(settings.validate(&leaderboards()).is_err());
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("skyblock-scorer-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[leaderboard]\nmax_entries = 25\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.leaderboard.max_entries, 25);
        assert_eq!(settings.leaderboard.default_category, "skills");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
