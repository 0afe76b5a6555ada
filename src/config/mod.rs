pub mod settings;

pub use settings::{AppSettings, DataSettings, Environment, LeaderboardSettings, Settings};
