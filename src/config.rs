use std::{env, path::PathBuf};

/// Runtime settings, all taken from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub port: u16,
    /// Local hour at which a new accounting day starts (0-23). Activity
    /// before this hour counts toward the previous day.
    pub rollover_hour: u32,
}

pub const DEFAULT_ROLLOVER_HOUR: u32 = 3;

impl AppConfig {
    pub fn from_env() -> Self {
        let data_path = env::var("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/state.json"));
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let rollover_hour = env::var("ROLLOVER_HOUR")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|hour| *hour < 24)
            .unwrap_or(DEFAULT_ROLLOVER_HOUR);

        Self {
            data_path,
            port,
            rollover_hour,
        }
    }
}
