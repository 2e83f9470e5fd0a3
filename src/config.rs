use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use tracing::info;

pub const PORT: &str = "HOTEL_SEARCH_PORT";
pub const HOST: &str = "HOTEL_SEARCH_HOST";
pub const SEED_PATH: &str = "HOTELS_SEED_PATH";
pub const FRONTEND_URL: &str = "FRONTEND_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub frontend_url: Option<String>,
}

impl Config {
    /// Read configuration from the environment (and `.env`, if present)
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Ok(Self {
            host: try_load(HOST, "0.0.0.0")?,
            port: try_load(PORT, "7000")?,
            seed_path: optional(SEED_PATH).map(PathBuf::from),
            frontend_url: optional(FRONTEND_URL),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = optional(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value {raw:?}"))
}
