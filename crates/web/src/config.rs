use anyhow::{Context, Result};
use archive::ArchiveConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub archive: ArchiveConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = ArchiveConfig::default();

        let archive = ArchiveConfig {
            base_url: std::env::var("LOTOFACIL_API_URL").unwrap_or(defaults.base_url),
            timeout: optional_var("LOTOFACIL_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            request_delay: optional_var("LOTOFACIL_REQUEST_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_delay),
            max_walk_steps: optional_var("LOTOFACIL_MAX_WALK_STEPS")?
                .unwrap_or(defaults.max_walk_steps),
            ..defaults
        };
        archive.validate().context("Invalid archive configuration")?;

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            archive,
        })
    }
}

fn optional_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: {}", name, value)),
        Err(_) => Ok(None),
    }
}
