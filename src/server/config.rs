use crate::server::error::config::ConfigError;

/// Port the server listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3001;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup instead of the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
