pub mod database;
pub mod logging;
pub mod server;
pub mod validation;

pub use database::{ DatabaseConfig, ConfigError, PgPool };
pub use server::ServerConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseConfig::new()?,
            server: ServerConfig::new()?,
        })
    }
}

/// Reads an optional variable, falling back to `default` when it is unset.
/// A set but unparsable value is an error rather than a silent fallback.
pub(crate) fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
    where T: std::str::FromStr, T::Err: std::fmt::Display
{
    match std::env::var(key) {
        Ok(raw) =>
            raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::Config(format!("Failed to parse {}: {}", key, e))),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::MissingEnv(e)),
    }
}
