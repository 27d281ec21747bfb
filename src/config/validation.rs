// Configuration validation utilities

use url::Url;

use crate::config::{ ConfigError, database::RawDatabaseConfig };

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate database configuration
    pub fn validate_database_config(config: &RawDatabaseConfig) -> Result<(), ConfigError> {
        if config.database_url.trim().is_empty() {
            return Err(ConfigError::Config("DATABASE_URL cannot be empty".into()));
        }

        if
            !config.database_url.starts_with("postgresql://") &&
            !config.database_url.starts_with("postgres://")
        {
            return Err(
                ConfigError::Config(
                    "DATABASE_URL must be a valid PostgreSQL connection string".to_string()
                )
            );
        }

        Url::parse(&config.database_url).map_err(|_| {
            ConfigError::Config("DATABASE_URL is not a valid URL".to_string())
        })?;

        if config.pool_max_size == 0 {
            return Err(ConfigError::Config("DB_POOL_MAX_SIZE must be greater than zero".into()));
        }

        if config.connection_timeout_secs == 0 {
            return Err(
                ConfigError::Config("DB_CONNECTION_TIMEOUT_SECS must be greater than zero".into())
            );
        }

        Ok(())
    }
}
