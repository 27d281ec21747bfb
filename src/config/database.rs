use std::{ env, time::Duration };

use thiserror::Error;
use diesel::{ PgConnection, r2d2::{ Pool, ConnectionManager, PoolError as R2D2Error } };

use crate::config::{ env_or, validation::ConfigValidator };

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const DEFAULT_POOL_MAX_SIZE: u32 = 15;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")] MissingEnv(#[from] env::VarError),

    #[error("Configuration error: {0}")] Config(String),

    #[error("Connection pool error: {0}")] Pool(#[from] R2D2Error),

    #[error("Migration error: {0}")] Migration(String),
}

/*
The pool cannot be deserialized or compared, so the configuration is split:
      - RawDatabaseConfig holds the plain values read from the environment
      - DatabaseConfig owns the live pool built from them
*/

#[derive(Debug, Clone)]
pub struct RawDatabaseConfig {
    pub database_url: String,
    pub pool_max_size: u32,
    pub connection_timeout_secs: u64,
}

impl RawDatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            pool_max_size: env_or("DB_POOL_MAX_SIZE", DEFAULT_POOL_MAX_SIZE)?,
            connection_timeout_secs: env_or(
                "DB_CONNECTION_TIMEOUT_SECS",
                DEFAULT_CONNECTION_TIMEOUT_SECS
            )?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate_database_config(self)
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub pool: PgPool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig").field("pool_max_size", &self.pool.max_size()).finish()
    }
}

impl DatabaseConfig {
    /// Build from a RawDatabaseConfig (which contains loaded fields).
    ///
    /// The pool is built lazily: no connection is opened until the first
    /// checkout, so an unreachable database surfaces at migration time.
    pub fn from_raw(raw: RawDatabaseConfig) -> Result<Self, ConfigError> {
        raw.validate()?;
        let manager = ConnectionManager::<PgConnection>::new(&raw.database_url);
        let pool = Pool::builder()
            .max_size(raw.pool_max_size)
            .connection_timeout(Duration::from_secs(raw.connection_timeout_secs))
            .build_unchecked(manager);

        Ok(Self { pool })
    }

    /// Load from environment variables and build the config.
    pub fn new() -> Result<Self, ConfigError> {
        DatabaseConfig::from_raw(RawDatabaseConfig::from_env()?)
    }
}
