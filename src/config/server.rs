use std::net::SocketAddr;

use crate::config::{ env_or, ConfigError };

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub allowed_origin: String,
}

impl ServerConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("HOST", "127.0.0.1".to_string())?,
            port: env_or("PORT", 8080)?,
            environment: env_or("ENVIRONMENT", "development".to_string())?,
            allowed_origin: env_or("ALLOWED_ORIGIN", "http://localhost:3000".to_string())?,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Config(format!("Invalid HOST/PORT: {}", e)))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}
