use dotenv::dotenv;
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Which store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MySql,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "Invalid STORE_BACKEND '{other}': expected 'mysql' or 'memory'"
            )),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySql => f.write_str("mysql"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Always set when `store_backend` is [`StoreBackend::MySql`]
    pub database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables
    /// Calls dotenv() first so a local `.env` file is honoured
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `None` meaning unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = lookup("STORE_BACKEND")
            .map(|value| value.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or(StoreBackend::MySql);

        let database_url = lookup("DATABASE_URL");
        if store_backend == StoreBackend::MySql && database_url.is_none() {
            return Err("DATABASE_URL must be set when STORE_BACKEND is mysql".to_string());
        }

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = lookup("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            store_backend,
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logs the configuration with the database credentials masked
    pub fn log_info(&self) {
        info!(
            environment = %self.app_env,
            address = %self.bind_address(),
            store = %self.store_backend,
            "Server configuration"
        );
        match (&self.store_backend, &self.database_url) {
            (StoreBackend::MySql, Some(url)) => info!(
                database = %Self::mask_url(url),
                max_connections = self.max_connections,
                connection_lifetime_secs = self.connection_lifetime_secs,
                "Database configuration"
            ),
            _ => warn!("Using the in-memory store, gift cards are lost on shutdown"),
        }
    }

    /// Masks the credentials in a database URL
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_database_url() {
        let config = config_from(&[("DATABASE_URL", "mysql://u:p@localhost/db")]).unwrap();

        assert_eq!(config.store_backend, StoreBackend::MySql);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.app_env, "development");
    }

    #[test]
    fn test_mysql_requires_database_url() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn test_memory_backend_without_database() {
        let config = config_from(&[("STORE_BACKEND", "Memory"), ("SERVER_PORT", "8080")]).unwrap();

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.database_url, None);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("STORE_BACKEND", "postgres")]).is_err());
        assert!(config_from(&[("STORE_BACKEND", "memory"), ("SERVER_PORT", "70000")]).is_err());
    }

    #[test]
    fn test_mask_url() {
        assert_eq!(
            Config::mask_url("mysql://user:secret@db:3306/gift_cards"),
            "mysql://***@db:3306/gift_cards"
        );
        assert_eq!(Config::mask_url("not a url"), "***");
    }
}
