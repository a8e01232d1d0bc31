#[cfg(feature = "config")]
use core_config::{env_parse_or, ConfigError, FromEnv};
use std::time::Duration;

/// MongoDB connection settings
///
/// Timeouts here are the only bound on how long a store call may take; the
/// API layer does not add its own.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/db][?options]`
    pub url: String,
    pub database: String,
    /// Reported to the server for its logs
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub const DEFAULT_DATABASE: &'static str = "default";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Load from the environment, using `default_database` when neither
    /// `MONGODB_DATABASE` nor `MONGO_DATABASE` is set.
    ///
    /// - `MONGODB_URL` or `MONGO_URL` (required)
    /// - `MONGODB_APP_NAME`
    /// - `MONGODB_MAX_POOL_SIZE` (100), `MONGODB_MIN_POOL_SIZE` (5)
    /// - `MONGODB_CONNECT_TIMEOUT_SECS` (10)
    /// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (30)
    #[cfg(feature = "config")]
    pub fn from_env_with_default_database(default_database: &str) -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL or MONGO_URL".to_string()))?;

        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .unwrap_or_else(|_| default_database.to_string());

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", 100)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", 5)?,
            connect_timeout: Duration::from_secs(env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                10,
            )?),
            server_selection_timeout: Duration::from_secs(env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                30,
            )?),
        })
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: Self::DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_default_database(Self::DEFAULT_DATABASE)
    }
}
