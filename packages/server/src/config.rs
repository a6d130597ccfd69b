use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// URL scheme that selects the in-process document store.
pub const MEMORY_URL_SCHEME: &str = "memory://";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    /// Server selection and connect timeout.
    pub timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_URL_SCHEME)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Size of each chunk when streaming a stored file back to a client.
    pub stream_chunk_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "event_management_db")?
            .set_default("database.timeout_secs", 20)?
            .set_default(
                "storage.stream_chunk_size",
                common::asset::DEFAULT_CHUNK_SIZE as u64,
            )?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., EVENTLY__DATABASE__URL)
            .add_source(
                Environment::with_prefix("EVENTLY")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.stream_chunk_size == 0 {
            return Err(ConfigError::Message(
                "storage.stream_chunk_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
