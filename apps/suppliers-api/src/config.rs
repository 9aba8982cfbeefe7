//! Configuration for the Suppliers API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_bool, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Where supplier records live
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl Storage {
    /// `STORAGE=memory` selects the in-memory store; anything else, or unset, is PostgreSQL.
    pub fn from_env() -> Self {
        match std::env::var("STORAGE") {
            Ok(value) if value.trim().eq_ignore_ascii_case("memory") => Storage::Memory,
            _ => Storage::Postgres,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    /// Present only for [`Storage::Postgres`]
    pub database: Option<PostgresConfig>,
    pub environment: Environment,
    pub storage: Storage,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let storage = Storage::from_env();

        let database = match storage {
            Storage::Postgres => Some(PostgresConfig::from_env()?), // DATABASE_URL required
            Storage::Memory => None,
        };

        let run_migrations = env_bool("RUN_MIGRATIONS", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            database,
            environment,
            storage,
            run_migrations,
        })
    }

    /// In-memory configuration with default server settings
    pub fn in_memory() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            database: None,
            environment: Environment::Development,
            storage: Storage::Memory,
            run_migrations: false,
        }
    }
}
