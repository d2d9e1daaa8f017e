use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::core::DEFAULT_MATCH_LIMIT;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub secret_key: String,
    #[serde(default = "default_leeway_secs")]
    pub leeway_secs: u64,
}

fn default_leeway_secs() -> u64 { 30 }

/// Result limits of the matchmaking routes
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_quick_limit")]
    pub quick_default_limit: u16,
    #[serde(default = "default_quick_max_limit")]
    pub quick_max_limit: u16,
    #[serde(default = "default_hackathon_limit")]
    pub hackathon_default_limit: u16,
    #[serde(default = "default_hackathon_max_limit")]
    pub hackathon_max_limit: u16,
    /// How many of the requester's own skills seed quick-match preferences
    #[serde(default = "default_profile_skills")]
    pub preferred_skills_from_profile: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            quick_default_limit: default_quick_limit(),
            quick_max_limit: default_quick_max_limit(),
            hackathon_default_limit: default_hackathon_limit(),
            hackathon_max_limit: default_hackathon_max_limit(),
            preferred_skills_from_profile: default_profile_skills(),
        }
    }
}

fn default_limit() -> u16 { DEFAULT_MATCH_LIMIT as u16 }
fn default_max_limit() -> u16 { 100 }
fn default_quick_limit() -> u16 { 5 }
fn default_quick_max_limit() -> u16 { 20 }
fn default_hackathon_limit() -> u16 { 10 }
fn default_hackathon_max_limit() -> u16 { 50 }
fn default_profile_skills() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HACKMATES__)
    /// 5. DATABASE_URL, REDIS_URL and SECRET_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HACKMATES__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HACKMATES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_well_known_env(settings)?.try_deserialize()
    }
}

/// Override config values with the conventional unprefixed variables
fn apply_well_known_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(database_url) = env::var("DATABASE_URL") {
        builder = builder.set_override("database.url", database_url)?;
    }
    if let Ok(redis_url) = env::var("REDIS_URL") {
        builder = builder.set_override("cache.redis_url", redis_url)?;
    }
    if let Ok(secret_key) = env::var("SECRET_KEY") {
        builder = builder.set_override("auth.secret_key", secret_key)?;
    }

    builder.build()
}
