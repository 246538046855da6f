//! Application configuration structs
//!
//! Loads configuration from environment variables, read once at startup.

use progress_core::Snowflake;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub tracking: TrackingConfig,
    pub roles: RoleConfig,
    pub thresholds: ThresholdConfig,
    pub cooldowns: CooldownConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    /// Chat-platform credential used by the external connection
    pub platform_token: String,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Which channels count and where announcements go
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    /// Whitelist of channel ids where posts and reactions count
    pub monitored_channels: Vec<Snowflake>,
    /// Channel that receives progression announcements
    pub broadcast_channel_id: Snowflake,
}

impl TrackingConfig {
    /// Whether a channel is on the monitored whitelist
    #[inline]
    pub fn is_monitored(&self, channel_id: Snowflake) -> bool {
        self.monitored_channels.contains(&channel_id)
    }
}

/// Role identifiers
#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    /// Participant role for counted reactions; unset disables the grant
    pub reaction_participant: Option<Snowflake>,
    /// Participant role for counted posts; unset disables the grant
    pub post_participant: Option<Snowflake>,
    /// The progression role granted once a counter crosses its threshold
    pub progression: Snowflake,
}

/// Counter thresholds for the progression role
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_threshold")]
    pub reactions: i64,
    #[serde(default = "default_threshold")]
    pub posts: i64,
}

/// Cooldown windows, in seconds
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CooldownConfig {
    #[serde(default = "default_reaction_cooldown")]
    pub reaction_secs: u64,
    #[serde(default = "default_post_cooldown")]
    pub post_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "guild-progress".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_threshold() -> i64 {
    50
}

fn default_reaction_cooldown() -> u64 {
    60
}

fn default_post_cooldown() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
                platform_token: env::var("PLATFORM_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("PLATFORM_TOKEN"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            tracking: TrackingConfig {
                monitored_channels: parse_snowflake_list(
                    "MONITORED_CHANNEL_IDS",
                    &env::var("MONITORED_CHANNEL_IDS")
                        .map_err(|_| ConfigError::MissingVar("MONITORED_CHANNEL_IDS"))?,
                )?,
                broadcast_channel_id: require_snowflake("BROADCAST_CHANNEL_ID")?,
            },
            roles: RoleConfig {
                reaction_participant: optional_snowflake("REACTION_ROLE_ID")?,
                post_participant: optional_snowflake("POST_ROLE_ID")?,
                progression: require_snowflake("PROGRESSION_ROLE_ID")?,
            },
            thresholds: ThresholdConfig {
                reactions: env::var("REACTION_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_threshold),
                posts: env::var("POST_THRESHOLD")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_threshold),
            },
            cooldowns: CooldownConfig {
                reaction_secs: env::var("REACTION_COOLDOWN_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_reaction_cooldown),
                post_secs: env::var("POST_COOLDOWN_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_post_cooldown),
            },
        })
    }
}

/// Parse a required snowflake-valued environment variable
fn require_snowflake(name: &'static str) -> Result<Snowflake, ConfigError> {
    let raw = env::var(name).map_err(|_| ConfigError::MissingVar(name))?;
    Snowflake::parse(raw.trim()).map_err(|_| ConfigError::InvalidValue(name, raw))
}

/// Parse an optional snowflake-valued environment variable
///
/// Unset or empty means "feature disabled", a present-but-garbage value is
/// still an error.
fn optional_snowflake(name: &'static str) -> Result<Option<Snowflake>, ConfigError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => Snowflake::parse(raw.trim())
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Parse a comma-separated snowflake list
fn parse_snowflake_list(name: &'static str, raw: &str) -> Result<Vec<Snowflake>, ConfigError> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id = Snowflake::parse(part)
            .map_err(|_| ConfigError::InvalidValue(name, part.to_string()))?;
        ids.push(id);
    }
    if ids.is_empty() {
        return Err(ConfigError::InvalidValue(name, raw.to_string()));
    }
    Ok(ids)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
