//! Environment-driven service configuration.

use derive_getters::Getters;
use derive_new::new;
use tracing::{info, warn};

/// Runtime configuration, read from the environment once at startup.
///
/// `dotenvy` is loaded in `main`, so a local `.env` file feeds these
/// variables during development.
#[derive(Debug, Clone, Getters, new)]
pub struct Config {
    /// SQLite database path; `None` disables the primary storage tier.
    database_path: Option<String>,
    /// Hours a stored game lives after its last write.
    game_ttl_hours: i64,
    /// Telegram bot token for game-end notifications.
    telegram_bot_token: Option<String>,
    /// Origins allowed by CORS.
    cors_origins: Vec<String>,
}

impl Config {
    /// Reads configuration from the environment, applying defaults.
    ///
    /// Recognized variables: `USE_DATABASE` (default `true`),
    /// `DATABASE_PATH` (default `noughts.db`), `GAME_TTL_HOURS`
    /// (default `24`), `TELEGRAM_BOT_TOKEN`, and `CORS_ORIGINS` as a
    /// comma-separated list (default `http://localhost:3000`).
    pub fn from_env() -> Self {
        let use_database = std::env::var("USE_DATABASE")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);
        let database_path = use_database
            .then(|| std::env::var("DATABASE_PATH").unwrap_or_else(|_| "noughts.db".to_string()));

        let game_ttl_hours = std::env::var("GAME_TTL_HOURS")
            .ok()
            .and_then(|v| match v.parse() {
                Ok(hours) => Some(hours),
                Err(_) => {
                    warn!(value = %v, "Invalid GAME_TTL_HOURS, using the default");
                    None
                }
            })
            .unwrap_or(24);

        let telegram_bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let config = Self::new(
            database_path,
            game_ttl_hours,
            telegram_bot_token,
            cors_origins,
        );
        info!(
            database = ?config.database_path(),
            ttl_hours = *config.game_ttl_hours(),
            notifications = config.telegram_bot_token().is_some(),
            origins = config.cors_origins().len(),
            "Configuration loaded"
        );
        config
    }
}
