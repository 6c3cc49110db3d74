//! Telegram notifications for finished games.

use anyhow::{Context, Result};
use serde_json::json;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Outcome pushed to the player's chat when a game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The player won; carries the awarded reward code.
    Victory {
        /// Code to include in the message.
        code: String,
    },
    /// The computer won.
    Defeat,
    /// Board filled with no winner.
    Draw,
}

impl Notification {
    fn text(&self) -> String {
        match self {
            Notification::Victory { code } => format!("🎉 You won! Your reward code: {code}"),
            Notification::Defeat => "😔 The computer won this one".to_string(),
            Notification::Draw => "🤝 It's a draw".to_string(),
        }
    }
}

/// Pushes game-end messages through the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    bot_token: Option<String>,
}

impl Notifier {
    /// Creates a notifier. Without a bot token every send becomes a
    /// logged no-op.
    pub fn new(bot_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token,
        }
    }

    /// Sends a notification to `chat_id`.
    ///
    /// # Errors
    ///
    /// Returns an error when the Telegram API is unreachable or rejects
    /// the message. Callers log and continue: a failed notification never
    /// fails the move that triggered it.
    #[instrument(skip_all, fields(chat_id = %chat_id))]
    pub async fn send(&self, chat_id: &str, notification: &Notification) -> Result<()> {
        let Some(token) = &self.bot_token else {
            warn!("TELEGRAM_BOT_TOKEN is not configured, skipping notification");
            return Ok(());
        };

        let url = format!("https://api.telegram.org/bot{token}/sendMessage");
        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(10))
            .json(&json!({
                "chat_id": chat_id,
                "text": notification.text(),
                "parse_mode": "HTML",
            }))
            .send()
            .await
            .context("failed to reach the Telegram API")?;

        response
            .error_for_status()
            .context("Telegram API rejected the notification")?;

        info!("Notification delivered");
        Ok(())
    }
}
