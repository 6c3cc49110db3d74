//! SQLite-backed game repository with TTL expiry.

use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::models::{GameRow, NewGameRow};
use crate::db::{DbError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Key-value repository for serialized games.
///
/// Holds only the database path; a connection is established per call, so
/// the handle is cheap to clone and share across request handlers.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
    ttl: Duration,
}

impl GameRepository {
    /// Opens the repository and applies pending migrations.
    ///
    /// Saved games expire `ttl_hours` after their last write.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path))]
    pub fn new(db_path: String, ttl_hours: i64) -> Result<Self, DbError> {
        info!(path = %db_path, ttl_hours, "Opening game repository");
        let repo = Self {
            db_path,
            ttl: Duration::hours(ttl_hours),
        };
        let mut conn = repo.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("migration failed: {e}")))?;
        Ok(repo)
    }

    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("failed to connect to '{}': {e}", self.db_path)))
    }

    /// Saves a serialized game under its id, refreshing the TTL.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] on any connection or query failure.
    #[instrument(skip(self, state))]
    pub fn save(&self, id: &str, state: &str) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let expires_at = (Utc::now() + self.ttl).naive_utc();
        let row = NewGameRow::new(id.to_string(), state.to_string(), expires_at);

        diesel::insert_into(schema::games::table)
            .values(&row)
            .on_conflict(schema::games::id)
            .do_update()
            .set((
                schema::games::state.eq(row.state()),
                schema::games::expires_at.eq(row.expires_at()),
            ))
            .execute(&mut conn)?;

        debug!(id, "Game saved");
        Ok(())
    }

    /// Loads a serialized game. Expired rows are deleted and reported as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] on any connection or query failure.
    #[instrument(skip(self))]
    pub fn load(&self, id: &str) -> Result<Option<String>, DbError> {
        let mut conn = self.connection()?;

        let row = schema::games::table
            .find(id)
            .first::<GameRow>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            debug!(id, "Game not found");
            return Ok(None);
        };

        if *row.expires_at() < Utc::now().naive_utc() {
            debug!(id, "Game expired, deleting");
            diesel::delete(schema::games::table.find(id)).execute(&mut conn)?;
            return Ok(None);
        }

        Ok(Some(row.state().clone()))
    }

    /// Deletes every expired row, returning how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] on any connection or query failure.
    #[instrument(skip(self))]
    pub fn purge_expired(&self) -> Result<usize, DbError> {
        let mut conn = self.connection()?;
        let now = Utc::now().naive_utc();
        let purged =
            diesel::delete(schema::games::table.filter(schema::games::expires_at.lt(now)))
                .execute(&mut conn)?;
        if purged > 0 {
            info!(purged, "Expired games purged");
        }
        Ok(purged)
    }

    /// Verifies the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] when the database cannot be reached.
    #[instrument(skip(self))]
    pub fn health_check(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }
}
