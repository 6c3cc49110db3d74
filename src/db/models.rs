//! Row models for persisted games.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// A persisted game row: serialized state plus its expiry instant.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameRow {
    id: String,
    state: String,
    expires_at: NaiveDateTime,
}

/// Insertable row for saving a game.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGameRow {
    id: String,
    state: String,
    expires_at: NaiveDateTime,
}
