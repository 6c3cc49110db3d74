//! SQLite persistence: a key-value table of serialized games with TTL.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use repository::GameRepository;
