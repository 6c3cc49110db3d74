//! Diesel schema for the game store.

diesel::table! {
    games (id) {
        id -> Text,
        state -> Text,
        expires_at -> Timestamp,
    }
}
