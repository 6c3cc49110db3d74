//! Tests for the stored representation and the two-tier game store.

use noughts::{
    Cell, Config, GameRepository, GameState, GameStatus, GameStore, Mark, StoreHealth, StoredGame,
};

fn played_game() -> GameState {
    let mut game = GameState::new();
    game.apply_move(0, 0, Some(Mark::X)).unwrap();
    game.apply_move(2, 2, Some(Mark::O)).unwrap();
    game.apply_move(4, 4, Some(Mark::X)).unwrap();
    game
}

#[test]
fn test_stored_representation_round_trips() {
    let game = played_game();

    let json = serde_json::to_string(&StoredGame::from(&game)).unwrap();
    let restored: GameState = serde_json::from_str::<StoredGame>(&json).unwrap().into();

    assert_eq!(restored, game);
    assert_eq!(restored.id(), game.id());
    assert_eq!(restored.status(), GameStatus::Playing);
    assert_eq!(restored.current_player(), Mark::X);
    assert_eq!(restored.board().get(2, 2), Some(Cell::O));
}

#[test]
fn test_stored_wire_shape_matches_the_api() {
    let game = played_game();
    let value = serde_json::to_value(StoredGame::from(&game)).unwrap();

    assert_eq!(value["status"], "playing");
    assert_eq!(value["current_player"], "X");
    assert_eq!(value["board"][0][0], "X");
    assert_eq!(value["board"][2][2], "O");
    assert_eq!(value["board"][0][1], "");
    assert_eq!(value["board"].as_array().unwrap().len(), 5);
}

#[test]
fn test_repository_saves_and_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db").to_string_lossy().into_owned();
    let repo = GameRepository::new(path, 24).unwrap();

    assert_eq!(repo.load("missing").unwrap(), None);

    repo.save("g1", r#"{"state":"first"}"#).unwrap();
    assert_eq!(
        repo.load("g1").unwrap().as_deref(),
        Some(r#"{"state":"first"}"#)
    );

    // Saving under the same id overwrites.
    repo.save("g1", r#"{"state":"second"}"#).unwrap();
    assert_eq!(
        repo.load("g1").unwrap().as_deref(),
        Some(r#"{"state":"second"}"#)
    );
}

#[test]
fn test_repository_expires_stale_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db").to_string_lossy().into_owned();

    // A negative TTL makes every save land already expired.
    let repo = GameRepository::new(path, -1).unwrap();
    repo.save("g1", "{}").unwrap();
    assert_eq!(repo.load("g1").unwrap(), None);
    assert_eq!(repo.purge_expired().unwrap(), 0);
}

#[test]
fn test_store_round_trips_through_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.db").to_string_lossy().into_owned();
    let config = Config::new(Some(path), 24, None, vec![]);

    let store = GameStore::open(&config);
    assert_eq!(store.health(), StoreHealth::Ok);

    let game = played_game();
    store.save(&game);
    assert_eq!(store.load(game.id()), Some(game));
    assert_eq!(store.load("missing"), None);
}

#[test]
fn test_fallback_tier_serves_reads_and_writes() {
    let store = GameStore::in_memory();
    assert_eq!(store.health(), StoreHealth::Disabled);

    let game = played_game();
    store.save(&game);
    assert_eq!(store.load(game.id()), Some(game.clone()));

    let mut finished = game.clone();
    finished.finish();
    store.save(&finished);
    assert_eq!(
        store.load(game.id()).map(|g| g.status()),
        Some(GameStatus::Finished)
    );
}

#[test]
fn test_store_without_database_path_runs_disabled() {
    let config = Config::new(None, 24, None, vec![]);
    let store = GameStore::open(&config);
    assert_eq!(store.health(), StoreHealth::Disabled);
    assert_eq!(store.load("anything"), None);
}
