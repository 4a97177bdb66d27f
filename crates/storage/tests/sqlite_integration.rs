use std::collections::BTreeMap;
use std::sync::Arc;

use quiz_core::model::{AnswerRecord, QuestionId, SessionState};
use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;
use storage::{DEFAULT_SESSION_KEY, SnapshotStore};

fn answered_state() -> SessionState {
    let mut answers = BTreeMap::new();
    answers.insert(QuestionId::new("q1"), AnswerRecord::from_persisted(0, true));
    answers.insert(QuestionId::new("q2"), AnswerRecord::from_persisted(0, false));
    SessionState::from_persisted(true, 1, answers)
}

#[tokio::test]
async fn sqlite_kv_put_get_remove() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_basic?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("slot").await.unwrap(), None);

    repo.put("slot", "first").await.unwrap();
    repo.put("slot", "second").await.unwrap();
    assert_eq!(repo.get("slot").await.unwrap().as_deref(), Some("second"));

    repo.remove("slot").await.unwrap();
    assert_eq!(repo.get("slot").await.unwrap(), None);
    repo.remove("slot").await.expect("removing a missing key succeeds");
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo =
        SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
            .await
            .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.put("slot", "kept").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("slot").await.unwrap().as_deref(), Some("kept"));
}

#[tokio::test]
async fn snapshot_store_round_trips_through_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_snapshot?mode=memory&cache=shared")
        .await
        .expect("sqlite storage");
    let store = SnapshotStore::with_default_key(Arc::clone(&storage.kv));

    let state = answered_state();
    store.save(&state).await;
    assert_eq!(store.load().await, Some(state));

    let raw = storage.kv.get(DEFAULT_SESSION_KEY).await.unwrap().unwrap();
    assert!(raw.contains(r#""idx":1"#), "unexpected snapshot {raw}");

    store.clear().await;
    assert_eq!(store.load().await, None);
}
