use std::sync::Arc;

use quiz_core::model::SessionState;

use crate::repository::KeyValueStore;
use crate::snapshot;

/// Storage key used when none is configured.
pub const DEFAULT_SESSION_KEY: &str = "knicks-quiz-state";

/// Best-effort persistence of one [`SessionState`] under a fixed key.
///
/// None of these operations fail: storage errors are logged and dropped, and
/// unreadable snapshots read as "nothing saved".
#[derive(Clone)]
pub struct SnapshotStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn with_default_key(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::new(kv, DEFAULT_SESSION_KEY)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `state` under the fixed key, replacing the previous snapshot.
    pub async fn save(&self, state: &SessionState) {
        let text = match snapshot::serialize(state) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to encode session snapshot");
                return;
            }
        };
        if let Err(err) = self.kv.put(&self.key, &text).await {
            tracing::warn!(key = %self.key, error = %err, "failed to save session snapshot");
        }
    }

    /// Read the snapshot, if one is stored and readable.
    pub async fn load(&self) -> Option<SessionState> {
        let raw = match self.kv.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read session snapshot");
                return None;
            }
        };
        let state = snapshot::deserialize(&raw);
        if state.is_none() {
            tracing::debug!(key = %self.key, "discarding unreadable session snapshot");
        }
        state
    }

    /// Remove the snapshot. A missing snapshot is fine.
    pub async fn clear(&self) {
        if let Err(err) = self.kv.remove(&self.key).await {
            tracing::warn!(key = %self.key, error = %err, "failed to clear session snapshot");
        }
    }
}
