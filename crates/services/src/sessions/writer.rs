use quiz_core::model::SessionState;
use storage::SnapshotStore;
use tokio::sync::{mpsc, oneshot};

enum WriteCommand {
    Save(SessionState),
    Clear,
    Flush(oneshot::Sender<()>),
}

/// Fire-and-forget front for a [`SnapshotStore`].
///
/// Commands are queued on an unbounded channel and applied by one background
/// task in submission order, so the last submitted write always wins. Callers
/// never wait on storage.
#[derive(Clone)]
pub struct SnapshotWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl SnapshotWriter {
    /// Start the background task.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    pub fn spawn(store: SnapshotStore) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<WriteCommand>();

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    WriteCommand::Save(state) => store.save(&state).await,
                    WriteCommand::Clear => store.clear().await,
                    WriteCommand::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            tracing::debug!(key = %store.key(), "snapshot writer stopped");
        });

        Self { tx }
    }

    /// Queue a snapshot of `state`.
    pub fn save(&self, state: SessionState) {
        self.submit(WriteCommand::Save(state));
    }

    /// Queue removal of the stored snapshot.
    pub fn clear(&self) {
        self.submit(WriteCommand::Clear);
    }

    /// Wait until every command queued before this call has been applied.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }

    fn submit(&self, command: WriteCommand) {
        if self.tx.send(command).is_err() {
            tracing::warn!("snapshot writer is gone; dropping write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AnswerRecord, QuestionId};
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use storage::InMemoryStore;

    #[tokio::test]
    async fn writes_apply_in_submission_order() {
        let store = SnapshotStore::with_default_key(Arc::new(InMemoryStore::new()));
        let writer = SnapshotWriter::spawn(store.clone());

        let mut answers = BTreeMap::new();
        answers.insert(QuestionId::new("q1"), AnswerRecord::from_persisted(1, true));
        let first = SessionState::from_persisted(true, 0, BTreeMap::new());
        let last = SessionState::from_persisted(true, 3, answers);

        writer.save(first);
        writer.clear();
        writer.save(last.clone());
        writer.flush().await;

        assert_eq!(store.load().await, Some(last));
    }

    #[tokio::test]
    async fn clear_after_save_leaves_nothing() {
        let store = SnapshotStore::with_default_key(Arc::new(InMemoryStore::new()));
        let writer = SnapshotWriter::spawn(store.clone());

        writer.save(SessionState::default());
        writer.clear();
        writer.flush().await;

        assert_eq!(store.load().await, None);
    }
}
