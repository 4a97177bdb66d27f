use std::sync::Arc;

use quiz_core::model::Quiz;
use storage::repository::Storage;
use storage::SnapshotStore;

use crate::error::AppServicesError;
use crate::quiz_source::QuizSource;
use crate::sessions::QuizController;

/// Assembles the dataset and the snapshot store the app runs on.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<Quiz>,
    snapshots: SnapshotStore,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the dataset cannot be loaded or storage
    /// initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        source: &QuizSource,
        storage_key: &str,
    ) -> Result<Self, AppServicesError> {
        let quiz = source.load()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(quiz, &storage, storage_key))
    }

    /// Build services over volatile storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the dataset cannot be loaded.
    pub fn in_memory(source: &QuizSource, storage_key: &str) -> Result<Self, AppServicesError> {
        let quiz = source.load()?;
        Ok(Self::from_parts(quiz, &Storage::in_memory(), storage_key))
    }

    #[must_use]
    pub fn from_parts(quiz: Quiz, storage: &Storage, storage_key: &str) -> Self {
        Self {
            quiz: Arc::new(quiz),
            snapshots: SnapshotStore::new(Arc::clone(&storage.kv), storage_key),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<Quiz> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn snapshots(&self) -> SnapshotStore {
        self.snapshots.clone()
    }

    /// Restore the stored session and hand back its controller.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn open_controller(&self) -> QuizController {
        QuizController::open(self.quiz(), self.snapshots()).await
    }
}
