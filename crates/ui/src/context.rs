use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use services::{Handled, Intent, QuizController};

use crate::vm::{QuizScreenVm, map_quiz_screen};

/// Shared handle the views use to read the session and send intents.
///
/// Provided by the application composition root (e.g. `crates/app`).
#[derive(Clone)]
pub struct AppContext {
    controller: Arc<Mutex<QuizController>>,
}

impl AppContext {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    /// Current screen, mapped for rendering.
    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        map_quiz_screen(&self.lock())
    }

    pub fn dispatch(&self, intent: Intent) -> Handled {
        let handled = self.lock().dispatch(intent);
        if !handled.is_applied() {
            tracing::trace!(?intent, "intent ignored");
        }
        handled
    }

    /// Wait for queued snapshot writes.
    pub async fn flush(&self) {
        let writer = self.lock().session().writer();
        writer.flush().await;
    }

    fn lock(&self) -> MutexGuard<'_, QuizController> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
