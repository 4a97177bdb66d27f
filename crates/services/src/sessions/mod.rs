mod controller;
mod store;
mod writer;

// Public API of the session subsystem.
pub use controller::{Handled, Intent, QuizController};
pub use store::QuizSession;
pub use writer::SnapshotWriter;
