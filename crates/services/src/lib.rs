#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_source;
pub mod sessions;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use quiz_source::QuizSource;
pub use sessions::{Handled, Intent, QuizController, QuizSession, SnapshotWriter};
