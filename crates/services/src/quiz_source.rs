use std::path::PathBuf;

use quiz_core::catalog;
use quiz_core::model::Quiz;

use crate::error::AppServicesError;

/// Where the quiz dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizSource {
    /// The catalog compiled into the binary.
    #[default]
    Builtin,
    /// A JSON dataset on disk.
    File(PathBuf),
}

impl QuizSource {
    /// Read and validate the dataset.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::DatasetRead` if the file cannot be read and
    /// `AppServicesError::Quiz` if its contents are not a valid dataset.
    pub fn load(&self) -> Result<Quiz, AppServicesError> {
        let quiz = match self {
            Self::Builtin => catalog::defensive_concepts()?,
            Self::File(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| {
                    AppServicesError::DatasetRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                Quiz::from_json(&raw)?
            }
        };
        tracing::info!(title = quiz.title(), questions = quiz.len(), "quiz dataset loaded");
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_loads_catalog() {
        let quiz = QuizSource::Builtin.load().unwrap();
        assert_eq!(quiz.len(), 6);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = PathBuf::from("/definitely/not/here/quiz.json");
        let err = QuizSource::File(path.clone()).load().unwrap_err();
        match err {
            AppServicesError::DatasetRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("quiz-source-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"title":"Empty","questions":[]}"#).unwrap();
        let err = QuizSource::File(path.clone()).load().unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AppServicesError::Quiz(_)));
    }
}
