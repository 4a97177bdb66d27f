mod answer;
mod ids;
mod question;
mod quiz;
mod score;
mod session;

pub use ids::{ParseIdError, QuestionId};

pub use answer::AnswerRecord;
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use quiz::{Quiz, QuizDraft, QuizError};
pub use score::{Score, ScoreBand};
pub use session::{RecordOutcome, SessionProgress, SessionState};
