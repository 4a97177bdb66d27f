mod explanation;
mod header;
mod intro;
mod question;
mod quiz;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use explanation::ExplanationSheet;
pub use header::QuizHeader;
pub use intro::IntroCard;
pub use question::QuestionCard;
pub use quiz::QuizView;
pub use summary::SummaryCard;
