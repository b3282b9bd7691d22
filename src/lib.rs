//! MindMatrix questionnaire core: a screen-flow state machine over the
//! wellbeing check-in, plus the scoring and report-selection engine.
//! Question and report wording live under `resources/` as data.

use once_cell::sync::Lazy;

pub mod bulk;
pub mod flow;
pub mod profile;
pub mod questions;
pub mod score;

pub use bulk::read_bulk;
pub use flow::{Effect, Event, Flow, Screen, ADVANCE_DELAY};
pub use profile::{Field, FieldError, Gender, InfoForm, UserProfile};
pub use questions::{QuestionSet, Rating, Responses};
pub use score::{band_of, compute_score, select_report, Band, ReportPayload};

/// The questionnaire master, fixed at startup.
pub static QUESTIONS: Lazy<QuestionSet> = Lazy::new(|| {
    let f = std::fs::File::open("resources/questions.json").unwrap();
    let reader = std::io::BufReader::new(f);
    serde_json::from_reader(reader).unwrap()
});

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Answer value outside the 1..=5 rating scale.
    #[error("answers must be a rating between 1 and 5")]
    IllegalAnswer,
    /// Question index outside the questionnaire.
    #[error("no such question")]
    IllegalQuestion,
    #[error("malformed bulk row: {0}")]
    MalformedRow(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

// `io::Error` and `csv::Error` are not comparable, so `PartialEq` cannot be
// derived; wrapped foreign errors never compare equal.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::IllegalAnswer, Error::IllegalAnswer)
            | (Error::IllegalQuestion, Error::IllegalQuestion) => true,
            (Error::MalformedRow(a), Error::MalformedRow(b)) => a == b,
            _ => false,
        }
    }
}
