use serde::Deserialize;

use crate::Error;

/// One of the five answer options on the agreement scale.
///
/// Constructing a `Rating` goes through [`TryFrom<u8>`], so a value outside
/// 1..=5 can never enter a [`Responses`] store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::StronglyDisagree,
        Rating::Disagree,
        Rating::Neutral,
        Rating::Agree,
        Rating::StronglyAgree,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::StronglyDisagree => "Strongly disagree",
            Rating::Disagree => "Disagree",
            Rating::Neutral => "Neutral",
            Rating::Agree => "Agree",
            Rating::StronglyAgree => "Strongly agree",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            1 => Ok(Rating::StronglyDisagree),
            2 => Ok(Rating::Disagree),
            3 => Ok(Rating::Neutral),
            4 => Ok(Rating::Agree),
            5 => Ok(Rating::StronglyAgree),
            _ => Err(Error::IllegalAnswer),
        }
    }
}

/// Ordered, immutable set of questionnaire statements, fixed at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionSet {
    questions: Vec<String>,
}

impl QuestionSet {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One answer slot per question; `None` is "unanswered".
///
/// The length is fixed at construction so it always matches the question set
/// it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responses {
    slots: Vec<Option<Rating>>,
}

impl Responses {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Record the answer for one question, replacing any previous answer.
    pub fn set(&mut self, index: usize, rating: Rating) -> Result<(), Error> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(rating);
                Ok(())
            }
            None => Err(Error::IllegalQuestion),
        }
    }

    pub fn get(&self, index: usize) -> Option<Rating> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Reset every slot to unanswered.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<Rating>] {
        &self.slots
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::QUESTIONS;

    #[test]
    fn test_rating_try_from() {
        assert!(Rating::try_from(0).is_err());
        assert_eq!(Rating::try_from(1).map(Rating::value), Ok(1));
        assert_eq!(Rating::try_from(3).map(Rating::value), Ok(3));
        assert_eq!(Rating::try_from(5).map(Rating::value), Ok(5));
        assert!(Rating::try_from(6).is_err());
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(Rating::ALL.len(), 5);
        assert_eq!(Rating::StronglyDisagree.label(), "Strongly disagree");
        assert_eq!(Rating::StronglyAgree.label(), "Strongly agree");
        for (offset, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(rating.value() as usize, offset + 1);
        }
    }

    #[test]
    fn test_question_set_resource() {
        assert_eq!(QUESTIONS.len(), 10);
        assert!(QUESTIONS.get(0).is_some());
        assert!(QUESTIONS.get(9).is_some());
        assert_eq!(QUESTIONS.get(10), None);
    }

    #[test]
    fn test_responses_set_get() {
        let mut responses = Responses::new(3);
        assert!(!responses.is_answered(0));
        assert!(responses.set(0, Rating::Agree).is_ok());
        assert_eq!(responses.get(0), Some(Rating::Agree));
        assert!(responses.set(0, Rating::Disagree).is_ok());
        assert_eq!(responses.get(0), Some(Rating::Disagree));
        assert!(responses.set(3, Rating::Agree).is_err());
        assert_eq!(responses.get(3), None);
    }

    #[test]
    fn test_responses_clear() {
        let mut responses = Responses::new(2);
        responses.set(0, Rating::Neutral).unwrap();
        responses.set(1, Rating::StronglyAgree).unwrap();
        responses.clear();
        assert_eq!(responses, Responses::new(2));
    }
}
