use std::time::Duration;

use log::debug;

use crate::profile::{FieldError, InfoForm, UserProfile};
use crate::questions::{QuestionSet, Rating, Responses};
use crate::score::{compute_score, select_report, ReportPayload};

/// Pause between answering a question and showing the next one.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Info,
    StartTracking,
    Question { index: usize },
    Score,
    Report,
}

/// Everything the input surface can emit, one variant per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    SubmitInfo(InfoForm),
    BeginQuestions,
    SelectAnswer(Rating),
    /// The [`ADVANCE_DELAY`] timer requested by a `ScheduleAdvance` effect
    /// has elapsed. The driver feeds this back in; it always fires.
    AdvanceElapsed,
    Finish,
    SeeReport,
    Restart,
}

/// Instructions for the display surface (plus the one timer request).
/// Dispatch never renders anything itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowScreen(Screen),
    RenderQuestion {
        index: usize,
        total: usize,
        text: String,
        selected: Option<Rating>,
        finish_visible: bool,
    },
    FieldErrors(Vec<FieldError>),
    PromptAnswerLast,
    ScheduleAdvance(Duration),
    ShowScore(u8),
    ShowReport(ReportPayload),
}

/// The flow controller. Owns every piece of mutable session state and
/// changes it only inside [`Flow::dispatch`].
#[derive(Debug)]
pub struct Flow<'a> {
    questions: &'a QuestionSet,
    screen: Screen,
    profile: Option<UserProfile>,
    responses: Responses,
    score: u8,
    /// Reentrancy guard: set while an advance timer is pending, so a rapid
    /// second answer cannot schedule a second transition.
    advancing: bool,
}

impl<'a> Flow<'a> {
    pub fn new(questions: &'a QuestionSet) -> Self {
        Self {
            questions,
            screen: Screen::Welcome,
            profile: None,
            responses: Responses::new(questions.len()),
            score: 0,
            advancing: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Single entry point: map (current screen, event) to a new screen and
    /// the effects the surfaces should perform. Events that do not apply
    /// to the current screen are ignored; nothing here panics or returns
    /// an error to the caller.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        match (self.screen, event) {
            (_, Event::Restart) => self.restart(),
            (Screen::Welcome, Event::Start) => {
                self.screen = Screen::Info;
                vec![Effect::ShowScreen(Screen::Info)]
            }
            (Screen::Info, Event::SubmitInfo(form)) => self.submit_info(&form),
            (Screen::StartTracking, Event::BeginQuestions) => {
                self.screen = Screen::Question { index: 0 };
                vec![Effect::ShowScreen(self.screen), self.render_question(0)]
            }
            (Screen::Question { index }, Event::SelectAnswer(rating)) => {
                self.select_answer(index, rating)
            }
            (Screen::Question { index }, Event::AdvanceElapsed) => self.advance(index),
            (Screen::Question { index }, Event::Finish) => self.finish(index),
            (Screen::Score, Event::SeeReport) => {
                let name = self.profile.as_ref().map_or("", |p| p.name.as_str());
                let payload = select_report(self.score, name);
                self.screen = Screen::Report;
                vec![
                    Effect::ShowScreen(Screen::Report),
                    Effect::ShowReport(payload),
                ]
            }
            (screen, event) => {
                debug!("ignoring {event:?} on {screen:?}");
                Vec::new()
            }
        }
    }

    fn submit_info(&mut self, form: &InfoForm) -> Vec<Effect> {
        match form.validate() {
            Ok(profile) => {
                debug!("info accepted for {}", profile.name);
                self.profile = Some(profile);
                self.screen = Screen::StartTracking;
                vec![Effect::ShowScreen(Screen::StartTracking)]
            }
            Err(errors) => vec![Effect::FieldErrors(errors)],
        }
    }

    fn select_answer(&mut self, index: usize, rating: Rating) -> Vec<Effect> {
        if self.advancing {
            debug!("answer ignored, advance pending from question {index}");
            return Vec::new();
        }
        if self.responses.set(index, rating).is_err() {
            debug!("answer ignored, no question at index {index}");
            return Vec::new();
        }
        let rendered = self.render_question(index);
        if index + 1 < self.questions.len() {
            self.advancing = true;
            vec![rendered, Effect::ScheduleAdvance(ADVANCE_DELAY)]
        } else {
            // Last question: stay put until an explicit Finish.
            vec![rendered]
        }
    }

    fn advance(&mut self, index: usize) -> Vec<Effect> {
        if !self.advancing {
            debug!("stray advance timer on question {index}");
            return Vec::new();
        }
        // Release the guard before anything else so no path out of this
        // transition can leave the flow locked.
        self.advancing = false;
        let next = index + 1;
        self.screen = Screen::Question { index: next };
        vec![self.render_question(next)]
    }

    fn finish(&mut self, index: usize) -> Vec<Effect> {
        if index + 1 != self.questions.len() {
            debug!("finish ignored before the last question");
            return Vec::new();
        }
        if !self.responses.is_answered(index) {
            return vec![Effect::PromptAnswerLast];
        }
        self.score = compute_score(&self.responses);
        self.screen = Screen::Score;
        vec![
            Effect::ShowScreen(Screen::Score),
            Effect::ShowScore(self.score),
        ]
    }

    fn restart(&mut self) -> Vec<Effect> {
        debug!("restart from {:?}", self.screen);
        self.profile = None;
        self.responses.clear();
        self.score = 0;
        self.advancing = false;
        self.screen = Screen::Welcome;
        vec![Effect::ShowScreen(Screen::Welcome)]
    }

    fn render_question(&self, index: usize) -> Effect {
        Effect::RenderQuestion {
            index,
            total: self.questions.len(),
            text: self.questions.get(index).unwrap_or_default().to_string(),
            selected: self.responses.get(index),
            finish_visible: index + 1 == self.questions.len(),
        }
    }
}
