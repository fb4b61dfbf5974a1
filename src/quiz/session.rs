//! Quiz session driver
//!
//! Takes the host's actions (start, submit a dragged position, advance),
//! runs them through [`QuizState`] and pushes the results back out through a
//! [`Presenter`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grade::feedback;
use super::scoring::position_to_angle;
use super::state::{Attempt, QuizState, QuizStatus};
use crate::error::Result;
use crate::presenter::Presenter;
use crate::settings::QuizSettings;

/// A presenter-bound quiz session
pub struct QuizSession<P: Presenter> {
    state: QuizState,
    presenter: P,
    rng: Pcg32,
    /// Orbit center (the Earth) that submitted positions are measured around
    origin: Vec2,
    /// True between `on_session_start` and `on_session_end`
    open: bool,
}

impl<P: Presenter> QuizSession<P> {
    /// Create a session; question order follows the configured seed, or
    /// `fallback_seed` when the settings leave it unset
    pub fn new(
        presenter: P,
        settings: &QuizSettings,
        fallback_seed: u64,
        origin: Vec2,
    ) -> Self {
        let seed = settings.effective_seed(fallback_seed);
        log::info!("Quiz session created with seed: {}", seed);
        Self {
            state: QuizState::new(),
            presenter,
            rng: Pcg32::seed_from_u64(seed),
            origin,
            open: false,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Start a new quiz and show its first question
    pub fn start(&mut self) -> Result<()> {
        if let Err(e) = self.state.start(&mut self.rng) {
            log::warn!("Rejected start: {}", e);
            return Err(e);
        }
        log::info!("Quiz started with {} questions", self.state.questions().len());

        self.open = true;
        self.presenter.on_session_start();
        self.show_current()
    }

    /// Score the Moon's dragged position against the current question
    pub fn submit(&mut self, position: Vec2) -> Result<Attempt> {
        let angle = position_to_angle(self.origin, position);
        let attempt = self.state.submit(angle).inspect_err(|e| {
            log::warn!("Rejected submit: {}", e);
        })?;

        let rating = feedback(attempt.displacement);
        self.presenter.on_feedback(rating.message(), attempt.displacement);
        Ok(attempt)
    }

    /// Move to the next question, or finish the quiz after the last one
    pub fn advance(&mut self) -> Result<QuizStatus> {
        let status = self.state.advance().inspect_err(|e| {
            log::warn!("Rejected advance: {}", e);
        })?;

        match status {
            QuizStatus::Completed => {
                let report = self.state.report();
                self.presenter.on_completed(&report);
                self.end_session();
            }
            _ => self.show_current()?,
        }
        Ok(status)
    }

    /// Drop the quiz in progress, if any; the next `start` begins fresh
    pub fn abandon(&mut self) {
        if self.state.status() == QuizStatus::InProgress {
            log::info!(
                "Quiz abandoned after {} answers",
                self.state.attempts().len()
            );
            self.state = QuizState::new();
        }
        self.end_session();
    }

    fn show_current(&mut self) -> Result<()> {
        let question = *self.state.current_question()?;
        self.presenter.on_question_shown(
            self.state.current_index(),
            self.state.questions().len(),
            &question,
        );
        Ok(())
    }

    fn end_session(&mut self) {
        if self.open {
            self.open = false;
            self.presenter.on_session_end();
        }
    }
}

impl<P: Presenter> Drop for QuizSession<P> {
    fn drop(&mut self) {
        self.end_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuizError;
    use crate::quiz::{Grade, MoonPhase, Question, Report, place_at_angle};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        SessionStart,
        Question(usize, usize, MoonPhase),
        Feedback(String, f32),
        Completed(Report),
        SessionEnd,
    }

    /// Records notifications into a log shared with the test
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }

        fn count(&self, event: &Event) -> usize {
            self.0.borrow().iter().filter(|e| *e == event).count()
        }
    }

    impl Presenter for Recorder {
        fn on_session_start(&mut self) {
            self.0.borrow_mut().push(Event::SessionStart);
        }

        fn on_question_shown(&mut self, index: usize, total: usize, question: &Question) {
            self.0
                .borrow_mut()
                .push(Event::Question(index, total, question.phase));
        }

        fn on_feedback(&mut self, message: &str, displacement: f32) {
            self.0
                .borrow_mut()
                .push(Event::Feedback(message.to_string(), displacement));
        }

        fn on_completed(&mut self, report: &Report) {
            self.0.borrow_mut().push(Event::Completed(report.clone()));
        }

        fn on_session_end(&mut self) {
            self.0.borrow_mut().push(Event::SessionEnd);
        }
    }

    const ORIGIN: Vec2 = Vec2::new(-4.0, 2.5);
    const RADIUS: f32 = 10.0;

    fn session(seed: u64) -> (QuizSession<Recorder>, Recorder) {
        let recorder = Recorder::default();
        let settings = QuizSettings::default();
        (QuizSession::new(recorder.clone(), &settings, seed, ORIGIN), recorder)
    }

    fn drag_to(session: &mut QuizSession<Recorder>, degrees: f32) -> Result<Attempt> {
        session.submit(place_at_angle(ORIGIN, RADIUS, degrees))
    }

    #[test]
    fn test_full_session_events() {
        let (mut session, recorder) = session(12345);
        session.start().unwrap();

        let mut phases = Vec::new();
        loop {
            let question = *session.state().current_question().unwrap();
            phases.push(question.phase);
            let answer = match question.phase {
                MoonPhase::NewMoon => 0.0,
                MoonPhase::FirstQuarter => 100.0,
                MoonPhase::FullMoon => 0.0,
            };
            drag_to(&mut session, answer).unwrap();
            if session.advance().unwrap() == QuizStatus::Completed {
                break;
            }
        }

        let state = session.state();
        assert_eq!(state.status(), QuizStatus::Completed);
        assert!((state.total_displacement() - 190.0).abs() < 1e-2);
        assert_eq!(state.report().grade, Some(Grade::F));

        let events = recorder.events();
        assert_eq!(events.len(), 1 + 3 * 2 + 2);
        assert_eq!(events[0], Event::SessionStart);
        assert_eq!(events[1], Event::Question(0, 3, phases[0]));
        assert!(matches!(events[2], Event::Feedback(..)));
        assert_eq!(events[3], Event::Question(1, 3, phases[1]));
        assert_eq!(events[5], Event::Question(2, 3, phases[2]));
        assert!(matches!(
            &events[7],
            Event::Completed(r) if r.grade == Some(Grade::F) && r.per_question_displacement.len() == 3
        ));
        assert_eq!(events[8], Event::SessionEnd);

        drop(session);
        assert_eq!(recorder.count(&Event::SessionEnd), 1);
    }

    #[test]
    fn test_feedback_message_and_displacement() {
        let (mut session, recorder) = session(77);
        session.start().unwrap();
        let target = session.state().current_question().unwrap().target_angle;
        drag_to(&mut session, target).unwrap();

        let events = recorder.events();
        let Some(Event::Feedback(message, displacement)) = events.last() else {
            panic!("expected feedback, got {events:?}");
        };
        assert!(*displacement < 1e-3);
        assert!(message.starts_with("Perfect") || message.starts_with("Excellent"));
    }

    #[test]
    fn test_errors_emit_nothing() {
        let (mut session, recorder) = session(1);
        assert!(matches!(
            session.advance(),
            Err(QuizError::InvalidState { .. })
        ));
        assert!(drag_to(&mut session, 30.0).is_err());
        assert!(recorder.events().is_empty());

        session.start().unwrap();
        drag_to(&mut session, 30.0).unwrap();
        let before = recorder.events().len();
        assert!(drag_to(&mut session, 60.0).is_err());
        assert!(session.start().is_err());
        assert_eq!(recorder.events().len(), before);
    }

    #[test]
    fn test_abandon_ends_session_once() {
        let (mut session, recorder) = session(5);
        session.start().unwrap();
        drag_to(&mut session, 90.0).unwrap();
        session.abandon();
        session.abandon();
        assert_eq!(session.state().status(), QuizStatus::NotStarted);
        assert_eq!(recorder.count(&Event::SessionEnd), 1);

        drop(session);
        assert_eq!(recorder.count(&Event::SessionEnd), 1);
    }

    #[test]
    fn test_drop_in_progress_ends_session() {
        let (mut session, recorder) = session(5);
        session.start().unwrap();
        drop(session);
        assert_eq!(recorder.count(&Event::SessionEnd), 1);
    }

    #[test]
    fn test_drop_unstarted_emits_nothing() {
        let (session, recorder) = session(5);
        drop(session);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_restart_after_completion_opens_new_session() {
        let (mut session, recorder) = session(31);
        for _ in 0..2 {
            session.start().unwrap();
            while session.state().status() == QuizStatus::InProgress {
                drag_to(&mut session, 200.0).unwrap();
                session.advance().unwrap();
            }
        }
        assert_eq!(recorder.count(&Event::SessionStart), 2);
        assert_eq!(recorder.count(&Event::SessionEnd), 2);
    }

    #[test]
    fn test_same_seed_same_order() {
        let (mut a, _) = session(2024);
        let (mut b, _) = session(2024);
        a.start().unwrap();
        b.start().unwrap();
        assert_eq!(a.state().questions(), b.state().questions());
    }

    #[test]
    fn test_configured_seed_overrides_fallback() {
        let settings = QuizSettings {
            seed: Some(2024),
            ..Default::default()
        };
        let mut configured = QuizSession::new(Recorder::default(), &settings, 1, ORIGIN);
        let (mut explicit, _) = session(2024);
        configured.start().unwrap();
        explicit.start().unwrap();
        assert_eq!(configured.state().questions(), explicit.state().questions());
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let (mut session, recorder) = session(8);
        session.start().unwrap();
        let before = recorder.events().len();
        assert!(matches!(
            session.submit(Vec2::new(f32::NAN, 1.0)),
            Err(QuizError::InvalidState { action: "submit", .. })
        ));
        assert_eq!(recorder.events().len(), before);

        drag_to(&mut session, 90.0).unwrap();
        assert!(session.state().total_displacement().is_finite());
    }
}
