//! Presenter contract
//!
//! The rendering host implements this to receive everything it needs to draw
//! the quiz: question prompts, per-answer feedback, the final report, and the
//! session boundaries it uses to pause and resume orbital motion.

use crate::quiz::{Question, Report};

pub trait Presenter {
    /// A quiz session began; the host should stop orbital motion (speed 0)
    fn on_session_start(&mut self);

    /// Show question `index` (0-based) of `total`
    fn on_question_shown(&mut self, index: usize, total: usize, question: &Question);

    /// Show the rating of the answer just submitted
    fn on_feedback(&mut self, message: &str, displacement: f32);

    /// All questions answered
    fn on_completed(&mut self, report: &Report);

    /// The session finished or was abandoned; the host should restore its
    /// default orbital speed. Fires exactly once per session.
    fn on_session_end(&mut self);
}
