//! Quiz state machine
//!
//! `NotStarted -> InProgress -> Completed`. Restarting is a fresh `start`,
//! not a separate state. Only `start`, `submit` and `advance` mutate.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grade::{Grade, grade};
use super::question::{Question, QuestionBank};
use super::scoring::circular_displacement;
use crate::error::{QuizError, Result};
use crate::normalize_degrees;

/// Lifecycle of a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// A submitted answer (one per question, never mutated)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub question: Question,
    /// Submitted angle, degrees [0, 360)
    pub submitted_angle: f32,
    /// Shortest angular distance to the target, degrees [0, 180]
    pub displacement: f32,
}

/// Results so far, derived from the recorded attempts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_displacement: f32,
    /// Only set once the quiz is completed
    pub grade: Option<Grade>,
    pub per_question_displacement: Vec<f32>,
}

/// Complete quiz state
///
/// Serialize-only: a state is built through `start`/`submit`/`advance`, never
/// loaded from a snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizState {
    questions: Vec<Question>,
    attempts: Vec<Attempt>,
    current_index: usize,
    total_displacement: f32,
    status: QuizStatus,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_displacement(&self) -> f32 {
        self.total_displacement
    }

    /// Begin (or restart) a quiz with freshly shuffled questions
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.status == QuizStatus::InProgress {
            return Err(self.invalid("start"));
        }

        self.questions = QuestionBank::build(rng);
        self.attempts.clear();
        self.current_index = 0;
        self.total_displacement = 0.0;
        self.status = QuizStatus::InProgress;
        Ok(())
    }

    /// The question awaiting an answer
    pub fn current_question(&self) -> Result<&Question> {
        if self.status != QuizStatus::InProgress {
            return Err(self.out_of_range());
        }
        self.questions
            .get(self.current_index)
            .ok_or_else(|| self.out_of_range())
    }

    /// Whether the current question already has an attempt
    pub fn awaiting_advance(&self) -> bool {
        self.status == QuizStatus::InProgress && self.attempts.len() > self.current_index
    }

    /// Score an answer for the current question; does not advance
    pub fn submit(&mut self, angle: f32) -> Result<Attempt> {
        if self.status != QuizStatus::InProgress || self.awaiting_advance() || !angle.is_finite() {
            return Err(self.invalid("submit"));
        }
        let question = *self.current_question()?;

        let submitted_angle = normalize_degrees(angle);
        let attempt = Attempt {
            question,
            submitted_angle,
            displacement: circular_displacement(question.target_angle, submitted_angle),
        };
        self.attempts.push(attempt);
        self.total_displacement += attempt.displacement;

        log::debug!(
            "Submitted {:.1}° for {} (target {:.0}°): off by {:.1}°",
            submitted_angle,
            question.name(),
            question.target_angle,
            attempt.displacement
        );
        Ok(attempt)
    }

    /// Move past an answered question, completing the quiz after the last one
    pub fn advance(&mut self) -> Result<QuizStatus> {
        if !self.awaiting_advance() {
            return Err(self.invalid("advance"));
        }

        self.current_index += 1;
        if self.current_index >= self.questions.len() {
            self.status = QuizStatus::Completed;
            log::info!(
                "Quiz completed: total {:.1}°, grade {}",
                self.total_displacement,
                grade(self.total_displacement)
            );
        } else {
            log::debug!(
                "Advanced to question {}/{}",
                self.current_index + 1,
                self.questions.len()
            );
        }
        Ok(self.status)
    }

    /// Snapshot of results; valid in any state
    pub fn report(&self) -> Report {
        Report {
            total_displacement: self.total_displacement,
            grade: (self.status == QuizStatus::Completed).then(|| grade(self.total_displacement)),
            per_question_displacement: self.attempts.iter().map(|a| a.displacement).collect(),
        }
    }

    /// One-line summary for a host debug HUD
    pub fn debug_overlay(&self) -> String {
        let question = match self.current_question() {
            Ok(q) => q.name(),
            Err(_) => "-",
        };
        format!(
            "{:?} | question {}/{} ({}) | answered {} | total {:.1}°",
            self.status,
            (self.current_index + 1).min(self.questions.len()),
            self.questions.len(),
            question,
            self.attempts.len(),
            self.total_displacement
        )
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidState {
            action,
            status: self.status,
        }
    }

    fn out_of_range(&self) -> QuizError {
        QuizError::OutOfRange {
            index: self.current_index,
            len: self.questions.len(),
        }
    }
}
