//! Grading
//!
//! Two independent scales: a letter grade for the cumulative displacement of
//! a whole quiz, and a qualitative message for a single answer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Letter grade for a completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade a cumulative displacement (degrees); first matching threshold wins
pub fn grade(total_displacement: f32) -> Grade {
    if total_displacement == 0.0 {
        Grade::APlus
    } else if total_displacement <= GRADE_A_MAX {
        Grade::A
    } else if total_displacement <= GRADE_B_MAX {
        Grade::B
    } else if total_displacement <= GRADE_C_MAX {
        Grade::C
    } else if total_displacement <= GRADE_D_MAX {
        Grade::D
    } else {
        Grade::F
    }
}

/// Qualitative rating of a single answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Perfect,
    Excellent,
    Good,
    Fair,
    Missed,
}

impl Feedback {
    /// Message shown to the learner after submitting
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Perfect => "Perfect! The Moon is exactly where that phase appears.",
            Feedback::Excellent => "Excellent! You're very close to the right position.",
            Feedback::Good => "Good job! You're in the right neighborhood.",
            Feedback::Fair => "Not bad, but the Moon should be a bit further around its orbit.",
            Feedback::Missed => "Not quite. Think about where the Sun lights the Moon for this phase.",
        }
    }
}

/// Rate one answer's displacement (degrees)
pub fn feedback(displacement: f32) -> Feedback {
    if displacement == 0.0 {
        Feedback::Perfect
    } else if displacement <= FEEDBACK_EXCELLENT_MAX {
        Feedback::Excellent
    } else if displacement <= FEEDBACK_GOOD_MAX {
        Feedback::Good
    } else if displacement <= FEEDBACK_FAIR_MAX {
        Feedback::Fair
    } else {
        Feedback::Missed
    }
}
