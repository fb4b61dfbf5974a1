//! Lunar phase questions and the fixed question bank

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Phases the learner is asked to place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
}

impl MoonPhase {
    /// Every phase in the quiz, in canonical order
    pub const ALL: [MoonPhase; 3] = [
        MoonPhase::NewMoon,
        MoonPhase::FirstQuarter,
        MoonPhase::FullMoon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::FullMoon => "Full Moon",
        }
    }

    /// Orbital angle (degrees) where the Moon shows this phase
    pub fn target_angle(&self) -> f32 {
        match self {
            MoonPhase::NewMoon => NEW_MOON_ANGLE,
            MoonPhase::FirstQuarter => FIRST_QUARTER_ANGLE,
            MoonPhase::FullMoon => FULL_MOON_ANGLE,
        }
    }

    /// Opaque sprite key the host resolves to an image
    pub fn sprite(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "moon_phase_new",
            MoonPhase::FirstQuarter => "moon_phase_first_quarter",
            MoonPhase::FullMoon => "moon_phase_full",
        }
    }
}

/// A single quiz question
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub phase: MoonPhase,
    /// Target angle in degrees, [0, 360)
    pub target_angle: f32,
}

impl Question {
    pub fn new(phase: MoonPhase) -> Self {
        Self {
            phase,
            target_angle: phase.target_angle(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn sprite(&self) -> &'static str {
        self.phase.sprite()
    }
}

/// Builds the fixed question set
pub struct QuestionBank;

impl QuestionBank {
    /// All phases as questions, uniformly shuffled (Fisher-Yates) with `rng`
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Vec<Question> {
        let mut questions: Vec<Question> =
            MoonPhase::ALL.iter().copied().map(Question::new).collect();
        questions.shuffle(rng);
        questions
    }
}
