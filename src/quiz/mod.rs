//! Quiz core
//!
//! Everything here is pure and deterministic:
//! - Question order comes from an injected, seedable RNG only
//! - Positions are plain 2D points, never engine objects
//! - No rendering or platform dependencies

pub mod grade;
pub mod question;
pub mod scoring;
pub mod session;
pub mod state;

pub use grade::{Feedback, Grade, feedback, grade};
pub use question::{MoonPhase, Question, QuestionBank};
pub use scoring::{circular_displacement, place_at_angle, position_to_angle};
pub use session::QuizSession;
pub use state::{Attempt, QuizState, QuizStatus, Report};
