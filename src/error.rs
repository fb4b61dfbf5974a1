//! Quiz error types
//!
//! Every variant is a caller contract violation: an action issued out of
//! sequence or a query with no question to answer. None are retryable.

use thiserror::Error;

use crate::quiz::QuizStatus;

/// Errors returned by the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// There is no current question (quiz not started or all answered).
    #[error("no current question: index {index} of {len}")]
    OutOfRange { index: usize, len: usize },

    /// An action was issued in a state that does not accept it.
    #[error("cannot {action} while quiz is {status:?}")]
    InvalidState {
        action: &'static str,
        status: QuizStatus,
    },
}

pub type Result<T> = std::result::Result<T, QuizError>;
