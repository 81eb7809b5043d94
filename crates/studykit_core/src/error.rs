//! Panel operation errors.
//!
//! # Responsibility
//! - Describe why a panel operation left state untouched.
//!
//! # Invariants
//! - Every error path is a no-op on panel state; hosts may surface the
//!   message or drop it silently.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PanelResult<T> = Result<T, PanelError>;

/// Rejection reasons for panel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// A required form field was empty.
    MissingField(&'static str),
    /// Score text did not parse as a finite number.
    InvalidScore(String),
    /// Attendance name was empty or whitespace-only.
    BlankName,
    /// Quiz source text had too few usable lines.
    NotEnoughItems { found: usize, required: usize },
    /// Quiz action requires a running session.
    NotInProgress,
    /// Shell input (symptoms or chat) was blank.
    BlankMessage,
    /// Panel is hidden under the mount-on-demand tab policy.
    NotMounted(&'static str),
}

impl Display for PanelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::InvalidScore(value) => write!(f, "score is not a number: `{value}`"),
            Self::BlankName => write!(f, "student name must not be blank"),
            Self::NotEnoughItems { found, required } => write!(
                f,
                "quiz needs at least {required} items, got {found}"
            ),
            Self::NotInProgress => write!(f, "quiz is not in progress"),
            Self::BlankMessage => write!(f, "message must not be blank"),
            Self::NotMounted(tab) => write!(f, "panel is not mounted: {tab}"),
        }
    }
}

impl Error for PanelError {}

#[cfg(test)]
mod tests {
    use super::PanelError;

    #[test]
    fn display_names_the_rejected_input() {
        assert_eq!(
            PanelError::MissingField("room").to_string(),
            "required field is empty: room"
        );
        assert_eq!(
            PanelError::NotEnoughItems {
                found: 3,
                required: 5
            }
            .to_string(),
            "quiz needs at least 5 items, got 3"
        );
        assert_eq!(
            PanelError::NotMounted("quiz").to_string(),
            "panel is not mounted: quiz"
        );
    }
}
