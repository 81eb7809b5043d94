//! Grade records and derived results.
//!
//! # Invariants
//! - Stored scores are finite.
//! - Average of an empty list is `0.0`.

use crate::error::{PanelError, PanelResult};
use crate::ids::EntryId;
use serde::{Deserialize, Serialize};

/// One scored subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub id: EntryId,
    pub subject: String,
    pub score: f64,
}

/// Form draft; `score` stays text until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeDraft {
    pub subject: String,
    pub score: String,
}

impl GradeDraft {
    pub fn new(subject: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            score: score.into(),
        }
    }

    /// Returns the parsed score when the draft is complete.
    pub fn validate(&self) -> PanelResult<f64> {
        if self.subject.is_empty() {
            return Err(PanelError::MissingField("subject"));
        }
        parse_score(&self.score)
    }
}

/// Parses score text; blank, NaN and infinite values are rejected.
pub fn parse_score(raw: &str) -> PanelResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PanelError::InvalidScore(raw.to_string())),
    }
}

/// Descriptive band for an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    Excellent,
    Good,
    Average,
    Pass,
    Fail,
}

impl LetterGrade {
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::Excellent
        } else if average >= 80.0 {
            Self::Good
        } else if average >= 70.0 {
            Self::Average
        } else if average >= 60.0 {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// Pass/fail cut at 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_average(average: f64) -> Self {
        if average >= 60.0 {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// Results block rendered under the grade table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub average: f64,
    /// Two-decimal rendering, e.g. `"87.50"`.
    pub average_display: String,
    pub letter: LetterGrade,
    pub verdict: Verdict,
}

impl GradeSummary {
    pub fn from_scores(scores: &[f64]) -> Self {
        let average = average_of(scores);
        Self {
            average,
            average_display: format!("{average:.2}"),
            letter: LetterGrade::from_average(average),
            verdict: Verdict::from_average(average),
        }
    }
}

/// Mean with an empty-list guard.
pub fn average_of(scores: &[f64]) -> f64 {
    let sum: f64 = scores.iter().sum();
    sum / scores.len().max(1) as f64
}
