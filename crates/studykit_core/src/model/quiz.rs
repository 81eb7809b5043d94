//! Quiz item parsing, question selection and session snapshots.
//!
//! # Invariants
//! - Selected questions are a duplicate-free subset of the parsed items
//!   (duplicates in the source text are kept as separate items).
//! - Selection size is `min(max_questions, items.len())`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    Setup,
    InProgress,
    Finished,
}

/// Why a session reached `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Answered,
    TimeUp,
}

/// Splits source text into trimmed, non-empty lines.
pub fn parse_quiz_items(items_text: &str) -> Vec<String> {
    items_text
        .split('\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uniformly shuffles `items` and keeps the first `max_questions`.
pub fn select_questions<R: Rng + ?Sized>(
    mut items: Vec<String>,
    max_questions: usize,
    rng: &mut R,
) -> Vec<String> {
    items.shuffle(rng);
    items.truncate(max_questions.min(items.len()));
    items
}

/// Read-only snapshot for rendering the quiz panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub phase: QuizPhase,
    pub topic: String,
    /// Question on screen while in progress.
    pub current_question: Option<String>,
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub score: usize,
    pub time_left: u32,
    pub finish_reason: Option<FinishReason>,
}

#[cfg(test)]
mod tests {
    use super::{parse_quiz_items, select_questions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let items = parse_quiz_items("  a \n\n b\r\n   \nc");
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn select_caps_at_max_and_keeps_short_lists_whole() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: Vec<String> = (0..4).map(|n| n.to_string()).collect();
        let mut picked = select_questions(items.clone(), 10, &mut rng);
        picked.sort();
        assert_eq!(picked, items);

        let many: Vec<String> = (0..20).map(|n| n.to_string()).collect();
        assert_eq!(select_questions(many, 3, &mut rng).len(), 3);
    }
}
