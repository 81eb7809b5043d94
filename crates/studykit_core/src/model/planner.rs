//! Study planner tasks.
//!
//! # Invariants
//! - Task names are non-empty.
//! - Categories come from the fixed `TaskCategory::ALL` set.

use crate::error::{PanelError, PanelResult};
use crate::ids::EntryId;
use serde::{Deserialize, Serialize};

/// Fixed task buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    #[default]
    School,
    Personal,
    Exams,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 3] = [Self::School, Self::Personal, Self::Exams];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::School => "School",
            Self::Personal => "Personal",
            Self::Exams => "Exams",
        }
    }

    /// Parses the select-box label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }
}

/// One planner row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerTask {
    pub id: EntryId,
    pub name: String,
    pub category: TaskCategory,
    pub completed: bool,
}

/// Form draft; category defaults to `School`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerDraft {
    pub name: String,
    pub category: TaskCategory,
}

impl PlannerDraft {
    pub fn new(name: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn validate(&self) -> PanelResult<()> {
        if self.name.is_empty() {
            return Err(PanelError::MissingField("name"));
        }
        Ok(())
    }
}

/// Pending tasks for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: TaskCategory,
    pub tasks: Vec<&'a PlannerTask>,
}

#[cfg(test)]
mod tests {
    use super::{PlannerDraft, TaskCategory};
    use crate::error::PanelError;

    #[test]
    fn category_parse_matches_labels() {
        assert_eq!(TaskCategory::parse("Exams"), Some(TaskCategory::Exams));
        assert_eq!(TaskCategory::parse(" Personal "), Some(TaskCategory::Personal));
        assert_eq!(TaskCategory::parse("exams"), None);
    }

    #[test]
    fn draft_defaults_to_school_and_requires_name() {
        let draft = PlannerDraft::default();
        assert_eq!(draft.category, TaskCategory::School);
        assert_eq!(draft.validate(), Err(PanelError::MissingField("name")));
    }
}
