//! Grade calculator.
//!
//! # Responsibility
//! - Keep scored subjects in entry order.
//! - Derive average, letter band and pass/fail on demand.

use crate::error::PanelResult;
use crate::ids::{EntryId, IdSource};
use crate::model::grade::{average_of, GradeDraft, GradeEntry, GradeSummary, LetterGrade, Verdict};
use log::debug;
use std::rc::Rc;

pub struct GradesPanel {
    entries: Vec<GradeEntry>,
    draft: GradeDraft,
    ids: Rc<dyn IdSource>,
}

impl GradesPanel {
    pub fn new(ids: Rc<dyn IdSource>) -> Self {
        Self {
            entries: Vec::new(),
            draft: GradeDraft::default(),
            ids,
        }
    }

    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    pub fn draft(&self) -> &GradeDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut GradeDraft {
        &mut self.draft
    }

    /// Appends a grade when the subject is present and the score parses.
    pub fn add(&mut self, fields: GradeDraft) -> PanelResult<EntryId> {
        let score = match fields.validate() {
            Ok(score) => score,
            Err(err) => {
                debug!("event=grade_add module=grades status=rejected reason=\"{err}\"");
                return Err(err);
            }
        };
        let id = self.ids.next_id();
        self.entries.push(GradeEntry {
            id,
            subject: fields.subject,
            score,
        });
        debug!(
            "event=grade_add module=grades status=ok count={}",
            self.entries.len()
        );
        Ok(id)
    }

    pub fn submit(&mut self) -> PanelResult<EntryId> {
        let id = self.add(self.draft.clone())?;
        self.draft = GradeDraft::default();
        Ok(id)
    }

    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        debug!("event=grade_delete module=grades status=ok removed={removed}");
        removed
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        debug!("event=grade_clear module=grades status=ok");
    }

    pub fn average(&self) -> f64 {
        average_of(&self.scores())
    }

    pub fn letter(&self) -> LetterGrade {
        LetterGrade::from_average(self.average())
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_average(self.average())
    }

    pub fn summary(&self) -> GradeSummary {
        GradeSummary::from_scores(&self.scores())
    }

    fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.score).collect()
    }
}
