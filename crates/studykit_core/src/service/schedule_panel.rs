//! Class schedule builder.
//!
//! # Responsibility
//! - Keep the ordered list of class sessions and the add-form draft.
//!
//! # Invariants
//! - New entries are appended last.
//! - Rejected adds leave entries and draft untouched.

use crate::error::PanelResult;
use crate::ids::{EntryId, IdSource};
use crate::model::schedule::{ScheduleDraft, ScheduleEntry};
use log::debug;
use std::rc::Rc;

pub struct SchedulePanel {
    entries: Vec<ScheduleEntry>,
    draft: ScheduleDraft,
    ids: Rc<dyn IdSource>,
}

impl SchedulePanel {
    pub fn new(ids: Rc<dyn IdSource>) -> Self {
        Self {
            entries: Vec::new(),
            draft: ScheduleDraft::default(),
            ids,
        }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn draft(&self) -> &ScheduleDraft {
        &self.draft
    }

    /// Form binding for the host's input fields.
    pub fn draft_mut(&mut self) -> &mut ScheduleDraft {
        &mut self.draft
    }

    /// Appends an entry built from `fields`.
    pub fn add(&mut self, fields: ScheduleDraft) -> PanelResult<EntryId> {
        if let Err(err) = fields.validate() {
            debug!("event=schedule_add module=schedule status=rejected reason=\"{err}\"");
            return Err(err);
        }
        let id = self.ids.next_id();
        self.entries.push(fields.into_entry(id));
        debug!(
            "event=schedule_add module=schedule status=ok count={}",
            self.entries.len()
        );
        Ok(id)
    }

    /// Adds the current draft and clears it on success.
    pub fn submit(&mut self) -> PanelResult<EntryId> {
        let id = self.add(self.draft.clone())?;
        self.draft = ScheduleDraft::default();
        Ok(id)
    }

    /// Removes the entry with `id`; returns whether one was removed.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        debug!("event=schedule_delete module=schedule status=ok removed={removed}");
        removed
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        debug!("event=schedule_clear module=schedule status=ok");
    }
}

#[cfg(test)]
mod tests {
    use super::SchedulePanel;
    use crate::error::PanelError;
    use crate::ids::SequentialIds;
    use crate::model::schedule::ScheduleDraft;
    use std::rc::Rc;

    fn panel() -> SchedulePanel {
        SchedulePanel::new(Rc::new(SequentialIds::new()))
    }

    #[test]
    fn submit_clears_draft_only_on_success() {
        let mut panel = panel();
        panel.draft_mut().name = "Physics".to_string();
        assert_eq!(panel.submit(), Err(PanelError::MissingField("day")));
        assert_eq!(panel.draft().name, "Physics");

        *panel.draft_mut() = ScheduleDraft::new("Physics", "Tue", "10:00", "Lab 2");
        panel.submit().expect("complete draft");
        assert_eq!(panel.draft(), &ScheduleDraft::default());
        assert_eq!(panel.entries()[0].room, "Lab 2");
    }

    #[test]
    fn clear_all_empties_entries() {
        let mut panel = panel();
        panel
            .add(ScheduleDraft::new("Math", "Mon", "09:00", "B12"))
            .unwrap();
        panel.clear_all();
        assert!(panel.entries().is_empty());
    }
}
