//! Study planner / to-do list.
//!
//! # Responsibility
//! - Keep tasks in creation order with category and completion flag.
//! - Project pending tasks by category and completed tasks separately.

use crate::error::PanelResult;
use crate::ids::{EntryId, IdSource};
use crate::model::planner::{CategoryGroup, PlannerDraft, PlannerTask, TaskCategory};
use log::debug;
use std::rc::Rc;

pub struct PlannerPanel {
    tasks: Vec<PlannerTask>,
    draft: PlannerDraft,
    ids: Rc<dyn IdSource>,
}

impl PlannerPanel {
    pub fn new(ids: Rc<dyn IdSource>) -> Self {
        Self {
            tasks: Vec::new(),
            draft: PlannerDraft::default(),
            ids,
        }
    }

    pub fn tasks(&self) -> &[PlannerTask] {
        &self.tasks
    }

    pub fn draft(&self) -> &PlannerDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PlannerDraft {
        &mut self.draft
    }

    /// Appends a pending task.
    pub fn add(&mut self, fields: PlannerDraft) -> PanelResult<EntryId> {
        if let Err(err) = fields.validate() {
            debug!("event=task_add module=planner status=rejected reason=\"{err}\"");
            return Err(err);
        }
        let id = self.ids.next_id();
        self.tasks.push(PlannerTask {
            id,
            name: fields.name,
            category: fields.category,
            completed: false,
        });
        debug!(
            "event=task_add module=planner status=ok category={} count={}",
            fields.category.as_str(),
            self.tasks.len()
        );
        Ok(id)
    }

    /// Adds the draft; on success resets name and category to `School`.
    pub fn submit(&mut self) -> PanelResult<EntryId> {
        let id = self.add(self.draft.clone())?;
        self.draft = PlannerDraft::default();
        Ok(id)
    }

    /// Flips completion; returns the new flag, or `None` for unknown ids.
    pub fn toggle_complete(&mut self, id: EntryId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=planner status=ok completed={}",
            task.completed
        );
        Some(task.completed)
    }

    /// Removes completed tasks and returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        debug!("event=task_clear_completed module=planner status=ok removed={removed}");
        removed
    }

    pub fn clear_all(&mut self) {
        self.tasks.clear();
        debug!("event=task_clear module=planner status=ok");
    }

    /// Pending tasks per category, in `TaskCategory::ALL` order.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        TaskCategory::ALL
            .into_iter()
            .map(|category| CategoryGroup {
                category,
                tasks: self
                    .tasks
                    .iter()
                    .filter(|task| task.category == category && !task.completed)
                    .collect(),
            })
            .collect()
    }

    pub fn completed(&self) -> Vec<&PlannerTask> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }
}
