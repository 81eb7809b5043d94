//! Attendance tracker.
//!
//! # Invariants
//! - At most one record per trimmed name; names are case-sensitive.
//! - Records keep first-seen order.

use crate::error::{PanelError, PanelResult};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use log::debug;

#[derive(Debug, Default)]
pub struct AttendancePanel {
    records: Vec<AttendanceRecord>,
    name_draft: String,
}

impl AttendancePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&AttendanceRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn name_draft(&self) -> &str {
        &self.name_draft
    }

    pub fn set_name_draft(&mut self, name: impl Into<String>) {
        self.name_draft = name.into();
    }

    /// Records one event for `name`, creating the student if needed.
    pub fn record(&mut self, name: &str, status: AttendanceStatus) -> PanelResult<&AttendanceRecord> {
        let key = name.trim();
        if key.is_empty() {
            debug!("event=attendance_record module=attendance status=rejected reason=blank_name");
            return Err(PanelError::BlankName);
        }

        let index = match self.records.iter().position(|record| record.name == key) {
            Some(index) => {
                self.records[index].bump(status);
                index
            }
            None => {
                self.records.push(AttendanceRecord::first(key, status));
                self.records.len() - 1
            }
        };
        debug!(
            "event=attendance_record module=attendance status=ok kind={} students={}",
            status.as_str(),
            self.records.len()
        );
        Ok(&self.records[index])
    }

    /// Records using the name draft; the draft is kept for repeat events.
    pub fn submit(&mut self, status: AttendanceStatus) -> PanelResult<&AttendanceRecord> {
        let name = self.name_draft.clone();
        self.record(&name, status)
    }

    /// Drops one student; returns whether a record was removed.
    pub fn reset(&mut self, name: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.name != name);
        let removed = self.records.len() != before;
        debug!("event=attendance_reset module=attendance status=ok removed={removed}");
        removed
    }

    pub fn clear_all(&mut self) {
        self.records.clear();
        debug!("event=attendance_clear module=attendance status=ok");
    }
}

#[cfg(test)]
mod tests {
    use super::AttendancePanel;
    use crate::error::PanelError;
    use crate::model::attendance::AttendanceStatus;

    #[test]
    fn record_trims_name_and_rejects_blank() {
        let mut panel = AttendancePanel::new();
        assert_eq!(
            panel.record("   ", AttendanceStatus::Present).unwrap_err(),
            PanelError::BlankName
        );
        panel.record("  Ana ", AttendanceStatus::Present).unwrap();
        panel.record("Ana", AttendanceStatus::Late).unwrap();
        assert_eq!(panel.records().len(), 1);
        let ana = panel.get("Ana").expect("Ana record");
        assert_eq!((ana.present, ana.absent, ana.late), (1, 0, 1));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut panel = AttendancePanel::new();
        panel.record("ana", AttendanceStatus::Present).unwrap();
        panel.record("Ana", AttendanceStatus::Present).unwrap();
        assert_eq!(panel.records().len(), 2);
    }

    #[test]
    fn submit_uses_and_keeps_name_draft() {
        let mut panel = AttendancePanel::new();
        panel.set_name_draft("Ben");
        panel.submit(AttendanceStatus::Absent).unwrap();
        panel.submit(AttendanceStatus::Absent).unwrap();
        assert_eq!(panel.name_draft(), "Ben");
        assert_eq!(panel.get("Ben").map(|record| record.absent), Some(2));
    }

    #[test]
    fn reset_removes_only_named_student() {
        let mut panel = AttendancePanel::new();
        panel.record("Ana", AttendanceStatus::Present).unwrap();
        panel.record("Ben", AttendanceStatus::Present).unwrap();
        assert!(panel.reset("Ana"));
        assert!(!panel.reset("Ana"));
        assert_eq!(panel.records().len(), 1);
        panel.clear_all();
        assert!(panel.records().is_empty());
    }
}
