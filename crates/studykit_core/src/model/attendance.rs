//! Attendance counters.

use serde::{Deserialize, Serialize};

/// Event recorded against a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }
}

/// Per-student tallies keyed by trimmed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
}

impl AttendanceRecord {
    /// First event for a new student: triggering counter starts at 1.
    pub fn first(name: impl Into<String>, status: AttendanceStatus) -> Self {
        let mut record = Self {
            name: name.into(),
            present: 0,
            absent: 0,
            late: 0,
        };
        record.bump(status);
        record
    }

    /// Increments only the counter matching `status`.
    pub fn bump(&mut self, status: AttendanceStatus) {
        let counter = match status {
            AttendanceStatus::Present => &mut self.present,
            AttendanceStatus::Absent => &mut self.absent,
            AttendanceStatus::Late => &mut self.late,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        self.present
            .saturating_add(self.absent)
            .saturating_add(self.late)
    }
}
