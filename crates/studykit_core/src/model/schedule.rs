//! Class schedule records.
//!
//! # Invariants
//! - `name`, `day`, `time` and `room` are all non-empty on stored entries.

use crate::error::{PanelError, PanelResult};
use crate::ids::EntryId;
use serde::{Deserialize, Serialize};

/// One class session row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub name: String,
    pub day: String,
    pub time: String,
    pub room: String,
}

/// Form draft for a new class session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub name: String,
    pub day: String,
    pub time: String,
    pub room: String,
}

impl ScheduleDraft {
    pub fn new(
        name: impl Into<String>,
        day: impl Into<String>,
        time: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            day: day.into(),
            time: time.into(),
            room: room.into(),
        }
    }

    /// Presence check only; whitespace counts as content.
    pub fn validate(&self) -> PanelResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("day", &self.day),
            ("time", &self.time),
            ("room", &self.room),
        ] {
            if value.is_empty() {
                return Err(PanelError::MissingField(field));
            }
        }
        Ok(())
    }

    pub(crate) fn into_entry(self, id: EntryId) -> ScheduleEntry {
        ScheduleEntry {
            id,
            name: self.name,
            day: self.day,
            time: self.time,
            room: self.room,
        }
    }
}
