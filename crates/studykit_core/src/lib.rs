//! Core state for the StudyKit student-utility widget.
//! This crate is the single source of truth for panel invariants; hosts
//! only render snapshots and forward user events.

pub mod config;
pub mod error;
pub mod ids;
pub mod logging;
pub mod model;
pub mod service;
pub mod timer;
pub mod widget;

pub use config::{ConfigError, QuizConfig, TabPolicy, WidgetConfig};
pub use error::{PanelError, PanelResult};
pub use ids::{EntryId, IdSource, RandomIds, SequentialIds};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendance::{AttendanceRecord, AttendanceStatus};
pub use model::grade::{GradeDraft, GradeEntry, GradeSummary, LetterGrade, Verdict};
pub use model::planner::{CategoryGroup, PlannerDraft, PlannerTask, TaskCategory};
pub use model::quiz::{FinishReason, QuizPhase, QuizView};
pub use model::schedule::{ScheduleDraft, ScheduleEntry};
pub use model::shell::{ChatAuthor, ChatMessage, ShellSection, SymptomReport};
pub use service::attendance_panel::AttendancePanel;
pub use service::grades_panel::GradesPanel;
pub use service::planner_panel::PlannerPanel;
pub use service::quiz_panel::QuizPanel;
pub use service::schedule_panel::SchedulePanel;
pub use service::shell_service::Shell;
pub use timer::{ManualTimerDriver, TimerDriver, TimerHandle, TimerToken};
pub use widget::{Tab, Widget};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
