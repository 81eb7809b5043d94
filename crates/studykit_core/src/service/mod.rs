//! Panel use-case services.
//!
//! # Responsibility
//! - One stateful service per widget panel, each owning its collection
//!   and form draft.
//! - Keep hosts decoupled from record layout and validation rules.
//!
//! # Invariants
//! - A rejected operation never mutates panel state.

pub mod attendance_panel;
pub mod grades_panel;
pub mod planner_panel;
pub mod quiz_panel;
pub mod schedule_panel;
pub mod shell_service;
