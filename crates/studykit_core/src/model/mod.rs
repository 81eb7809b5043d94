//! Plain records owned by the widget panels.
//!
//! # Responsibility
//! - Define the flat record and draft shapes each panel stores.
//! - Keep validation rules next to the data they guard.
//!
//! # Invariants
//! - No record references another panel's data.
//! - Records serialize with stable snake_case field names for host snapshots.

pub mod attendance;
pub mod grade;
pub mod planner;
pub mod quiz;
pub mod schedule;
pub mod shell;
