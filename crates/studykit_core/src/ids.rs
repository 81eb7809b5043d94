//! Identifier sources for panel records.
//!
//! # Responsibility
//! - Mint unique record ids without relying on wall-clock ticks.
//!
//! # Invariants
//! - A source never returns the same id twice.
//! - Returned ids are never nil.

use std::cell::Cell;
use uuid::Uuid;

/// Stable identifier for list-backed panel records.
pub type EntryId = Uuid;

/// Injected id generator shared by the panels of one widget.
pub trait IdSource {
    fn next_id(&self) -> EntryId;
}

/// Random UUID v4 ids. Default for hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> EntryId {
        Uuid::new_v4()
    }
}

/// Monotonic counter ids encoded as UUIDs, deterministic across runs.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: Cell<u128>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> EntryId {
        let next = self.last.get() + 1;
        self.last.set(next);
        Uuid::from_u128(next)
    }
}
