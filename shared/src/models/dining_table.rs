//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// `name` and `seats` are fixed at creation. Occupancy is flipped by the
/// registry that owns the table; callers only ever see `&Table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    seats: u32,
    occupied: bool,
}

impl Table {
    /// Create a free table
    pub fn new(name: impl Into<String>, seats: u32) -> Self {
        Self {
            name: name.into(),
            seats,
            occupied: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Mark the table occupied. Idempotent; availability is the caller's check.
    pub fn take(&mut self) {
        self.occupied = true;
    }

    /// Mark the table free. Idempotent.
    pub fn release(&mut self) {
        self.occupied = false;
    }
}
