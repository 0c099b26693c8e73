//! Booking Model and reservation read models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Active booking on a single table
///
/// Refers to its table by name; table names are unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub client_name: String,
    pub phone: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub table_name: String,
}

impl Booking {
    /// Expired once `end_time` is strictly before `now`
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.end_time < now
    }

    /// Whole minutes left until `end_time`, zero once it has passed
    pub fn minutes_remaining(&self, now: NaiveDateTime) -> i64 {
        (self.end_time - now).num_minutes().max(0)
    }

    /// Project the booking onto its status row
    pub fn status_entry(&self) -> StatusEntry {
        StatusEntry {
            client_name: self.client_name.clone(),
            table_name: self.table_name.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// One row of the current reservation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub client_name: String,
    pub table_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Per-table status line (status page view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStatus {
    pub name: String,
    pub seats: u32,
    pub occupied: bool,
    /// Minutes left on the table's booking; `None` when free or when the
    /// table is occupied without a booking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_remaining: Option<i64>,
}

/// Free capacity across the whole floor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub free_tables: usize,
    pub free_seats: u32,
    pub occupied_tables: usize,
}
