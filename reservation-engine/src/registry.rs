//! Reservation registry
//!
//! Owns the dining tables and the active bookings of one session and keeps
//! them consistent: a table is occupied if and only if exactly one booking
//! in the registry refers to it. Every mutation goes through a method on
//! [`Registry`]; callers only receive shared references to the collections.
//!
//! Expected failures (unknown table, occupied table, duplicate name, bad
//! window) come back as [`AppError`] values and leave the registry
//! untouched.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::core::{Clock, Config, SystemClock};
use crate::utils::time::{end_after, end_after_hours};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_seats};
use shared::{AppError, AppResult, Booking, OccupancySummary, StatusEntry, Table, TableStatus};

/// Session-scoped table and booking registry
pub struct Registry {
    config: Config,
    clock: Box<dyn Clock>,
    tables: Vec<Table>,
    bookings: Vec<Booking>,
}

impl Registry {
    /// Empty registry on the local wall clock
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Empty registry on a caller-supplied clock
    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
            tables: Vec::new(),
            bookings: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Append a free table. Names are unique within the registry.
    pub fn add_table(&mut self, name: &str, seats: u32) -> AppResult<()> {
        validate_required_text(name, "Table name", MAX_NAME_LEN)?;
        validate_seats(seats)?;

        if self.table(name).is_some() {
            warn!(table = %name, "Rejected duplicate table name");
            return Err(AppError::table_name_exists(name));
        }

        self.tables.push(Table::new(name, seats));
        info!(table = %name, seats, "Table added");
        Ok(())
    }

    /// Append a free table with the configured default seat count
    pub fn add_table_with_default_seats(&mut self, name: &str) -> AppResult<()> {
        self.add_table(name, self.config.default_table_seats)
    }

    /// Remove a table together with its booking, if any
    pub fn delete_table(&mut self, table_name: &str) -> AppResult<Table> {
        let index = self.table_index(table_name)?;

        if let Some(booking) = self.remove_booking_for(table_name) {
            debug!(
                table = %table_name,
                client = %booking.client_name,
                "Dropped booking of deleted table"
            );
        }

        let mut table = self.tables.remove(index);
        table.release();
        info!(table = %table_name, "Table deleted");
        Ok(table)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Book a free table for `[start_time, end_time)`
    ///
    /// Fails with `InvalidBookingWindow` unless `end_time > start_time`,
    /// `TableNotFound` for an unknown name and `TableOccupied` when the
    /// table already carries a booking. A past `start_time` is accepted.
    pub fn create_reservation(
        &mut self,
        client_name: &str,
        phone: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        table_name: &str,
    ) -> AppResult<Booking> {
        if end_time <= start_time {
            warn!(table = %table_name, %start_time, %end_time, "Rejected empty booking window");
            return Err(AppError::invalid_booking_window(start_time, end_time));
        }

        let Some(table) = self.tables.iter_mut().find(|t| t.name() == table_name) else {
            warn!(table = %table_name, "Reservation for unknown table");
            return Err(AppError::table_not_found(table_name));
        };

        if table.is_occupied() {
            warn!(table = %table_name, client = %client_name, "Reservation for occupied table");
            return Err(AppError::table_occupied(table_name));
        }

        table.take();
        let booking = Booking {
            client_name: client_name.to_string(),
            phone: phone.to_string(),
            start_time,
            end_time,
            table_name: table_name.to_string(),
        };
        self.bookings.push(booking.clone());

        info!(
            table = %table_name,
            client = %client_name,
            %start_time,
            %end_time,
            "Reservation created"
        );
        Ok(booking)
    }

    /// Book a table from `start_time` for a whole number of hours
    pub fn reserve_for_period(
        &mut self,
        client_name: &str,
        phone: &str,
        start_time: NaiveDateTime,
        period_hours: u32,
        table_name: &str,
    ) -> AppResult<Booking> {
        let end_time = end_after_hours(start_time, period_hours)?;
        self.create_reservation(client_name, phone, start_time, end_time, table_name)
    }

    /// Seat walk-in guests: a temporary booking starting now
    pub fn take_table(&mut self, table_name: &str) -> AppResult<Booking> {
        let now = self.clock.now();
        let end_time = end_after(now, self.config.walk_in_duration())?;
        let client_name = self.config.walk_in_client_name.clone();
        let phone = self.config.walk_in_phone.clone();

        self.create_reservation(&client_name, &phone, now, end_time, table_name)
    }

    /// Free a table, dropping its booking if it has one
    pub fn release_table(&mut self, table_name: &str) -> AppResult<Option<Booking>> {
        let index = self.table_index(table_name)?;
        let removed = self.remove_booking_for(table_name);
        self.tables[index].release();

        info!(
            table = %table_name,
            had_booking = removed.is_some(),
            "Table released"
        );
        Ok(removed)
    }

    /// Cancel the booking on a table and free the table
    pub fn cancel_booking(&mut self, table_name: &str) -> AppResult<Booking> {
        let index = self.table_index(table_name)?;
        let Some(booking) = self.remove_booking_for(table_name) else {
            warn!(table = %table_name, "Cancel requested for table without booking");
            return Err(AppError::booking_not_found(table_name));
        };
        self.tables[index].release();

        info!(table = %table_name, client = %booking.client_name, "Booking cancelled");
        Ok(booking)
    }

    /// Drop every booking that ended before now and free its table
    ///
    /// Reads the clock once. Returns the removed bookings in their original
    /// order; a second call at the same instant removes nothing.
    pub fn release_expired_bookings(&mut self) -> Vec<Booking> {
        let now = self.clock.now();
        self.release_expired_bookings_at(now)
    }

    /// [`Registry::release_expired_bookings`] against an explicit instant
    pub fn release_expired_bookings_at(&mut self, now: NaiveDateTime) -> Vec<Booking> {
        let (expired, active): (Vec<Booking>, Vec<Booking>) = std::mem::take(&mut self.bookings)
            .into_iter()
            .partition(|b| b.is_expired(now));
        self.bookings = active;

        for booking in &expired {
            if let Some(table) = self
                .tables
                .iter_mut()
                .find(|t| t.name() == booking.table_name)
            {
                table.release();
            }
            debug!(
                table = %booking.table_name,
                client = %booking.client_name,
                end_time = %booking.end_time,
                "Booking expired"
            );
        }

        if !expired.is_empty() {
            info!(expired = expired.len(), %now, "Released expired bookings");
        }
        expired
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// One row per active booking, in booking order
    pub fn current_status(&self) -> Vec<StatusEntry> {
        self.bookings.iter().map(Booking::status_entry).collect()
    }

    /// Tables in insertion order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Active bookings in creation order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == name)
    }

    pub fn booking_for(&self, table_name: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.table_name == table_name)
    }

    /// All tables sorted by name
    pub fn tables_by_name(&self) -> Vec<&Table> {
        let mut tables: Vec<&Table> = self.tables.iter().collect();
        tables.sort_by(|a, b| a.name().cmp(b.name()));
        tables
    }

    /// Free tables sorted by name
    pub fn available_tables(&self) -> Vec<&Table> {
        let mut tables = self.tables_by_name();
        tables.retain(|t| !t.is_occupied());
        tables
    }

    /// Status line per table, sorted by name
    pub fn table_statuses(&self) -> Vec<TableStatus> {
        let now = self.clock.now();
        self.tables_by_name()
            .into_iter()
            .map(|table| TableStatus {
                name: table.name().to_string(),
                seats: table.seats(),
                occupied: table.is_occupied(),
                minutes_remaining: if table.is_occupied() {
                    self.booking_for(table.name())
                        .map(|b| b.minutes_remaining(now))
                } else {
                    None
                },
            })
            .collect()
    }

    /// Free tables and seats across the floor
    pub fn occupancy_summary(&self) -> OccupancySummary {
        self.tables
            .iter()
            .fold(OccupancySummary::default(), |mut summary, table| {
                if table.is_occupied() {
                    summary.occupied_tables += 1;
                } else {
                    summary.free_tables += 1;
                    summary.free_seats += table.seats();
                }
                summary
            })
    }

    /// Verify name uniqueness and the occupancy/booking correspondence
    pub fn check_consistency(&self) -> AppResult<()> {
        for (i, table) in self.tables.iter().enumerate() {
            if self.tables[..i].iter().any(|t| t.name() == table.name()) {
                return Err(AppError::internal(format!(
                    "Duplicate table name {}",
                    table.name()
                ))
                .with_detail("table", table.name()));
            }

            let booked = self
                .bookings
                .iter()
                .filter(|b| b.table_name == table.name())
                .count();
            if booked > 1 || table.is_occupied() != (booked == 1) {
                return Err(AppError::internal(format!(
                    "Table {} occupied={} but has {} bookings",
                    table.name(),
                    table.is_occupied(),
                    booked
                ))
                .with_detail("table", table.name()));
            }
        }

        if let Some(orphan) = self
            .bookings
            .iter()
            .find(|b| self.table(&b.table_name).is_none())
        {
            return Err(AppError::internal(format!(
                "Booking for {} refers to a missing table",
                orphan.client_name
            ))
            .with_detail("table", orphan.table_name.as_str()));
        }

        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn table_index(&self, table_name: &str) -> AppResult<usize> {
        self.tables
            .iter()
            .position(|t| t.name() == table_name)
            .ok_or_else(|| AppError::table_not_found(table_name))
    }

    fn remove_booking_for(&mut self, table_name: &str) -> Option<Booking> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.table_name == table_name)?;
        Some(self.bookings.remove(index))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests;
