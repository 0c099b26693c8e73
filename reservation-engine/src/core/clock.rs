//! Wall-clock source for expiry and walk-in bookings

use chrono::{Duration, Local, NaiveDateTime};
use shared::AppResult;
use std::cell::Cell;
use std::rc::Rc;

use crate::utils::time::end_after;

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock
///
/// Clones share the same instant, so a test can keep one handle and move
/// time forward after handing the other to a registry.
#[derive(Debug, Clone)]
pub struct FixedClock(Rc<Cell<NaiveDateTime>>);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(Rc::new(Cell::new(at)))
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.0.set(at);
    }

    /// Move time forward; the clock is left unchanged on overflow
    pub fn advance(&self, by: Duration) -> AppResult<()> {
        self.0.set(end_after(self.0.get(), by)?);
        Ok(())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}
