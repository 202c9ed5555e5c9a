//! Calendar date utilities.
//!
//! Every scheduling decision works on whole calendar days in the device's
//! local time zone. Callers inject a [`Clock`] so that one operation observes
//! one consistent "today".

use chrono::{Duration, Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date, ignoring time of day.
    fn today(&self) -> NaiveDate;
}

/// Device-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a settable date.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move the pinned date forward (or backward for negative `days`).
    pub fn advance_days(&self, days: i64) {
        self.date.set(self.date.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Whole days from `from` to `to`. Negative when `to` is earlier.
pub fn day_diff(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Date `days` after `date`.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_diff_counts_whole_days() {
        assert_eq!(day_diff(date(2024, 3, 1), date(2024, 3, 2)), 1);
        assert_eq!(day_diff(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(day_diff(date(2024, 3, 5), date(2024, 3, 5)), 0);
        assert_eq!(day_diff(date(2024, 3, 5), date(2024, 3, 1)), -4);
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        assert_eq!(add_days(date(2024, 1, 30), 3), date(2024, 2, 2));
    }

    #[test]
    fn fixed_clock_advances() {
        let clock = FixedClock::new(date(2024, 12, 31));
        clock.advance_days(1);
        assert_eq!(clock.today(), date(2025, 1, 1));
        clock.set(date(2024, 6, 1));
        assert_eq!(clock.today(), date(2024, 6, 1));
    }

    #[test]
    fn shared_clock_sees_updates() {
        let clock = Rc::new(FixedClock::new(date(2024, 1, 1)));
        let shared: Box<dyn Clock> = Box::new(Rc::clone(&clock));
        clock.advance_days(10);
        assert_eq!(shared.today(), date(2024, 1, 11));
    }

    #[test]
    fn system_clock_matches_local_date() {
        let today = Local::now().date_naive();
        let result = SystemClock.today();
        // Allow for a midnight rollover between the two reads.
        assert!(day_diff(today, result) == 0 || day_diff(today, result) == 1);
    }
}
