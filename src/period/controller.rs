use chrono::{Datelike, Duration, NaiveDate};

use crate::config::PeriodConfig;

/// Closed set of boundary controllers, one per period kind.
///
/// Boundaries are inclusive on both ends: `end_of_period` is the last
/// date of the period, and the next period starts one day later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodController {
    Week(WeekController),
    Month(MonthController),
    Year(YearController),
}

impl PeriodController {
    pub fn start_of_period(&self, reference: NaiveDate) -> NaiveDate {
        match self {
            Self::Week(controller) => controller.start_of_period(reference),
            Self::Month(controller) => controller.start_of_period(reference),
            Self::Year(controller) => controller.start_of_period(reference),
        }
    }

    pub fn end_of_period(&self, reference: NaiveDate) -> NaiveDate {
        match self {
            Self::Week(controller) => controller.end_of_period(reference),
            Self::Month(controller) => controller.end_of_period(reference),
            Self::Year(controller) => controller.end_of_period(reference),
        }
    }

    /// Closed-interval membership test against the period containing `now`.
    pub fn in_current_period(&self, now: NaiveDate, candidate: NaiveDate) -> bool {
        candidate >= self.start_of_period(now) && candidate <= self.end_of_period(now)
    }
}

/// Week boundaries honoring the configured first day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekController {
    config: PeriodConfig,
}

impl WeekController {
    pub fn new(config: PeriodConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PeriodConfig {
        self.config
    }

    /// Most recent configured first weekday at or before the reference.
    pub fn start_of_period(&self, reference: NaiveDate) -> NaiveDate {
        let reference_index = reference.weekday().num_days_from_sunday() as i64;
        let first_index = self.config.first_weekday.num_days_from_sunday() as i64;
        let delta = (reference_index - first_index).rem_euclid(7);
        reference - Duration::days(delta)
    }

    pub fn end_of_period(&self, reference: NaiveDate) -> NaiveDate {
        self.start_of_period(reference) + Duration::days(6)
    }
}

/// Calendar month boundaries, accounting for variable month lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthController;

impl MonthController {
    pub fn new() -> Self {
        Self
    }

    pub fn start_of_period(&self, reference: NaiveDate) -> NaiveDate {
        reference.with_day(1).unwrap()
    }

    pub fn end_of_period(&self, reference: NaiveDate) -> NaiveDate {
        let last_day = days_in_month(reference.year(), reference.month());
        NaiveDate::from_ymd_opt(reference.year(), reference.month(), last_day).unwrap()
    }
}

/// Calendar year boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearController;

impl YearController {
    pub fn new() -> Self {
        Self
    }

    pub fn start_of_period(&self, reference: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap()
    }

    pub fn end_of_period(&self, reference: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
