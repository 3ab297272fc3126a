use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Calendar settings consumed by the period controllers.
///
/// Replaces the module-level first-day-of-week constant of older
/// deployments; callers construct one and hand it to the factory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodConfig {
    pub first_weekday: Weekday,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Sun,
        }
    }
}

impl PeriodConfig {
    pub fn new(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    /// Builds a config from the persisted 0-6 setting, 0 being Sunday.
    pub fn from_first_day_index(index: u8) -> Result<Self, EngineError> {
        let first_weekday = match index {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            other => return Err(EngineError::InvalidFirstWeekday(other)),
        };
        Ok(Self { first_weekday })
    }

    /// The 0-6 representation of the first weekday, 0 being Sunday.
    pub fn first_day_index(&self) -> u8 {
        self.first_weekday.num_days_from_sunday() as u8
    }
}
