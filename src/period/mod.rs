//! Period kinds and the boundary-controller factory.

pub mod controller;

use serde::{Deserialize, Serialize};

use crate::{config::PeriodConfig, errors::EngineError};

pub use controller::{MonthController, PeriodController, WeekController, YearController};

/// Persisted code for weekly budget periods.
pub const WEEK_PERIOD: i32 = 10;
/// Persisted code for monthly budget periods.
pub const MONTH_PERIOD: i32 = 20;
/// Persisted code for yearly budget periods.
pub const YEAR_PERIOD: i32 = 30;

/// Enumeration of supported period lengths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodKind {
    Week,
    Month,
    Year,
}

impl PeriodKind {
    /// Resolves a persisted period-length code.
    pub fn from_code(code: i32) -> Result<Self, EngineError> {
        match code {
            WEEK_PERIOD => Ok(Self::Week),
            MONTH_PERIOD => Ok(Self::Month),
            YEAR_PERIOD => Ok(Self::Year),
            other => Err(EngineError::UnsupportedPeriodKind(other)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Week => WEEK_PERIOD,
            Self::Month => MONTH_PERIOD,
            Self::Year => YEAR_PERIOD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// Builds boundary controllers for a given calendar configuration.
///
/// Every `make_controller` call constructs a fresh controller that
/// snapshots the factory's configuration at that moment; controllers are
/// never cached or shared between calls.
#[derive(Debug, Clone, Default)]
pub struct PeriodLengthFactory {
    config: PeriodConfig,
}

impl PeriodLengthFactory {
    pub fn new(config: PeriodConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PeriodConfig {
        self.config
    }

    /// Replaces the calendar configuration used by subsequent controllers.
    pub fn set_config(&mut self, config: PeriodConfig) {
        self.config = config;
    }

    pub fn make_controller(&self, kind: PeriodKind) -> PeriodController {
        match kind {
            PeriodKind::Week => PeriodController::Week(WeekController::new(self.config)),
            PeriodKind::Month => PeriodController::Month(MonthController::new()),
            PeriodKind::Year => PeriodController::Year(YearController::new()),
        }
    }

    /// Resolves a persisted code and builds the matching controller.
    pub fn controller_for_code(&self, code: i32) -> Result<PeriodController, EngineError> {
        Ok(self.make_controller(PeriodKind::from_code(code)?))
    }
}
