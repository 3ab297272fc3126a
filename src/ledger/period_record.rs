use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One accounting window in a budget's append-only period history.
///
/// Created when a budget's current period expires (or none exists yet),
/// mutated only by close-out, and never deleted once closed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetPeriod {
    pub id: Uuid,
    pub budget_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub closed: bool,
}

impl BudgetPeriod {
    pub fn new(budget_id: Uuid, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            budget_id,
            start_date,
            end_date,
            closed: false,
        }
    }

    /// Returns true if the given date falls within this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// An open period whose end date has passed is due for rollover.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}

/// Money set aside from one real account against one budget period.
///
/// Earmarks may move between periods of the same budget, never between
/// accounts, and disappear only when explicitly released.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Earmark {
    pub id: Uuid,
    pub budget_period_id: Uuid,
    pub real_account_id: Uuid,
    pub amount: Decimal,
}

impl Earmark {
    pub fn new(budget_period_id: Uuid, real_account_id: Uuid, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            budget_period_id,
            real_account_id,
            amount,
        }
    }
}
