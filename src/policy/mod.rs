//! End-of-period carry rules applied when a budget period is closed out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Enumeration of carry policies attachable to a budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndPolicyKind {
    /// Surplus or shortfall is carried into the next period in full.
    CarryOverAll,
    /// Surplus is carried; a shortfall resets the next period to zero.
    SurplusCarryNegative,
}

impl EndPolicyKind {
    /// Amount carried into the successor period for a closing balance.
    pub fn carry_amount(self, closing_balance: Decimal) -> Decimal {
        match self {
            Self::CarryOverAll => closing_balance,
            Self::SurplusCarryNegative => closing_balance.max(Decimal::ZERO),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CarryOverAll => "Carry over all",
            Self::SurplusCarryNegative => "Carry surplus only",
        }
    }
}
