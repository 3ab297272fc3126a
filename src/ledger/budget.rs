use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{period::PeriodKind, policy::EndPolicyKind};

use super::OwnerId;

/// Overall behaviour of a budget: how much is allocated per period, how
/// long a period lasts, and which carry rule applies at close-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub id: Uuid,
    pub owner: OwnerId,
    pub name: String,
    pub period_budget_amount: Decimal,
    pub period_length: PeriodKind,
    pub end_policy: EndPolicyKind,
}

impl Budget {
    pub fn new(
        owner: OwnerId,
        name: impl Into<String>,
        period_budget_amount: Decimal,
        period_length: PeriodKind,
        end_policy: EndPolicyKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            period_budget_amount,
            period_length,
            end_policy,
        }
    }
}

/// Classifies real transactions so they count against one budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub owner: OwnerId,
    pub name: String,
    pub budget_id: Uuid,
}

impl Category {
    pub fn new(owner: OwnerId, name: impl Into<String>, budget_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            budget_id,
        }
    }
}
