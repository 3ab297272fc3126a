use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OwnerId;

/// Represents a real-world bank account.
///
/// Real transactions are listed against it, and virtual accounts divide
/// it up; its externally visible balance is the aggregate of those
/// virtual accounts, never a direct sum of its own transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealAccount {
    pub id: Uuid,
    pub owner: OwnerId,
    pub name: String,
}

impl RealAccount {
    pub fn new(owner: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
        }
    }
}

/// A budget-linked subdivision of a real account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VirtualAccount {
    pub id: Uuid,
    pub owner: OwnerId,
    pub name: String,
    pub budget_id: Uuid,
    pub real_account_id: Uuid,
}

impl VirtualAccount {
    pub fn new(
        owner: OwnerId,
        name: impl Into<String>,
        budget_id: Uuid,
        real_account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            budget_id,
            real_account_id,
        }
    }
}
