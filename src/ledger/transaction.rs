use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OwnerId;

/// A transaction against a real account.
///
/// Credit values (money into the account) are positive; debit values
/// (money removed) are negative. Records are append-only; the value is
/// changed only through the explicit service setter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealTransaction {
    pub id: Uuid,
    pub owner: OwnerId,
    pub real_account_id: Uuid,
    pub category_id: Uuid,
    pub value: Decimal,
}

impl RealTransaction {
    pub fn new(owner: OwnerId, real_account_id: Uuid, category_id: Uuid, value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            real_account_id,
            category_id,
            value,
        }
    }
}

/// Allocates a slice of one real transaction to a virtual account.
///
/// Many virtual transactions may reference the same real transaction;
/// a fully allocated real transaction has referencing values summing
/// exactly to its own value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VirtualTransaction {
    pub id: Uuid,
    pub owner: OwnerId,
    pub virtual_account_id: Uuid,
    pub real_txn_id: Uuid,
    pub value: Decimal,
}

impl VirtualTransaction {
    pub fn new(
        owner: OwnerId,
        virtual_account_id: Uuid,
        real_txn_id: Uuid,
        value: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            virtual_account_id,
            real_txn_id,
            value,
        }
    }
}
