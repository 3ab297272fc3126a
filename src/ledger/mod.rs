//! Ledger domain models and the in-memory book aggregate.

pub mod account;
pub mod balance;
pub mod book;
pub mod budget;
pub mod period_record;
pub mod transaction;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use account::{RealAccount, VirtualAccount};
pub use balance::ReconciliationIssue;
pub use book::Book;
pub use budget::{Budget, Category};
pub use period_record::{BudgetPeriod, Earmark};
pub use transaction::{RealTransaction, VirtualTransaction};

/// Opaque identity of an authenticated owner.
///
/// Set at construction and immutable afterward; used only for ownership
/// filtering, never for any other logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
