//! Two-level balance aggregation and the allocation reconciliation check.

use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::errors::EngineError;

use super::book::Book;

/// Diagnostic for a real transaction whose allocations do not sum to its
/// value. Reported, never enforced at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationIssue {
    pub real_txn_id: Uuid,
    pub expected: Decimal,
    pub allocated: Decimal,
}

impl Book {
    /// Balance of a virtual account: the sum of its transaction values.
    pub fn virtual_account_balance(&self, id: Uuid) -> Result<Decimal, EngineError> {
        if self.virtual_account(id).is_none() {
            return Err(EngineError::NotFound {
                kind: "virtual account",
                id,
            });
        }
        Ok(self
            .virtual_txns
            .iter()
            .filter(|txn| txn.virtual_account_id == id)
            .map(|txn| txn.value)
            .sum())
    }

    /// Balance of a real account: the aggregate of its virtual accounts'
    /// balances, never a direct sum of its own transactions.
    pub fn real_account_balance(&self, id: Uuid) -> Result<Decimal, EngineError> {
        if self.real_account(id).is_none() {
            return Err(EngineError::NotFound {
                kind: "real account",
                id,
            });
        }
        let mut total = Decimal::ZERO;
        let children: Vec<Uuid> = self.virtual_accounts_of(id).map(|account| account.id).collect();
        for child in children {
            total += self.virtual_account_balance(child)?;
        }
        Ok(total)
    }

    /// Sum of virtual-transaction values allocating the given real
    /// transaction.
    pub fn allocated_value(&self, real_txn_id: Uuid) -> Result<Decimal, EngineError> {
        if self.real_txn(real_txn_id).is_none() {
            return Err(EngineError::NotFound {
                kind: "real transaction",
                id: real_txn_id,
            });
        }
        Ok(self.allocations_of(real_txn_id).map(|txn| txn.value).sum())
    }

    /// True iff the real transaction is fully allocated.
    pub fn reconciliation_check(&self, real_txn_id: Uuid) -> Result<bool, EngineError> {
        let txn = self.real_txn(real_txn_id).ok_or(EngineError::NotFound {
            kind: "real transaction",
            id: real_txn_id,
        })?;
        Ok(self.allocated_value(real_txn_id)? == txn.value)
    }

    /// Scans every real transaction and reports the ones whose
    /// allocations drifted from their value.
    pub fn reconciliation_report(&self) -> Vec<ReconciliationIssue> {
        let mut issues = Vec::new();
        for txn in &self.real_txns {
            let allocated: Decimal = self.allocations_of(txn.id).map(|v| v.value).sum();
            if allocated != txn.value {
                warn!(
                    real_txn = %txn.id,
                    %allocated,
                    expected = %txn.value,
                    "real transaction is not fully allocated"
                );
                issues.push(ReconciliationIssue {
                    real_txn_id: txn.id,
                    expected: txn.value,
                    allocated,
                });
            }
        }
        issues
    }
}
