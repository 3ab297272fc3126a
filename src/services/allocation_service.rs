//! Append-only write paths for transactions and earmarks.

use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::{
    errors::EngineError,
    ledger::{Book, Earmark, RealTransaction, VirtualTransaction},
};

/// Validated append and allocation operations over a book.
pub struct AllocationService;

impl AllocationService {
    /// Appends a real transaction after validating its parent account,
    /// owner, and category.
    pub fn record_real_txn(book: &mut Book, txn: RealTransaction) -> Result<Uuid, EngineError> {
        let account = book
            .real_account(txn.real_account_id)
            .ok_or(EngineError::NotFound {
                kind: "real account",
                id: txn.real_account_id,
            })?;
        if account.owner != txn.owner {
            return Err(EngineError::OwnershipViolation {
                kind: "real transaction",
                id: txn.id,
                parent_kind: "real account",
                parent_id: account.id,
            });
        }
        if book.category(txn.category_id).is_none() {
            return Err(EngineError::NotFound {
                kind: "category",
                id: txn.category_id,
            });
        }
        Ok(book.add_real_txn(txn))
    }

    /// Appends a virtual transaction allocating part of a real
    /// transaction. The allocation must stay within the virtual
    /// account's parent real account. Full allocation is reported, not
    /// enforced: an under- or over-allocated real transaction only
    /// produces a warning here and shows up in the reconciliation
    /// report.
    pub fn record_virtual_txn(
        book: &mut Book,
        txn: VirtualTransaction,
    ) -> Result<Uuid, EngineError> {
        let account = book
            .virtual_account(txn.virtual_account_id)
            .ok_or(EngineError::NotFound {
                kind: "virtual account",
                id: txn.virtual_account_id,
            })?;
        if account.owner != txn.owner {
            return Err(EngineError::OwnershipViolation {
                kind: "virtual transaction",
                id: txn.id,
                parent_kind: "virtual account",
                parent_id: account.id,
            });
        }
        let parent_real_account = account.real_account_id;
        let real = book.real_txn(txn.real_txn_id).ok_or(EngineError::NotFound {
            kind: "real transaction",
            id: txn.real_txn_id,
        })?;
        if real.real_account_id != parent_real_account {
            return Err(EngineError::OwnershipViolation {
                kind: "real transaction",
                id: real.id,
                parent_kind: "real account",
                parent_id: parent_real_account,
            });
        }

        let real_txn_id = txn.real_txn_id;
        let id = book.add_virtual_txn(txn);
        if !book.reconciliation_check(real_txn_id)? {
            warn!(real_txn = %real_txn_id, "allocation left real transaction unreconciled");
        }
        Ok(id)
    }

    /// Explicit setter for an otherwise frozen transaction value.
    /// Reports the allocation drift the change introduces.
    pub fn set_real_txn_value(
        book: &mut Book,
        real_txn_id: Uuid,
        value: Decimal,
    ) -> Result<(), EngineError> {
        let txn = book.real_txn_mut(real_txn_id).ok_or(EngineError::NotFound {
            kind: "real transaction",
            id: real_txn_id,
        })?;
        txn.value = value;
        book.touch();
        if !book.reconciliation_check(real_txn_id)? {
            warn!(real_txn = %real_txn_id, "value change left real transaction unreconciled");
        }
        Ok(())
    }

    /// Sets money aside from a real account against a budget period.
    pub fn allocate(
        book: &mut Book,
        budget_id: Uuid,
        period_id: Uuid,
        real_account_id: Uuid,
        amount: Decimal,
    ) -> Result<Uuid, EngineError> {
        let period = book.period(period_id).ok_or(EngineError::NotFound {
            kind: "budget period",
            id: period_id,
        })?;
        if period.budget_id != budget_id {
            return Err(EngineError::OwnershipViolation {
                kind: "budget period",
                id: period_id,
                parent_kind: "budget",
                parent_id: budget_id,
            });
        }
        let account = book
            .real_account(real_account_id)
            .ok_or(EngineError::NotFound {
                kind: "real account",
                id: real_account_id,
            })?;
        let budget = book.budget(budget_id).ok_or(EngineError::NotFound {
            kind: "budget",
            id: budget_id,
        })?;
        if account.owner != budget.owner {
            return Err(EngineError::OwnershipViolation {
                kind: "real account",
                id: real_account_id,
                parent_kind: "budget",
                parent_id: budget_id,
            });
        }
        Ok(book.add_earmark(Earmark::new(period_id, real_account_id, amount)))
    }

    /// Moves an earmark to another period of the same budget. Earmarks
    /// never change accounts or budgets.
    pub fn move_earmark(
        book: &mut Book,
        earmark_id: Uuid,
        to_period_id: Uuid,
    ) -> Result<(), EngineError> {
        let earmark = book.earmark(earmark_id).ok_or(EngineError::NotFound {
            kind: "earmark",
            id: earmark_id,
        })?;
        let from = book
            .period(earmark.budget_period_id)
            .ok_or(EngineError::NotFound {
                kind: "budget period",
                id: earmark.budget_period_id,
            })?;
        let to = book.period(to_period_id).ok_or(EngineError::NotFound {
            kind: "budget period",
            id: to_period_id,
        })?;
        if from.budget_id != to.budget_id {
            return Err(EngineError::OwnershipViolation {
                kind: "earmark",
                id: earmark_id,
                parent_kind: "budget",
                parent_id: from.budget_id,
            });
        }
        if let Some(earmark) = book.earmark_mut(earmark_id) {
            earmark.budget_period_id = to_period_id;
        }
        book.touch();
        Ok(())
    }

    /// Releases an earmark, removing it from the book.
    pub fn release_earmark(book: &mut Book, earmark_id: Uuid) -> Result<Earmark, EngineError> {
        book.remove_earmark(earmark_id).ok_or(EngineError::NotFound {
            kind: "earmark",
            id: earmark_id,
        })
    }
}
