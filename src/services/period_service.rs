//! Lazy budget-period resolution and rollover.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    config::PeriodConfig,
    errors::EngineError,
    ledger::{Book, BudgetPeriod, Earmark},
    period::{PeriodController, PeriodLengthFactory},
    policy::EndPolicyKind,
};

/// Resolves a budget's current period on read, closing out expired
/// periods and opening successors as a side effect ("pull" rollover —
/// no timer is involved).
pub struct PeriodService;

impl PeriodService {
    /// Returns the id of the budget's active period for `today`.
    ///
    /// If no open period exists, or the open one has expired, the
    /// expired period is closed (idempotently), carry earmarks are
    /// materialized per the budget's end policy, and the period
    /// containing `today` becomes active. Repeat calls without an
    /// expiry return the same period and create nothing.
    ///
    /// The whole read-check-close-create sequence runs under this one
    /// `&mut Book` borrow, so concurrent callers cannot interleave it
    /// and race a duplicate successor into existence.
    pub fn current_period(
        book: &mut Book,
        budget_id: Uuid,
        today: NaiveDate,
        config: PeriodConfig,
    ) -> Result<Uuid, EngineError> {
        let budget = book.budget(budget_id).ok_or(EngineError::NotFound {
            kind: "budget",
            id: budget_id,
        })?;
        let policy = budget.end_policy;
        let controller = PeriodLengthFactory::new(config).make_controller(budget.period_length);

        let active = book.active_period(budget_id).map(|p| (p.id, p.end_date));
        match active {
            Some((id, end)) if end >= today => Ok(id),
            Some((id, _)) => {
                Self::process_budget_period(book, budget_id, Some(id), policy, &controller, today)
            }
            None => Self::process_budget_period(book, budget_id, None, policy, &controller, today),
        }
    }

    /// Resolves the virtual account to use for the budget in the
    /// current period, rolling the period first when needed.
    pub fn current_virtual_account(
        book: &mut Book,
        budget_id: Uuid,
        today: NaiveDate,
        config: PeriodConfig,
    ) -> Result<Uuid, EngineError> {
        let _period = Self::current_period(book, budget_id, today, config)?;
        book.virtual_accounts
            .iter()
            .find(|account| account.budget_id == budget_id)
            .map(|account| account.id)
            .ok_or(EngineError::NotFound {
                kind: "virtual account for budget",
                id: budget_id,
            })
    }

    /// Closing balance of a period: the sum of its earmarked amounts.
    pub fn closing_balance(
        book: &Book,
        budget_id: Uuid,
        period_id: Uuid,
    ) -> Result<Decimal, EngineError> {
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
        Ok(book.earmarks_of(period_id).map(|earmark| earmark.amount).sum())
    }

    /// Marks the period closed. Re-closing an already-closed period is
    /// a no-op, not an error.
    pub fn close_out(book: &mut Book, budget_id: Uuid, period_id: Uuid) -> Result<(), EngineError> {
        {
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
            if period.closed {
                return Ok(());
            }
        }
        if let Some(period) = book.period_mut(period_id) {
            period.closed = true;
        }
        book.touch();
        Ok(())
    }

    /// Closes the expired period (if any) and opens the period
    /// containing `today`.
    fn process_budget_period(
        book: &mut Book,
        budget_id: Uuid,
        expired: Option<Uuid>,
        policy: EndPolicyKind,
        controller: &PeriodController,
        today: NaiveDate,
    ) -> Result<Uuid, EngineError> {
        let successor = BudgetPeriod::new(
            budget_id,
            controller.start_of_period(today),
            controller.end_of_period(today),
        );
        let successor_id = successor.id;
        match expired {
            Some(old_id) => {
                let closing = Self::closing_balance(book, budget_id, old_id)?;
                book.add_period(successor);
                Self::apply_carry(book, policy, old_id, successor_id);
                Self::close_out(book, budget_id, old_id)?;
                info!(
                    budget = %budget_id,
                    closed = %old_id,
                    opened = %successor_id,
                    %closing,
                    "rolled budget period"
                );
            }
            None => {
                book.add_period(successor);
                debug!(budget = %budget_id, opened = %successor_id, "opened first budget period");
            }
        }
        Ok(successor_id)
    }

    /// Nets the old period's earmarks per real account and materializes
    /// the policy's carry on the successor. An earmark never changes
    /// accounts, so the policy applies to each account's net.
    fn apply_carry(book: &mut Book, policy: EndPolicyKind, old_period_id: Uuid, new_period_id: Uuid) {
        let mut nets: BTreeMap<Uuid, Decimal> = BTreeMap::new();
        for earmark in book.earmarks_of(old_period_id) {
            *nets.entry(earmark.real_account_id).or_default() += earmark.amount;
        }
        for (account_id, net) in nets {
            let carried = policy.carry_amount(net);
            if !carried.is_zero() {
                book.add_earmark(Earmark::new(new_period_id, account_id, carried));
            }
        }
    }
}
