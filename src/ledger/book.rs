use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    account::{RealAccount, VirtualAccount},
    budget::{Budget, Category},
    period_record::{BudgetPeriod, Earmark},
    transaction::{RealTransaction, VirtualTransaction},
    OwnerId,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// In-memory aggregate of one owner's budgeting records.
///
/// Transaction and period collections are append-only: the book exposes
/// no removal path for them. Earmarks are the exception, removed only by
/// an explicit release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub owner: OwnerId,
    pub name: String,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub real_accounts: Vec<RealAccount>,
    #[serde(default)]
    pub virtual_accounts: Vec<VirtualAccount>,
    #[serde(default)]
    pub real_txns: Vec<RealTransaction>,
    #[serde(default)]
    pub virtual_txns: Vec<VirtualTransaction>,
    #[serde(default)]
    pub periods: Vec<BudgetPeriod>,
    #[serde(default)]
    pub earmarks: Vec<Earmark>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Book::schema_version_default")]
    pub schema_version: u8,
}

impl Book {
    pub fn new(owner: OwnerId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            budgets: Vec::new(),
            categories: Vec::new(),
            real_accounts: Vec::new(),
            virtual_accounts: Vec::new(),
            real_txns: Vec::new(),
            virtual_txns: Vec::new(),
            periods: Vec::new(),
            earmarks: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_budget(&mut self, budget: Budget) -> Uuid {
        let id = budget.id;
        self.budgets.push(budget);
        self.touch();
        id
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_real_account(&mut self, account: RealAccount) -> Uuid {
        let id = account.id;
        self.real_accounts.push(account);
        self.touch();
        id
    }

    pub fn add_virtual_account(&mut self, account: VirtualAccount) -> Uuid {
        let id = account.id;
        self.virtual_accounts.push(account);
        self.touch();
        id
    }

    pub fn add_real_txn(&mut self, txn: RealTransaction) -> Uuid {
        let id = txn.id;
        self.real_txns.push(txn);
        self.touch();
        id
    }

    pub fn add_virtual_txn(&mut self, txn: VirtualTransaction) -> Uuid {
        let id = txn.id;
        self.virtual_txns.push(txn);
        self.touch();
        id
    }

    pub fn add_period(&mut self, period: BudgetPeriod) -> Uuid {
        let id = period.id;
        self.periods.push(period);
        self.touch();
        id
    }

    pub fn add_earmark(&mut self, earmark: Earmark) -> Uuid {
        let id = earmark.id;
        self.earmarks.push(earmark);
        self.touch();
        id
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn real_account(&self, id: Uuid) -> Option<&RealAccount> {
        self.real_accounts.iter().find(|account| account.id == id)
    }

    pub fn virtual_account(&self, id: Uuid) -> Option<&VirtualAccount> {
        self.virtual_accounts.iter().find(|account| account.id == id)
    }

    pub fn real_txn(&self, id: Uuid) -> Option<&RealTransaction> {
        self.real_txns.iter().find(|txn| txn.id == id)
    }

    pub fn real_txn_mut(&mut self, id: Uuid) -> Option<&mut RealTransaction> {
        self.real_txns.iter_mut().find(|txn| txn.id == id)
    }

    pub fn period(&self, id: Uuid) -> Option<&BudgetPeriod> {
        self.periods.iter().find(|period| period.id == id)
    }

    pub fn period_mut(&mut self, id: Uuid) -> Option<&mut BudgetPeriod> {
        self.periods.iter_mut().find(|period| period.id == id)
    }

    pub fn earmark(&self, id: Uuid) -> Option<&Earmark> {
        self.earmarks.iter().find(|earmark| earmark.id == id)
    }

    pub fn earmark_mut(&mut self, id: Uuid) -> Option<&mut Earmark> {
        self.earmarks.iter_mut().find(|earmark| earmark.id == id)
    }

    /// Virtual accounts subdividing the given real account.
    pub fn virtual_accounts_of(&self, real_account_id: Uuid) -> impl Iterator<Item = &VirtualAccount> {
        self.virtual_accounts
            .iter()
            .filter(move |account| account.real_account_id == real_account_id)
    }

    /// Virtual transactions allocating the given real transaction.
    pub fn allocations_of(&self, real_txn_id: Uuid) -> impl Iterator<Item = &VirtualTransaction> {
        self.virtual_txns
            .iter()
            .filter(move |txn| txn.real_txn_id == real_txn_id)
    }

    /// Full period history of a budget, oldest first.
    pub fn periods_of(&self, budget_id: Uuid) -> impl Iterator<Item = &BudgetPeriod> {
        self.periods
            .iter()
            .filter(move |period| period.budget_id == budget_id)
    }

    /// The budget's open (not yet closed) period, if any.
    pub fn active_period(&self, budget_id: Uuid) -> Option<&BudgetPeriod> {
        self.periods_of(budget_id)
            .filter(|period| !period.closed)
            .max_by_key(|period| period.start_date)
    }

    pub fn earmarks_of(&self, budget_period_id: Uuid) -> impl Iterator<Item = &Earmark> {
        self.earmarks
            .iter()
            .filter(move |earmark| earmark.budget_period_id == budget_period_id)
    }

    pub fn budgets_owned_by(&self, owner: OwnerId) -> impl Iterator<Item = &Budget> {
        self.budgets.iter().filter(move |budget| budget.owner == owner)
    }

    pub fn real_accounts_owned_by(&self, owner: OwnerId) -> impl Iterator<Item = &RealAccount> {
        self.real_accounts
            .iter()
            .filter(move |account| account.owner == owner)
    }

    pub(crate) fn remove_earmark(&mut self, id: Uuid) -> Option<Earmark> {
        let index = self.earmarks.iter().position(|earmark| earmark.id == id)?;
        let removed = self.earmarks.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
