use budget_engine::{
    config::PeriodConfig,
    ledger::{
        Book, Budget, Category, OwnerId, RealAccount, RealTransaction, VirtualAccount,
        VirtualTransaction,
    },
    period::PeriodKind,
    policy::EndPolicyKind,
    services::{AllocationService, PeriodService},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

struct Fixture {
    book: Book,
    owner: OwnerId,
    budget_id: Uuid,
    category_id: Uuid,
    real_account_id: Uuid,
    virtual_account_id: Uuid,
}

fn fixture_with_policy(policy: EndPolicyKind) -> Fixture {
    let owner = OwnerId::new();
    let mut book = Book::new(owner, "Household");
    let budget_id = book.add_budget(Budget::new(
        owner,
        "Groceries",
        dec!(400.00),
        PeriodKind::Month,
        policy,
    ));
    let category_id = book.add_category(Category::new(owner, "Food", budget_id));
    let real_account_id = book.add_real_account(RealAccount::new(owner, "Chequing"));
    let virtual_account_id = book.add_virtual_account(VirtualAccount::new(
        owner,
        "Groceries",
        budget_id,
        real_account_id,
    ));
    Fixture {
        book,
        owner,
        budget_id,
        category_id,
        real_account_id,
        virtual_account_id,
    }
}

/// Opens a period in January, earmarks `balance` on it, then rolls into
/// February and returns the successor's carried total.
fn roll_with_balance(policy: EndPolicyKind, balance: Decimal) -> Decimal {
    let mut fixture = fixture_with_policy(policy);
    let config = PeriodConfig::default();
    let january = PeriodService::current_period(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 1, 10),
        config,
    )
    .unwrap();
    AllocationService::allocate(
        &mut fixture.book,
        fixture.budget_id,
        january,
        fixture.real_account_id,
        balance,
    )
    .unwrap();

    let february = PeriodService::current_period(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 2, 5),
        config,
    )
    .unwrap();
    fixture
        .book
        .earmarks_of(february)
        .map(|earmark| earmark.amount)
        .sum()
}

#[test]
fn carry_over_all_transfers_surplus_and_shortfall() {
    assert_eq!(
        roll_with_balance(EndPolicyKind::CarryOverAll, dec!(15.00)),
        dec!(15.00)
    );
    assert_eq!(
        roll_with_balance(EndPolicyKind::CarryOverAll, dec!(-15.00)),
        dec!(-15.00)
    );
}

#[test]
fn surplus_carry_negative_zeroes_shortfalls() {
    assert_eq!(
        roll_with_balance(EndPolicyKind::SurplusCarryNegative, dec!(15.00)),
        dec!(15.00)
    );
    assert_eq!(
        roll_with_balance(EndPolicyKind::SurplusCarryNegative, dec!(-15.00)),
        Decimal::ZERO
    );
}

#[test]
fn carried_earmarks_stay_on_their_accounts() {
    let mut fixture = fixture_with_policy(EndPolicyKind::CarryOverAll);
    let second_account = fixture
        .book
        .add_real_account(RealAccount::new(fixture.owner, "Savings"));
    let config = PeriodConfig::default();
    let january = PeriodService::current_period(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 1, 10),
        config,
    )
    .unwrap();
    AllocationService::allocate(
        &mut fixture.book,
        fixture.budget_id,
        january,
        fixture.real_account_id,
        dec!(30.00),
    )
    .unwrap();
    AllocationService::allocate(
        &mut fixture.book,
        fixture.budget_id,
        january,
        second_account,
        dec!(-5.00),
    )
    .unwrap();

    let february = PeriodService::current_period(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 2, 5),
        config,
    )
    .unwrap();
    let carried: Vec<_> = fixture.book.earmarks_of(february).collect();
    assert_eq!(carried.len(), 2);
    for earmark in carried {
        if earmark.real_account_id == fixture.real_account_id {
            assert_eq!(earmark.amount, dec!(30.00));
        } else {
            assert_eq!(earmark.real_account_id, second_account);
            assert_eq!(earmark.amount, dec!(-5.00));
        }
    }
}

#[test]
fn rollover_is_idempotent_within_a_period() {
    let mut fixture = fixture_with_policy(EndPolicyKind::CarryOverAll);
    let config = PeriodConfig::default();
    let first = PeriodService::current_period(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 3, 3),
        config,
    )
    .unwrap();
    let second = PeriodService::current_period(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 3, 3),
        config,
    )
    .unwrap();
    assert_eq!(first, second);
    assert_eq!(fixture.book.periods_of(fixture.budget_id).count(), 1);
    assert_eq!(
        fixture
            .book
            .periods_of(fixture.budget_id)
            .filter(|period| !period.closed)
            .count(),
        1
    );
}

#[test]
fn period_history_is_append_only() {
    let mut fixture = fixture_with_policy(EndPolicyKind::CarryOverAll);
    let config = PeriodConfig::default();
    for (month, day) in [(1, 10), (2, 5), (3, 1), (4, 28)] {
        PeriodService::current_period(
            &mut fixture.book,
            fixture.budget_id,
            date(2024, month, day),
            config,
        )
        .unwrap();
    }
    let history: Vec<_> = fixture.book.periods_of(fixture.budget_id).collect();
    assert_eq!(history.len(), 4);
    assert_eq!(history.iter().filter(|period| period.closed).count(), 3);
}

#[test]
fn full_scenario_balances_and_reconciliation() {
    let mut fixture = fixture_with_policy(EndPolicyKind::CarryOverAll);
    let credit = AllocationService::record_real_txn(
        &mut fixture.book,
        RealTransaction::new(
            fixture.owner,
            fixture.real_account_id,
            fixture.category_id,
            dec!(110.00),
        ),
    )
    .unwrap();
    AllocationService::record_real_txn(
        &mut fixture.book,
        RealTransaction::new(
            fixture.owner,
            fixture.real_account_id,
            fixture.category_id,
            dec!(0.00),
        ),
    )
    .unwrap();
    AllocationService::record_real_txn(
        &mut fixture.book,
        RealTransaction::new(
            fixture.owner,
            fixture.real_account_id,
            fixture.category_id,
            dec!(-10.00),
        ),
    )
    .unwrap();

    for amount in [dec!(90.00), dec!(20.00)] {
        AllocationService::record_virtual_txn(
            &mut fixture.book,
            VirtualTransaction::new(fixture.owner, fixture.virtual_account_id, credit, amount),
        )
        .unwrap();
    }

    assert_eq!(
        fixture
            .book
            .virtual_account_balance(fixture.virtual_account_id)
            .unwrap(),
        dec!(110.00)
    );
    assert_eq!(
        fixture
            .book
            .real_account_balance(fixture.real_account_id)
            .unwrap(),
        dec!(110.00)
    );
    assert!(fixture.book.reconciliation_check(credit).unwrap());

    // The untouched -10.00 debit is the only reconciliation gap.
    let issues = fixture.book.reconciliation_report();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].expected, dec!(-10.00));
}

#[test]
fn current_virtual_account_follows_the_budget() {
    let mut fixture = fixture_with_policy(EndPolicyKind::CarryOverAll);
    let resolved = PeriodService::current_virtual_account(
        &mut fixture.book,
        fixture.budget_id,
        date(2024, 5, 20),
        PeriodConfig::default(),
    )
    .unwrap();
    assert_eq!(resolved, fixture.virtual_account_id);
}
