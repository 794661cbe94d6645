//! Property-based tests for the ledger and split calculation
//!
//! Uses proptest to check that balances only change through applied splits
//! and that the split form never produces an inconsistent state.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;
use rust_decimal::Decimal;

use splitbill::ledger::{Ledger, Mode, SequentialIds, default_friends};
use splitbill::model::{FriendId, Payer, SplitBill};

// =============================================================================
// Strategy generators
// =============================================================================

/// Amount in cents, 0.00 ..= 10000.00
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0_i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// A bill and an expense that does not exceed it
fn bill_and_expense_strategy() -> impl Strategy<Value = (Decimal, Decimal)> {
    (1_i64..=1_000_000).prop_flat_map(|bill| {
        (Just(Decimal::new(bill, 2)), (0..=bill).prop_map(|e| Decimal::new(e, 2)))
    })
}

#[derive(Debug, Clone)]
enum Op {
    TogglePanel,
    Select(u64),
    Add(String),
    Split(Decimal),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::TogglePanel),
        // Seed ids plus a few that never exist
        prop::sample::select(vec![118836_u64, 933372, 499476, 1, 2, 42]).prop_map(Op::Select),
        "[a-zA-Z ]{0,8}".prop_map(Op::Add),
        (-10_000_i64..10_000).prop_map(|c| Op::Split(Decimal::new(c, 2))),
    ]
}

fn seeded_ledger() -> Ledger {
    Ledger::with_friends(default_friends(), SequentialIds::default()).unwrap()
}

// =============================================================================
// Split calculation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Friend expense plus user expense is always the bill
    #[test]
    fn shares_add_up_to_bill((bill, expense) in bill_and_expense_strategy()) {
        let mut split = SplitBill::new();
        split.set_bill(Some(bill)).unwrap();
        split.set_user_expense(Some(expense)).unwrap();
        prop_assert_eq!(split.friend_expense().unwrap() + expense, bill);
    }

    /// The delta is what the friend owes (user pays) or minus what the user owes
    #[test]
    fn delta_matches_payer((bill, expense) in bill_and_expense_strategy()) {
        let mut split = SplitBill::new();
        split.set_bill(Some(bill)).unwrap();
        split.set_user_expense(Some(expense)).unwrap();

        prop_assert_eq!(split.balance_delta().unwrap(), bill - expense);
        split.set_payer(Payer::Friend);
        prop_assert_eq!(split.balance_delta().unwrap(), -expense);
    }

    /// The expense can never end up above the bill
    #[test]
    fn expense_never_exceeds_bill(first in amount_strategy(), expense in amount_strategy(), second in amount_strategy()) {
        let mut split = SplitBill::new();
        let _ = split.set_bill(Some(first));
        let _ = split.set_user_expense(Some(expense));
        let _ = split.set_bill(Some(second));

        if let Some(expense) = split.user_expense() {
            prop_assert!(expense <= split.bill().unwrap_or_default());
        }
    }
}

// =============================================================================
// Ledger invariants under arbitrary operation sequences
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn ledger_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut ledger = seeded_ledger();
        let mut expected_total: Decimal = ledger.friends().iter().map(|f| f.balance).sum();

        for op in ops {
            let before = ledger.friends().len();
            match op {
                Op::TogglePanel => ledger.toggle_add_friend_panel(),
                Op::Select(raw) => {
                    let _ = ledger.select_friend_for_split(&FriendId::from(raw));
                }
                Op::Add(name) => {
                    if ledger.add_friend(&name, "https://i.pravatar.cc/48").is_ok() {
                        prop_assert_eq!(ledger.friends().len(), before + 1);
                        prop_assert_eq!(ledger.mode(), &Mode::Idle);
                    } else {
                        prop_assert_eq!(ledger.friends().len(), before);
                    }
                }
                Op::Split(delta) => {
                    if ledger.apply_split(delta).is_ok() {
                        expected_total += delta;
                        prop_assert_eq!(ledger.mode(), &Mode::Idle);
                    }
                }
            }

            // Ids stay unique
            let mut ids: Vec<_> = ledger.friends().iter().map(|f| f.id.clone()).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), ledger.friends().len());

            // A selection always points at an existing friend
            if let Some(id) = ledger.selected_friend_id() {
                prop_assert!(ledger.friend(id).is_some());
                prop_assert!(!ledger.is_panel_open());
            }

            // Balances only move through applied splits
            let total: Decimal = ledger.friends().iter().map(|f| f.balance).sum();
            prop_assert_eq!(total, expected_total);
        }

        // Seed friends keep their order at the front
        let names: Vec<_> = ledger.friends().iter().take(3).map(|f| f.name.as_str()).collect();
        prop_assert_eq!(names, vec!["Clark", "Sarah", "Anthony"]);
    }
}
