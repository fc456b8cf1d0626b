// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property-based tests for the store, ledger, and grouping components.
//!
//! These tests verify invariants that should hold for any input the
//! generators can produce.

use chrono::Utc;
use domain_store_rs::{
    Account, ApplyTransaction, CheckedAccount, GroupingIndex, KeyedStore, Patient, PatientId,
    StoreError, Transaction, TransactionId,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Generate a positive amount (0.0001 to 1000.0000 with 4 decimal places).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000i64).prop_map(|cents| Decimal::new(cents, 4))
}

fn make_patient(id: u32) -> Patient {
    Patient {
        id: PatientId(id),
        name: format!("patient-{id}"),
        age: (id % 90) as u8,
        gender: "other".to_owned(),
    }
}

fn make_transaction(tx_id: u32, amount: Decimal) -> Transaction {
    Transaction::new(TransactionId(tx_id), Utc::now(), amount, "generated")
}

// =============================================================================
// KeyedStore Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Adding values with distinct keys makes get_all return exactly those
    /// values, compared as sets since the store is unordered.
    #[test]
    fn get_all_matches_added_keys(keys in prop::collection::hash_set(0u32..10_000, 0..50)) {
        let mut store = KeyedStore::new(|p: &Patient| p.id);
        for &id in &keys {
            store.add(make_patient(id)).unwrap();
        }

        let stored: HashSet<u32> = store.get_all().iter().map(|p| p.id.0).collect();
        let expected: HashSet<u32> = keys.iter().copied().collect();
        prop_assert_eq!(stored, expected);
    }

    /// A duplicate add always fails and never changes the stored value or
    /// the entry count.
    #[test]
    fn duplicate_add_never_mutates(ids in prop::collection::hash_set(0u32..1_000, 1..20)) {
        let mut store = KeyedStore::new(|p: &Patient| p.id);
        for &id in &ids {
            store.add(make_patient(id)).unwrap();
        }
        let before = store.len();

        for &id in &ids {
            prop_assert_eq!(store.add(make_patient(id)), Err(StoreError::DuplicateKey));
        }
        prop_assert_eq!(store.len(), before);
    }
}

// =============================================================================
// Ledger Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Under the overdraft-checked policy the balance never goes negative,
    /// whatever sequence of positive amounts is applied.
    #[test]
    fn checked_balance_never_negative(
        opening in 0i64..=10_000_000i64,
        amounts in prop::collection::vec(arb_amount(), 0..30),
    ) {
        let opening = Decimal::new(opening, 4);
        let mut account = CheckedAccount::new("GEN".into(), opening);

        for (i, amount) in amounts.iter().enumerate() {
            let _ = account.apply(&make_transaction(i as u32, *amount));
            prop_assert!(account.balance() >= Decimal::ZERO);
        }
    }

    /// Under the base policy the final balance is exactly the opening
    /// balance minus the sum of all applied amounts.
    #[test]
    fn base_balance_is_opening_minus_sum(
        opening in 0i64..=10_000_000i64,
        amounts in prop::collection::vec(arb_amount(), 0..30),
    ) {
        let opening = Decimal::new(opening, 4);
        let mut account = Account::new("GEN".into(), opening);

        for (i, amount) in amounts.iter().enumerate() {
            account.apply(&make_transaction(i as u32, *amount));
        }

        let total: Decimal = amounts.iter().sum();
        prop_assert_eq!(account.balance(), opening - total);
    }

    /// A refused transaction leaves the checked balance exactly where the
    /// same prefix of applied transactions left it.
    #[test]
    fn refusal_never_mutates_balance(
        opening in 0i64..=1_000_000i64,
        amount in arb_amount(),
    ) {
        let opening = Decimal::new(opening, 4);
        let mut account = CheckedAccount::new("GEN".into(), opening);

        let outcome = account.apply(&make_transaction(0, amount));
        if outcome.is_refused() {
            prop_assert_eq!(account.balance(), opening);
        } else {
            prop_assert_eq!(account.balance(), opening - amount);
        }
    }
}

// =============================================================================
// GroupingIndex Invariant Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every source record lands in exactly one group: the group sizes sum
    /// to the source length.
    #[test]
    fn grouping_conserves_records(groups in prop::collection::vec(0u32..10, 0..100)) {
        let mut index = GroupingIndex::new();
        index.build(&groups, |g| *g);

        let total: usize = (0u32..10).map(|key| index.lookup(&key).len()).sum();
        prop_assert_eq!(total, groups.len());
    }

    /// Rebuilding from the same source yields identical lookups for every
    /// key, including unseen ones.
    #[test]
    fn rebuild_is_idempotent(groups in prop::collection::vec(0u32..10, 0..100)) {
        let mut index = GroupingIndex::new();
        index.build(&groups, |g| *g);
        let first: Vec<Vec<u32>> = (0u32..12).map(|key| index.lookup(&key).to_vec()).collect();

        index.build(&groups, |g| *g);
        let second: Vec<Vec<u32>> = (0u32..12).map(|key| index.lookup(&key).to_vec()).collect();

        prop_assert_eq!(first, second);
    }
}
