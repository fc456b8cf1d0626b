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

//! Account ledgers and overdraft policy.
//!
//! Two variants share the capability of applying a transaction to a balance:
//!
//! - [`Account`]: base policy, unconditionally subtracts the amount (the
//!   balance may go negative).
//! - [`CheckedAccount`]: overdraft-checked policy, refuses any transaction
//!   whose amount exceeds the current balance.
//!
//! A refusal is a normal, recoverable business outcome, so it is reported as
//! [`ApplyOutcome::Refused`] rather than raised as an error.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use domain_store_rs::{Account, ApplyOutcome, ApplyTransaction, CheckedAccount, Transaction, TransactionId};
//! use rust_decimal_macros::dec;
//!
//! let mut account = CheckedAccount::new("ACC-001".into(), dec!(100.00));
//! let tx = Transaction::new(TransactionId(1), Utc::now(), dec!(250.00), "bank-transfer");
//!
//! assert_eq!(account.apply(&tx), ApplyOutcome::Refused { balance: dec!(100.00) });
//! assert_eq!(account.balance(), dec!(100.00));
//! ```

use crate::base::AccountNumber;
use crate::transaction::Transaction;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Result of applying a transaction to a ledger balance.
///
/// Both variants carry the balance after the call so the caller can observe
/// the outcome without a second read. `Refused` means the overdraft policy
/// declined to mutate the balance; it is distinguishable from a hard error
/// because it is an expected outcome, not an exceptional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The amount was subtracted; `balance` is the new balance.
    Applied { balance: Decimal },
    /// The policy refused the transaction; `balance` is unchanged.
    Refused { balance: Decimal },
}

impl ApplyOutcome {
    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused { .. })
    }

    /// Balance after the call, whether or not it was mutated.
    pub fn balance(&self) -> Decimal {
        match self {
            Self::Applied { balance } | Self::Refused { balance } => *balance,
        }
    }
}

/// Capability of applying a transaction to a balance.
///
/// This is a closed interface with exactly two implementers, [`Account`] and
/// [`CheckedAccount`]; callers pick the policy explicitly. `apply` is the
/// sole mutator of the balance.
pub trait ApplyTransaction {
    fn apply(&mut self, transaction: &Transaction) -> ApplyOutcome;

    fn balance(&self) -> Decimal;
}

/// Ledger account under the base policy.
///
/// The transaction amount is always subtracted, so the balance may go
/// negative. Wrap in [`CheckedAccount`] for overdraft protection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    balance: Decimal,
}

impl Account {
    const DECIMAL_PRECISION: u32 = 4;

    pub fn new(number: AccountNumber, opening_balance: Decimal) -> Self {
        Self {
            number,
            balance: opening_balance,
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }
}

impl ApplyTransaction for Account {
    fn apply(&mut self, transaction: &Transaction) -> ApplyOutcome {
        self.balance -= transaction.amount();
        ApplyOutcome::Applied {
            balance: self.balance,
        }
    }

    fn balance(&self) -> Decimal {
        self.balance
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Account", 2)?;
        state.serialize_field("number", &self.number)?;
        state.serialize_field("balance", &self.balance.round_dp(Account::DECIMAL_PRECISION))?;
        state.end()
    }
}

/// Ledger account under the overdraft-checked policy.
///
/// Identical to [`Account`] except that a transaction whose amount exceeds
/// the current balance is refused with no mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedAccount {
    inner: Account,
}

impl CheckedAccount {
    pub fn new(number: AccountNumber, opening_balance: Decimal) -> Self {
        Self {
            inner: Account::new(number, opening_balance),
        }
    }

    pub fn number(&self) -> &AccountNumber {
        self.inner.number()
    }
}

impl ApplyTransaction for CheckedAccount {
    fn apply(&mut self, transaction: &Transaction) -> ApplyOutcome {
        // Strictly greater: an amount equal to the balance drains it to zero
        // and is applied.
        if transaction.amount() > self.inner.balance {
            return ApplyOutcome::Refused {
                balance: self.inner.balance,
            };
        }
        self.inner.apply(transaction)
    }

    fn balance(&self) -> Decimal {
        self.inner.balance
    }
}

impl Serialize for CheckedAccount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}
