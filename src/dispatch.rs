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

//! Polymorphic transaction processors.
//!
//! [`TransactionProcessor`] is a closed capability interface with three
//! stateless implementers. The caller selects the variant; the processors
//! themselves carry no branching logic and never inspect the transaction's
//! category to pick a strategy. Processing and balance application are
//! parallel concerns: dispatching a transaction here does not touch any
//! ledger.

use crate::transaction::Transaction;
use tracing::debug;

/// Capability of handling a transaction as a pure side effect.
pub trait TransactionProcessor {
    fn process(&self, transaction: &Transaction);
}

/// Processes transactions over the bank-transfer rail.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransfer;

impl TransactionProcessor for BankTransfer {
    fn process(&self, transaction: &Transaction) {
        debug!(
            id = %transaction.id(),
            amount = %transaction.amount(),
            category = transaction.category(),
            "processing bank transfer"
        );
    }
}

/// Processes transactions over the mobile-money rail.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMoney;

impl TransactionProcessor for MobileMoney {
    fn process(&self, transaction: &Transaction) {
        debug!(
            id = %transaction.id(),
            amount = %transaction.amount(),
            category = transaction.category(),
            "processing mobile money payment"
        );
    }
}

/// Processes transactions over the crypto-wallet rail.
#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoWallet;

impl TransactionProcessor for CryptoWallet {
    fn process(&self, transaction: &Transaction) {
        debug!(
            id = %transaction.id(),
            amount = %transaction.amount(),
            category = transaction.category(),
            "processing crypto wallet transfer"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TransactionId;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn tx() -> Transaction {
        Transaction::new(TransactionId(1), Utc::now(), dec!(10.00), "test")
    }

    #[test]
    fn processors_dispatch_through_trait_objects() {
        let processors: Vec<Box<dyn TransactionProcessor>> = vec![
            Box::new(BankTransfer),
            Box::new(MobileMoney),
            Box::new(CryptoWallet),
        ];

        let transaction = tx();
        for processor in &processors {
            processor.process(&transaction);
        }
    }
}
