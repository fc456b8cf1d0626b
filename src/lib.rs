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

//! # Domain Store
//!
//! In-memory data management with domain-rule enforcement: a generic keyed
//! store underpinning an inventory tracker, account ledgers with overdraft
//! policies, a derived one-to-many grouping index, and polymorphic
//! transaction processors.
//!
//! ## Core Components
//!
//! - [`KeyedStore`]: Generic unique-key repository with an injected
//!   key-extraction function
//! - [`InventoryStore`]: Keyed store specialized with quantity rules
//! - [`GroupingIndex`]: Derived one-to-many index over a foreign key
//! - [`Account`] / [`CheckedAccount`]: Ledger balances under the base and
//!   overdraft-checked policies
//! - [`TransactionProcessor`]: Capability interface with three processing
//!   variants selected by the caller
//! - [`StoreError`]: Error taxonomy for store operations
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use domain_store_rs::{Account, ApplyTransaction, Transaction, TransactionId};
//! use rust_decimal_macros::dec;
//!
//! let mut account = Account::new("SB-2001".into(), dec!(1000.00));
//! let rent = Transaction::new(TransactionId(1), Utc::now(), dec!(350.00), "bank-transfer");
//!
//! let outcome = account.apply(&rent);
//! assert_eq!(outcome.balance(), dec!(650.00));
//! ```
//!
//! ## Concurrency
//!
//! The crate is entirely single-threaded and synchronous: every store and
//! ledger is exclusively owned and mutated by one logical caller within a
//! single run. Nothing here blocks, yields, or retries.

pub mod base;
mod dispatch;
pub mod error;
mod grouping;
mod inventory;
mod ledger;
mod patient;
mod store;
mod transaction;

pub use base::{AccountNumber, ItemId, PatientId, PrescriptionId, TransactionId};
pub use dispatch::{BankTransfer, CryptoWallet, MobileMoney, TransactionProcessor};
pub use error::StoreError;
pub use grouping::GroupingIndex;
pub use inventory::{InventoryItem, InventoryStore, StockAdjustment};
pub use ledger::{Account, ApplyOutcome, ApplyTransaction, CheckedAccount};
pub use patient::{Patient, Prescription};
pub use store::KeyedStore;
pub use transaction::Transaction;
