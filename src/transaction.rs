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

//! Transaction records.

use crate::base::TransactionId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary transaction, immutable once created.
///
/// Amounts use exact decimal semantics via [`Decimal`]; binary floating
/// point is never involved. The amount is signed: ledger policies subtract
/// it from a balance, so a negative amount credits the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    timestamp: DateTime<Utc>,
    amount: Decimal,
    category: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        timestamp: DateTime<Utc>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            amount,
            category: category.into(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Free-text category label, e.g. "bank-transfer".
    pub fn category(&self) -> &str {
        &self.category
    }
}
