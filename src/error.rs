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

//! Error types for store operations.
//!
//! An overdraft refusal is deliberately not part of this taxonomy: it is an
//! expected business outcome reported through
//! [`ApplyOutcome`](crate::ApplyOutcome), not a failure.

use thiserror::Error;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insertion of a key that already exists; the store is unchanged.
    #[error("an item with this key already exists")]
    DuplicateKey,

    /// Lookup, removal, or update targeting an absent key.
    #[error("no item found for this key")]
    NotFound,

    /// Quantity update with a negative value.
    #[error("invalid quantity (must not be negative)")]
    InvalidQuantity,
}
