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

//! Inventory items and the rule-enforcing inventory store.
//!
//! [`InventoryStore`] specializes [`KeyedStore`] with the quantity rules:
//! quantities are never negative, and stock adjustments through
//! [`InventoryStore::increase_stock`] are best-effort rather than failing the
//! caller.

use crate::StoreError;
use crate::base::ItemId;
use crate::store::KeyedStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An item tracked by the inventory, either electronic or grocery.
///
/// Both variants share an identity, a name, and a non-negative quantity.
/// The electronic variant adds an immutable brand and warranty period; the
/// grocery variant adds an immutable expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryItem {
    Electronic {
        id: ItemId,
        name: String,
        quantity: u32,
        brand: String,
        warranty_months: u8,
    },
    Grocery {
        id: ItemId,
        name: String,
        quantity: u32,
        expiry: NaiveDate,
    },
}

impl InventoryItem {
    pub fn id(&self) -> ItemId {
        match self {
            Self::Electronic { id, .. } => *id,
            Self::Grocery { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Electronic { name, .. } => name,
            Self::Grocery { name, .. } => name,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            Self::Electronic { quantity, .. } => *quantity,
            Self::Grocery { quantity, .. } => *quantity,
        }
    }

    /// Quantity is only mutated through [`InventoryStore::update_quantity`],
    /// which has already validated the new value.
    fn set_quantity(&mut self, new_quantity: u32) {
        match self {
            Self::Electronic { quantity, .. } => *quantity = new_quantity,
            Self::Grocery { quantity, .. } => *quantity = new_quantity,
        }
    }
}

/// Outcome of a best-effort stock adjustment.
///
/// [`InventoryStore::increase_stock`] never fails its caller: failures from
/// either the read or the update step are captured here as a diagnostic
/// instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockAdjustment {
    /// The adjustment was applied; `quantity` is the new stock level.
    Applied { quantity: u32 },
    /// The adjustment was skipped; `reason` carries the captured failure.
    Skipped { reason: StoreError },
}

impl StockAdjustment {
    /// Human-readable diagnostic for reporting layers.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Applied { quantity } => format!("stock updated to {quantity}"),
            Self::Skipped { reason } => format!("stock update skipped: {reason}"),
        }
    }
}

/// Inventory repository enforcing the quantity rules on top of a
/// [`KeyedStore`].
///
/// Electronic and grocery inventories are tracked by independent store
/// instances; the store itself is variant-agnostic.
#[derive(Debug)]
pub struct InventoryStore {
    items: KeyedStore<ItemId, InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            items: KeyedStore::new(|item: &InventoryItem| item.id()),
        }
    }

    /// Inserts a new item.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if an item with the same ID
    /// already exists.
    pub fn add(&mut self, item: InventoryItem) -> Result<(), StoreError> {
        self.items.add(item)
    }

    /// Returns the item stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID is absent.
    pub fn get(&self, id: &ItemId) -> Result<&InventoryItem, StoreError> {
        self.items.get(id)
    }

    /// Removes the item stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID is absent.
    pub fn remove(&mut self, id: &ItemId) -> Result<(), StoreError> {
        self.items.remove(id)
    }

    /// Cloned snapshot of all items, in no particular order.
    pub fn get_all(&self) -> Vec<InventoryItem> {
        self.items.get_all()
    }

    /// First item matching `predicate`, or `None`.
    pub fn find_first(&self, predicate: impl Fn(&InventoryItem) -> bool) -> Option<&InventoryItem> {
        self.items.find_first(predicate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Range check shared by the quantity paths: negative values and values
    /// beyond what an item can store both count as invalid quantities.
    fn normalize_quantity(quantity: i64) -> Result<u32, StoreError> {
        u32::try_from(quantity).map_err(|_| StoreError::InvalidQuantity)
    }

    /// Sets the quantity of the item stored under `id`.
    ///
    /// The range of `quantity` is validated before the item's existence, so
    /// a negative request against an unknown ID reports
    /// [`StoreError::InvalidQuantity`]. This ordering is kept for
    /// compatibility with the observed behavior; see the note in the
    /// inventory integration tests.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidQuantity`] if `quantity` is negative or does
    ///   not fit an item's stock level.
    /// - [`StoreError::NotFound`] if no item exists under `id`.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) -> Result<(), StoreError> {
        let quantity = Self::normalize_quantity(quantity)?;
        let item = self.items.get_mut(id)?;
        item.set_quantity(quantity);
        Ok(())
    }

    /// Best-effort stock adjustment: reads the current quantity, adds
    /// `delta`, and delegates to [`InventoryStore::update_quantity`].
    ///
    /// Failures from either step are absorbed into
    /// [`StockAdjustment::Skipped`] instead of propagating. This is a
    /// deliberate contract: stock increase is advertised as a convenience
    /// with local reporting, not a hard failure for the caller's caller.
    /// An adjustment that overflows the arithmetic is just another
    /// unstorable quantity and is skipped like one.
    pub fn increase_stock(&mut self, id: &ItemId, delta: i64) -> StockAdjustment {
        let current = match self.items.get(id) {
            Ok(item) => i64::from(item.quantity()),
            Err(reason) => return StockAdjustment::Skipped { reason },
        };

        let requested = match current.checked_add(delta) {
            Some(value) => value,
            None => {
                return StockAdjustment::Skipped {
                    reason: StoreError::InvalidQuantity,
                };
            }
        };
        let quantity = match Self::normalize_quantity(requested) {
            Ok(quantity) => quantity,
            Err(reason) => return StockAdjustment::Skipped { reason },
        };

        match self.update_quantity(id, requested) {
            Ok(()) => StockAdjustment::Applied { quantity },
            Err(reason) => StockAdjustment::Skipped { reason },
        }
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
