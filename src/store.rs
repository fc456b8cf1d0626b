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

//! Generic keyed store with identity-uniqueness enforcement.
//!
//! [`KeyedStore`] is the foundation for every repository in this crate: an
//! in-memory mapping from a unique key to a value, where the key is derived
//! from the value by an injected extraction function. Insertion of a
//! duplicate key is rejected rather than silently overwritten.

use crate::StoreError;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

/// In-memory store mapping unique keys to values.
///
/// The key of each value is computed by the extraction closure supplied at
/// construction, so callers cannot insert a value under a mismatched key.
/// The backing map is unordered; [`KeyedStore::get_all`] makes no ordering
/// guarantee.
///
/// # Example
///
/// ```
/// use domain_store_rs::{KeyedStore, PatientId, Patient};
///
/// let mut store = KeyedStore::new(|patient: &Patient| patient.id);
/// store
///     .add(Patient {
///         id: PatientId(1),
///         name: "Amina Yusuf".into(),
///         age: 34,
///         gender: "female".into(),
///     })
///     .unwrap();
/// assert_eq!(store.get(&PatientId(1)).unwrap().age, 34);
/// ```
pub struct KeyedStore<K, V> {
    entries: HashMap<K, V>,
    key_of: Box<dyn Fn(&V) -> K>,
}

impl<K, V> KeyedStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty store whose entries are keyed by `key_of`.
    pub fn new(key_of: impl Fn(&V) -> K + 'static) -> Self {
        Self {
            entries: HashMap::new(),
            key_of: Box::new(key_of),
        }
    }

    /// Inserts a new value under its extracted key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if a value with the same key is
    /// already present; the store is left unchanged.
    pub fn add(&mut self, item: V) -> Result<(), StoreError> {
        let key = (self.key_of)(&item);

        // Entry API gives a single check-and-insert so a failed add cannot
        // disturb the existing value.
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey),
            Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
        }
    }

    /// Returns an immutable view of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent. Callers probing
    /// for optional presence should use [`KeyedStore::find_first`] instead.
    pub fn get(&self, key: &K) -> Result<&V, StoreError> {
        self.entries.get(key).ok_or(StoreError::NotFound)
    }

    /// Removes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent; the store is
    /// left unchanged.
    pub fn remove(&mut self, key: &K) -> Result<(), StoreError> {
        match self.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    /// Returns a cloned snapshot of all stored values, in no particular
    /// order. Mutating the returned vector does not affect the store.
    pub fn get_all(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    /// Returns the first stored value matching `predicate`, or `None`.
    ///
    /// Absence is an answer here, not an error: unlike [`KeyedStore::get`],
    /// this method is for callers explicitly probing for optional presence.
    /// "First" is relative to the unordered iteration of the backing map.
    pub fn find_first(&self, predicate: impl Fn(&V) -> bool) -> Option<&V> {
        self.entries.values().find(|value| predicate(value))
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutable access for in-crate rule-enforcing updates only. External
    /// callers go through explicit update operations so invariants cannot be
    /// bypassed.
    pub(crate) fn get_mut(&mut self, key: &K) -> Result<&mut V, StoreError> {
        self.entries.get_mut(key).ok_or(StoreError::NotFound)
    }
}

impl<K, V> fmt::Debug for KeyedStore<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
