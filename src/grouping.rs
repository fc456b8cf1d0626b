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

//! Derived one-to-many index over a flat source collection.
//!
//! A [`GroupingIndex`] classifies records by a foreign-key field, e.g.
//! prescriptions grouped by patient ID. It is a pure derived view with no
//! authority over the source data: when the source changes, the index is
//! rebuilt from scratch rather than patched incrementally, so it can never
//! drift out of sync through partial updates.

use std::collections::HashMap;
use std::hash::Hash;

/// One-to-many index from a grouping key to the records carrying it.
#[derive(Debug, Clone)]
pub struct GroupingIndex<K, V> {
    groups: HashMap<K, Vec<V>>,
}

impl<K, V> GroupingIndex<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Rebuilds the index from `source`, discarding any previous content.
    ///
    /// The source is iterated exactly once; records sharing a key keep their
    /// relative order from the source (stable grouping). Rebuilding from the
    /// same source is deterministic and idempotent.
    pub fn build(&mut self, source: &[V], key_of: impl Fn(&V) -> K) {
        self.groups.clear();
        for record in source {
            self.groups
                .entry(key_of(record))
                .or_default()
                .push(record.clone());
        }
    }

    /// Returns the records grouped under `key`, in source order.
    ///
    /// An unseen key yields an empty slice. Absence is an answer here, not an
    /// error: a key with no records is a valid query result.
    pub fn lookup(&self, key: &K) -> &[V] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys observed during the last build.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the index holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K, V> Default for GroupingIndex<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
