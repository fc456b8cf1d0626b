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

//! Patient and prescription reference records.
//!
//! Both are immutable reference data: constructed once at seed time and only
//! ever stored or indexed, never updated in place. Prescriptions carry a
//! foreign key to their patient, which is what
//! [`GroupingIndex`](crate::GroupingIndex) groups on.

use crate::base::{PatientId, PrescriptionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u8,
    pub gender: String,
}

/// A prescription issued to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    /// Foreign key to the owning [`Patient`].
    pub patient_id: PatientId,
    pub medication: String,
    pub issued_on: NaiveDate,
}
