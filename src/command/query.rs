// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only station queries.

use crate::command::Command;

/// Queries that read station data without changing it.
///
/// A full refresh issues both queries: names first, then states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCommand {
    /// Station names (`/jn`).
    StationNames,
    /// Station count and on/off bits (`/js`).
    StationStatus,
}

impl Command for QueryCommand {
    fn path(&self) -> &'static str {
        match self {
            Self::StationNames => "/jn",
            Self::StationStatus => "/js",
        }
    }

    fn params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn label(&self) -> &'static str {
        match self {
            Self::StationNames => "station names",
            Self::StationStatus => "station status",
        }
    }
}
