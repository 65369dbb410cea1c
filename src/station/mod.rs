// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stations and the registry that keeps them in sync with the controller.

mod iter;
mod registry;

pub use iter::Stations;
pub use registry::StationRegistry;

use std::fmt;

use crate::types::StationState;

/// One controllable irrigation outlet, as of the last snapshot.
///
/// Stations are replaced wholesale on every refresh; use
/// [`index`](Self::index) as the correlation key across refreshes.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::station::Station;
/// use opensprinkler_lib::types::StationState;
///
/// let station = Station::new(0, "Front Lawn", StationState::On);
/// assert_eq!(station.to_string(), "Front Lawn:ON");
/// assert_eq!(station.as_tuple(), ("Front Lawn", 0, StationState::On));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    index: usize,
    name: String,
    state: StationState,
}

impl Station {
    /// Creates a station.
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>, state: StationState) -> Self {
        Self {
            index,
            name: name.into(),
            state,
        }
    }

    /// Returns the zero-based station index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the last known state.
    #[must_use]
    pub fn state(&self) -> StationState {
        self.state
    }

    /// Returns `(name, station_number, state)`.
    #[must_use]
    pub fn as_tuple(&self) -> (&str, usize, StationState) {
        (&self.name, self.index, self.state)
    }

    /// Returns `(index, name, state)`, the shape of a status list entry.
    #[must_use]
    pub fn to_status(&self) -> (usize, String, StationState) {
        (self.index, self.name.clone(), self.state)
    }

    pub(crate) fn set_state(&mut self, state: StationState) {
        self.state = state;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.state)
    }
}
