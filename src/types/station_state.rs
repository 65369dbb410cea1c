// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off state of an irrigation station.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Represents whether a station is currently watering.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::types::StationState;
///
/// assert_eq!(StationState::On.as_str(), "ON");
/// assert_eq!(StationState::from(false), StationState::Off);
/// assert!(StationState::On.is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StationState {
    /// The station valve is closed.
    #[default]
    Off,
    /// The station valve is open.
    On,
}

impl StationState {
    /// Returns the display string, `"ON"` or `"OFF"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns the numeric flag used by the controller (`en` / `sn`).
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Returns `true` if the station is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for StationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StationState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValidationError::InvalidState(s.to_string())),
        }
    }
}

impl From<bool> for StationState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<StationState> for bool {
    fn from(value: StationState) -> Self {
        value.is_on()
    }
}
