// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands that change a single station.

use crate::command::Command;
use crate::types::{RunDuration, StationIndex, StationName, StationState};

/// Command targeting one station.
///
/// Indices and names are pre-validated types, so building a command can
/// not fail.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::command::{Command, StationCommand};
/// use opensprinkler_lib::types::{StationIndex, StationName};
///
/// let rename = StationCommand::Rename {
///     index: StationIndex::new(3, 8).unwrap(),
///     name: StationName::new("Back Lawn", 32).unwrap(),
/// };
/// assert_eq!(rename.path(), "/cs");
/// assert_eq!(rename.params(), vec![("s3".to_string(), "Back Lawn".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationCommand {
    /// Open or close a station.
    Switch {
        /// The station to switch.
        index: StationIndex,
        /// The desired state.
        state: StationState,
        /// Run time, only sent when opening the station.
        duration: RunDuration,
    },
    /// Change the display name of a station.
    Rename {
        /// The station to rename.
        index: StationIndex,
        /// The new name.
        name: StationName,
    },
}

impl StationCommand {
    /// Creates a command to open a station for `duration`.
    #[must_use]
    pub const fn on(index: StationIndex, duration: RunDuration) -> Self {
        Self::Switch {
            index,
            state: StationState::On,
            duration,
        }
    }

    /// Creates a command to close a station.
    #[must_use]
    pub const fn off(index: StationIndex) -> Self {
        Self::Switch {
            index,
            state: StationState::Off,
            duration: RunDuration::DEFAULT,
        }
    }

    /// Returns the targeted station.
    #[must_use]
    pub const fn index(&self) -> StationIndex {
        match self {
            Self::Switch { index, .. } | Self::Rename { index, .. } => *index,
        }
    }
}

impl Command for StationCommand {
    fn path(&self) -> &'static str {
        match self {
            Self::Switch { .. } => "/cm",
            Self::Rename { .. } => "/cs",
        }
    }

    fn params(&self) -> Vec<(String, String)> {
        match self {
            Self::Switch {
                index,
                state,
                duration,
            } => {
                let mut params = vec![
                    ("sid".to_string(), index.to_string()),
                    ("en".to_string(), state.as_num().to_string()),
                ];
                if state.is_on() {
                    params.push(("t".to_string(), duration.seconds().to_string()));
                }
                params
            }
            Self::Rename { index, name } => {
                vec![(format!("s{index}"), name.as_str().to_string())]
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Switch { .. } => "switch station",
            Self::Rename { .. } => "rename station",
        }
    }
}
