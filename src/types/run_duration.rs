// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual run duration for a station switched on by this client.

use std::fmt;
use std::time::Duration;

use crate::error::ValidationError;

/// How long a station waters after being switched on (1-64800 seconds).
///
/// The controller always needs a run time when a station is opened
/// manually; the station closes on its own once it elapses.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::types::RunDuration;
///
/// let duration = RunDuration::from_minutes(15).unwrap();
/// assert_eq!(duration.seconds(), 900);
///
/// assert!(RunDuration::new(0).is_err());
/// assert!(RunDuration::new(64_801).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunDuration(u32);

impl RunDuration {
    /// Minimum run duration (1 second).
    pub const MIN: u32 = 1;

    /// Maximum run duration accepted by the controller (18 hours).
    pub const MAX: u32 = 64_800;

    /// Run duration used when none is configured (10 minutes).
    pub const DEFAULT: Self = Self(600);

    /// Creates a new run duration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if value is outside [1, 64800].
    pub fn new(seconds: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&seconds) {
            return Err(ValidationError::OutOfRange {
                field: "run duration",
                min: u64::from(Self::MIN),
                max: u64::from(Self::MAX),
                actual: u64::from(seconds),
            });
        }
        Ok(Self(seconds))
    }

    /// Creates a run duration from minutes.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the resulting seconds value
    /// is outside [1, 64800].
    pub fn from_minutes(minutes: u32) -> Result<Self, ValidationError> {
        Self::new(minutes.saturating_mul(60))
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.0
    }
}

impl Default for RunDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Duration> for RunDuration {
    type Error = ValidationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        let seconds = u32::try_from(value.as_secs()).unwrap_or(u32::MAX);
        Self::new(seconds)
    }
}

impl From<RunDuration> for Duration {
    fn from(value: RunDuration) -> Self {
        Duration::from_secs(u64::from(value.0))
    }
}

impl fmt::Display for RunDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
