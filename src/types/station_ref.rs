// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checked station index and station name.
//!
//! Both types can only be created after validation against the current
//! station snapshot, so a station command can never carry an index or a
//! name the controller would reject.

use std::fmt;

use crate::error::{Error, ValidationError};

/// A station index known to be inside `[0, count)` of a snapshot.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::types::StationIndex;
///
/// let idx = StationIndex::new(3, 8).unwrap();
/// assert_eq!(idx.value(), 3);
///
/// assert!(StationIndex::new(8, 8).is_err());
/// assert!(StationIndex::new(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationIndex(usize);

impl StationIndex {
    /// Validates `index` against a snapshot of `count` stations.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` if `index >= count`.
    pub fn new(index: usize, count: usize) -> Result<Self, Error> {
        if index >= count {
            return Err(Error::InvalidStationIndex { index, count });
        }
        Ok(Self(index))
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for StationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station name the controller will store unchanged.
///
/// Names must be non-blank and fit the controller's name buffer. Overlong
/// names are rejected instead of truncated.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::types::StationName;
///
/// let name = StationName::new("Back Lawn", 32).unwrap();
/// assert_eq!(name.as_str(), "Back Lawn");
///
/// assert!(StationName::new("   ", 32).is_err());
/// assert!(StationName::new("A name far too long for a tiny buffer", 16).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Name length assumed when the controller does not report one.
    pub const DEFAULT_MAX_LEN: usize = 32;

    /// Validates `name` against a buffer of `max_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for blank names and
    /// `ValidationError::NameTooLong` when the UTF-8 encoding exceeds
    /// `max_len` bytes.
    pub fn new(name: impl Into<String>, max_len: usize) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.len() > max_len {
            return Err(ValidationError::NameTooLong {
                max: max_len,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    /// Returns the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds() {
        for i in 0..8 {
            assert_eq!(StationIndex::new(i, 8).unwrap().value(), i);
        }
        assert!(matches!(
            StationIndex::new(8, 8),
            Err(Error::InvalidStationIndex { index: 8, count: 8 })
        ));
        assert!(matches!(
            StationIndex::new(usize::MAX, 8),
            Err(Error::InvalidStationIndex { .. })
        ));
    }

    #[test]
    fn empty_registry_has_no_valid_index() {
        assert!(StationIndex::new(0, 0).is_err());
    }

    #[test]
    fn name_exactly_max_len_accepted() {
        let name = "x".repeat(16);
        assert!(StationName::new(name, 16).is_ok());
    }

    #[test]
    fn name_length_counts_bytes() {
        // 8 characters, 16 bytes.
        let name = "é".repeat(8);
        assert_eq!(
            StationName::new(name, 15),
            Err(ValidationError::NameTooLong { max: 15, actual: 16 })
        );
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(StationName::new("", 32), Err(ValidationError::EmptyName));
        assert_eq!(StationName::new(" \t", 32), Err(ValidationError::EmptyName));
    }
}
