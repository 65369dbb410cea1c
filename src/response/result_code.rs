// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller result codes.

use std::fmt;

/// The `result` value returned by command endpoints.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::response::ResultCode;
///
/// assert!(ResultCode::from(1).is_success());
/// assert_eq!(ResultCode::from(2), ResultCode::Unauthorized);
/// assert_eq!(ResultCode::from(99).code(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Command accepted.
    Success,
    /// Wrong credential digest.
    Unauthorized,
    /// Password confirmation mismatch.
    Mismatch,
    /// A required parameter is missing.
    DataMissing,
    /// A parameter is out of range.
    OutOfRange,
    /// A parameter has the wrong format.
    DataFormatError,
    /// Invalid RF code.
    RfCodeError,
    /// Unknown endpoint.
    PageNotFound,
    /// The operation is not permitted in the current controller state.
    NotPermitted,
    /// A code this library does not know.
    Unknown(u16),
}

impl ResultCode {
    /// Returns the raw numeric code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Success => 1,
            Self::Unauthorized => 2,
            Self::Mismatch => 3,
            Self::DataMissing => 16,
            Self::OutOfRange => 17,
            Self::DataFormatError => 18,
            Self::RfCodeError => 19,
            Self::PageNotFound => 32,
            Self::NotPermitted => 48,
            Self::Unknown(code) => *code,
        }
    }

    /// Returns a short description of the code.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Unauthorized => "unauthorized",
            Self::Mismatch => "mismatch",
            Self::DataMissing => "data missing",
            Self::OutOfRange => "out of range",
            Self::DataFormatError => "data format error",
            Self::RfCodeError => "RF code error",
            Self::PageNotFound => "page not found",
            Self::NotPermitted => "not permitted",
            Self::Unknown(_) => "unknown result",
        }
    }

    /// Returns `true` for [`ResultCode::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<u16> for ResultCode {
    fn from(code: u16) -> Self {
        match code {
            1 => Self::Success,
            2 => Self::Unauthorized,
            3 => Self::Mismatch,
            16 => Self::DataMissing,
            17 => Self::OutOfRange,
            18 => Self::DataFormatError,
            19 => Self::RfCodeError,
            32 => Self::PageNotFound,
            48 => Self::NotPermitted,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for code in [1, 2, 3, 16, 17, 18, 19, 32, 48] {
            assert_eq!(ResultCode::from(code).code(), code);
            assert!(!matches!(ResultCode::from(code), ResultCode::Unknown(_)));
        }
    }

    #[test]
    fn display() {
        assert_eq!(ResultCode::OutOfRange.to_string(), "17 (out of range)");
        assert_eq!(ResultCode::from(7).to_string(), "7 (unknown result)");
    }
}
