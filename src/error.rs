// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `OpenSprinkler` library.
//!
//! Every failure is surfaced to the direct caller of the operation that
//! triggered it. Nothing is retried inside the library and nothing is
//! swallowed: a failed mutating call leaves the local station snapshot
//! exactly as it was before the call.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport could not complete the exchange with the controller.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The controller rejected the credential digest.
    ///
    /// This is fatal for the client instance: build a new client with the
    /// correct password or digest.
    #[error("authentication rejected by the controller")]
    Authentication,

    /// The controller answered with a payload this client cannot use.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A station index outside `[0, count)` was supplied.
    ///
    /// Detected locally; such requests are never sent to the controller.
    #[error("station index {index} is out of range (station count is {count})")]
    InvalidStationIndex {
        /// The index that was requested.
        index: usize,
        /// The number of stations in the current snapshot.
        count: usize,
    },

    /// An argument or configuration value was rejected before any request
    /// was built.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the controller failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding controller replies.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The controller answered with an HTTP status other than success.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The reply decoded, but not into the shape the operation expects.
    #[error("unexpected reply: expected {expected}, got {actual}")]
    UnexpectedReply {
        /// The reply kind the operation was waiting for.
        expected: &'static str,
        /// The reply kind that actually arrived.
        actual: &'static str,
    },

    /// The reply is internally inconsistent.
    #[error("malformed reply: {0}")]
    Malformed(String),

    /// The controller refused the command with a non-success result code.
    #[error("controller rejected the command with result {code} ({reason})")]
    Rejected {
        /// Raw `result` value.
        code: u16,
        /// Human-readable meaning of the code.
        reason: &'static str,
    },
}

/// Errors related to argument and configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No password or digest was configured.
    #[error("a password or a digest is required")]
    MissingCredential,

    /// Both a password and a digest were configured.
    #[error("password and digest are mutually exclusive")]
    ConflictingCredentials,

    /// The plaintext password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// A pre-hashed digest is not 32 hexadecimal characters.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    /// The hostname is empty.
    #[error("hostname must not be empty")]
    EmptyHostname,

    /// A station name is empty or whitespace only.
    #[error("station name must not be empty")]
    EmptyName,

    /// A station name is longer than the controller accepts.
    #[error("station name is {actual} bytes long, the controller accepts at most {max}")]
    NameTooLong {
        /// Maximum accepted length in bytes.
        max: usize,
        /// Length of the rejected name in bytes.
        actual: usize,
    },

    /// A numeric value is outside the allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the setting.
        field: &'static str,
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
        /// The actual value that was provided.
        actual: u64,
    },

    /// An invalid station state string was provided.
    #[error("invalid station state: {0}")]
    InvalidState(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
