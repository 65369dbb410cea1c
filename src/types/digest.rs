// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Credential digest sent with every controller request.
//!
//! The controller never sees the plaintext password: each request carries
//! the lowercase hexadecimal MD5 of the password in the `pw` parameter.

use std::fmt;

use md5::{Digest as _, Md5};

use crate::error::ValidationError;

/// The one-way digest of the controller password.
///
/// A `Digest` is either computed from a plaintext password with
/// [`Digest::from_password`] or adopted as-is from an already hashed value
/// with [`Digest::from_hex`]. A pre-hashed value is never hashed again.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::types::Digest;
///
/// // Factory default password of the controller.
/// let hashed = Digest::from_password("opendoor").unwrap();
/// assert_eq!(hashed.as_str(), "a6d82bced638de3def1e9bbb4983225c");
///
/// // The same credential supplied pre-hashed, in any letter case.
/// let adopted = Digest::from_hex("A6D82BCED638DE3DEF1E9BBB4983225C").unwrap();
/// assert_eq!(hashed, adopted);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// Length of the hexadecimal digest.
    pub const HEX_LEN: usize = 32;

    /// Hashes a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPassword` if the password is empty.
    pub fn from_password(password: &str) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Self(hex::encode(Md5::digest(password.as_bytes()))))
    }

    /// Adopts an already computed digest.
    ///
    /// Accepts upper- or lowercase hex and normalizes to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDigest` unless the value is exactly
    /// 32 hexadecimal characters.
    pub fn from_hex(digest: &str) -> Result<Self, ValidationError> {
        let digest = digest.trim();
        if digest.len() != Self::HEX_LEN || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidDigest(format!(
                "expected {} hex characters, got {:?}",
                Self::HEX_LEN,
                digest
            )));
        }
        Ok(Self(digest.to_ascii_lowercase()))
    }

    /// Returns the lowercase hexadecimal digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The digest is as good as the password on the wire, keep it out of logs.
impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Digest(<redacted>)")
    }
}

/// A controller credential as supplied by the caller.
///
/// Makes explicit which form is in use so that a digest is never hashed
/// twice.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Plaintext password, hashed when the client is built.
    Password(String),
    /// Pre-computed digest, used as-is.
    Digest(String),
}

impl Credential {
    /// Resolves the credential into the digest sent to the controller.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for an empty password or malformed digest.
    pub fn to_digest(&self) -> Result<Digest, ValidationError> {
        match self {
            Self::Password(password) => Digest::from_password(password),
            Self::Digest(hex) => Digest::from_hex(hex),
        }
    }

    /// Returns `true` if the credential was supplied pre-hashed.
    #[must_use]
    pub fn is_digest(&self) -> bool {
        matches!(self, Self::Digest(_))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password(_) => f.write_str("Credential::Password(<redacted>)"),
            Self::Digest(_) => f.write_str("Credential::Digest(<redacted>)"),
        }
    }
}
