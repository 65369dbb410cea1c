// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client builder.

use std::time::Duration;

use crate::client::OpenSprinkler;
use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};
use crate::types::RunDuration;

/// Builder for clients that talk to a controller over HTTP.
///
/// Created with `OpenSprinkler::http("host")` or
/// `OpenSprinkler::http_config(config)`.
///
/// # Examples
///
/// ```no_run
/// use opensprinkler_lib::OpenSprinkler;
///
/// # async fn example() -> opensprinkler_lib::Result<()> {
/// // Plaintext password, hashed locally; stations fetched immediately
/// let controller = OpenSprinkler::http("192.168.1.20")
///     .with_password("opendoor")
///     .build()
///     .await?;
///
/// // Pre-hashed credential, no network access until the first refresh
/// let mut controller = OpenSprinkler::http("192.168.1.20")
///     .with_port(8080)
///     .with_digest("a6d82bced638de3def1e9bbb4983225c")
///     .build_without_refresh()?;
/// controller.refresh().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClientBuilder {
    config: HttpConfig,
}

impl HttpClientBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets the plaintext password. Mutually exclusive with
    /// [`with_digest`](Self::with_digest).
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.config = self.config.with_password(password);
        self
    }

    /// Sets a pre-computed password digest. Mutually exclusive with
    /// [`with_password`](Self::with_password).
    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.config = self.config.with_digest(digest);
        self
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.config = self.config.with_https();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets how long stations run when switched on.
    #[must_use]
    pub fn with_run_duration(mut self, run_duration: RunDuration) -> Self {
        self.config = self.config.with_run_duration(run_duration);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the client and fetches the station list.
    ///
    /// No client is returned when the initial refresh fails. Callers that
    /// want a client with an empty registry in that case (for example to
    /// render it as `UNCONNECTED`) should use
    /// [`build_without_refresh`](Self::build_without_refresh) and call
    /// [`OpenSprinkler::refresh`] themselves.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The configuration is invalid
    /// - The HTTP client cannot be created
    /// - The initial refresh fails (including `Error::Authentication`)
    pub async fn build(self) -> Result<OpenSprinkler<HttpTransport>, Error> {
        let transport = self.config.transport()?;
        OpenSprinkler::connect_with_transport(&self.config, transport).await
    }

    /// Builds the client without contacting the controller.
    ///
    /// The registry is empty until [`OpenSprinkler::refresh`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn build_without_refresh(self) -> Result<OpenSprinkler<HttpTransport>, Error> {
        let transport = self.config.transport()?;
        OpenSprinkler::with_transport(&self.config, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn builder_forwards_settings() {
        let builder = OpenSprinkler::http("192.168.1.20")
            .with_port(8080)
            .with_password("opendoor")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(builder.config().port(), 8080);
        assert_eq!(builder.config().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn build_without_refresh_starts_empty() {
        let client = OpenSprinkler::http("192.168.1.20")
            .with_password("opendoor")
            .build_without_refresh()
            .unwrap();
        assert!(client.is_empty());
        assert_eq!(client.hostname(), "192.168.1.20");
    }

    #[test]
    fn build_without_credential_fails() {
        let result = OpenSprinkler::http("192.168.1.20").build_without_refresh();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingCredential))
        ));
    }

    #[test]
    fn build_with_both_credentials_fails() {
        let result = OpenSprinkler::http_config(
            HttpConfig::new("192.168.1.20")
                .with_password("opendoor")
                .with_digest("a6d82bced638de3def1e9bbb4983225c"),
        )
        .build_without_refresh();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::ConflictingCredentials))
        ));
    }
}
