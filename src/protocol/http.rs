// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP connection settings and transport for `OpenSprinkler` controllers.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "http")]
use reqwest::Client;

#[cfg(feature = "http")]
use crate::error::TransportError;
use crate::error::ValidationError;
#[cfg(feature = "http")]
use crate::protocol::{ApiRequest, ApiResponse, Method, Transport};
use crate::protocol::{Endpoint, RequestBuilder};
use crate::types::{Credential, RunDuration};

// ============================================================================
// HttpConfig - Connection parameters for a controller
// ============================================================================

/// Configuration for an HTTP `OpenSprinkler` controller.
///
/// Exactly one of [`with_password`](Self::with_password) or
/// [`with_digest`](Self::with_digest) must be supplied. A password is
/// hashed when the client is built; a digest is used as-is.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::protocol::HttpConfig;
/// use opensprinkler_lib::types::RunDuration;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.20").with_password("opendoor");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.20")
///     .with_port(8080)
///     .with_https()
///     .with_digest("a6d82bced638de3def1e9bbb4983225c")
///     .with_timeout(Duration::from_secs(5))
///     .with_run_duration(RunDuration::from_minutes(20).unwrap());
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    password: Option<String>,
    digest: Option<String>,
    timeout: Duration,
    run_duration: RunDuration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the controller
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            password: None,
            digest: None,
            timeout: Self::DEFAULT_TIMEOUT,
            run_duration: RunDuration::DEFAULT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the plaintext password. It is hashed when the client is built.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets a pre-computed password digest (32 hex characters).
    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how long stations run when switched on.
    #[must_use]
    pub fn with_run_duration(mut self, run_duration: RunDuration) -> Self {
        self.run_duration = run_duration;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the run duration for switched-on stations.
    #[must_use]
    pub fn run_duration(&self) -> RunDuration {
        self.run_duration
    }

    /// Returns the endpoint described by this configuration.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port, self.use_https)
    }

    /// Resolves the configured credential.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingCredential` when neither form was
    /// set and `ValidationError::ConflictingCredentials` when both were.
    pub fn credential(&self) -> Result<Credential, ValidationError> {
        match (&self.password, &self.digest) {
            (Some(password), None) => Ok(Credential::Password(password.clone())),
            (None, Some(digest)) => Ok(Credential::Digest(digest.clone())),
            (Some(_), Some(_)) => Err(ValidationError::ConflictingCredentials),
            (None, None) => Err(ValidationError::MissingCredential),
        }
    }

    /// Validates the configuration and creates the request builder.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty host or an invalid credential.
    pub fn request_builder(&self) -> Result<RequestBuilder, ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::EmptyHostname);
        }
        let credential = self.credential()?;
        tracing::debug!(
            host = %self.host,
            prehashed = credential.is_digest(),
            "Resolving controller credential"
        );
        Ok(RequestBuilder::new(self.endpoint(), credential.to_digest()?))
    }

    /// Creates an `HttpTransport` honouring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    #[cfg(feature = "http")]
    pub fn transport(&self) -> Result<HttpTransport, TransportError> {
        HttpTransport::new(self.timeout)
    }
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("use_https", &self.use_https)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("digest", &self.digest.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("run_duration", &self.run_duration)
            .finish()
    }
}

// ============================================================================
// HttpTransport - reqwest-backed transport
// ============================================================================

/// `reqwest`-backed [`Transport`].
///
/// Each request is sent once with the method of its [`ApiRequest`]; there
/// is no retry.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else {
            TransportError::Http(err)
        }
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request.url();

        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
        };

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.20");
        assert_eq!(config.host(), "192.168.1.20");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.run_duration(), RunDuration::DEFAULT);
    }

    #[test]
    fn http_config_with_https() {
        let config = HttpConfig::new("192.168.1.20").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 443);
    }

    #[test]
    fn http_config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.20")
            .with_port(8443)
            .with_https();
        assert_eq!(config.port(), 8443);
        assert_eq!(config.endpoint().base_url(), "https://192.168.1.20:8443");
    }

    #[test]
    fn credential_password_is_hashed() {
        let builder = HttpConfig::new("os")
            .with_password("opendoor")
            .request_builder()
            .unwrap();
        let request = builder.build(&crate::command::QueryCommand::StationStatus);
        assert_eq!(request.param("pw"), Some("a6d82bced638de3def1e9bbb4983225c"));
    }

    #[test]
    fn credential_digest_is_not_rehashed() {
        let builder = HttpConfig::new("os")
            .with_digest("A6D82BCED638DE3DEF1E9BBB4983225C")
            .request_builder()
            .unwrap();
        let request = builder.build(&crate::command::QueryCommand::StationStatus);
        assert_eq!(request.param("pw"), Some("a6d82bced638de3def1e9bbb4983225c"));
    }

    #[test]
    fn credential_required() {
        assert_eq!(
            HttpConfig::new("os").request_builder().unwrap_err(),
            ValidationError::MissingCredential
        );
    }

    #[test]
    fn credentials_mutually_exclusive() {
        let config = HttpConfig::new("os")
            .with_password("opendoor")
            .with_digest("a6d82bced638de3def1e9bbb4983225c");
        assert_eq!(
            config.credential().unwrap_err(),
            ValidationError::ConflictingCredentials
        );
    }

    #[test]
    fn empty_password_rejected() {
        assert_eq!(
            HttpConfig::new("os")
                .with_password("")
                .request_builder()
                .unwrap_err(),
            ValidationError::EmptyPassword
        );
    }

    #[test]
    fn empty_host_rejected() {
        assert_eq!(
            HttpConfig::new(" ")
                .with_password("opendoor")
                .request_builder()
                .unwrap_err(),
            ValidationError::EmptyHostname
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = HttpConfig::new("os").with_password("opendoor");
        let debug = format!("{config:?}");
        assert!(!debug.contains("opendoor"));
        assert!(debug.contains("<redacted>"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn transport_builds() {
        assert!(HttpConfig::new("os").transport().is_ok());
    }
}
