// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport-ready request descriptions.

use std::fmt::Write as _;

use crate::command::Command;
use crate::types::Digest;

/// Name of the query parameter carrying the credential digest.
const DIGEST_PARAM: &str = "pw";

/// HTTP method of a request.
///
/// The controller API only uses `GET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// HTTP GET.
    #[default]
    Get,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

/// Scheme, host and port of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    use_https: bool,
}

impl Endpoint {
    /// Creates an endpoint.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, use_https: bool) -> Self {
        Self {
            host: host.into(),
            port,
            use_https,
        }
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

    /// Returns the URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        if self.use_https { "https" } else { "http" }
    }

    /// Builds the base URL, omitting the port when it is the scheme default.
    #[must_use]
    pub fn base_url(&self) -> String {
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{}://{}{port_suffix}", self.scheme(), self.host)
    }
}

/// A complete request, ready to be handed to a [`Transport`](super::Transport).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    base_url: String,
    path: &'static str,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the query parameters, digest first.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the value of a query parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Renders the full URL with a percent-encoded query string.
    #[must_use]
    pub fn url(&self) -> String {
        self.render(false)
    }

    /// Renders the URL with the digest masked, for logging.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        self.render(true)
    }

    fn render(&self, redact: bool) -> String {
        let mut url = format!("{}{}", self.base_url, self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            let value = if redact && key == DIGEST_PARAM {
                "<redacted>".into()
            } else {
                urlencoding::encode(value)
            };
            let _ = write!(url, "{sep}{}={value}", urlencoding::encode(key));
        }
        url
    }
}

impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.redacted_url())
            .finish()
    }
}

/// Composes authenticated requests for one controller.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::command::QueryCommand;
/// use opensprinkler_lib::protocol::{Endpoint, RequestBuilder};
/// use opensprinkler_lib::types::Digest;
///
/// let builder = RequestBuilder::new(
///     Endpoint::new("192.168.1.20", 8080, false),
///     Digest::from_password("opendoor").unwrap(),
/// );
/// let request = builder.build(&QueryCommand::StationStatus);
/// assert_eq!(
///     request.url(),
///     "http://192.168.1.20:8080/js?pw=a6d82bced638de3def1e9bbb4983225c"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: Endpoint,
    digest: Digest,
}

impl RequestBuilder {
    /// Creates a builder for the given endpoint and credential digest.
    #[must_use]
    pub fn new(endpoint: Endpoint, digest: Digest) -> Self {
        Self { endpoint, digest }
    }

    /// Returns the endpoint requests are addressed to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Builds the request for `command`.
    #[must_use]
    pub fn build<C: Command + ?Sized>(&self, command: &C) -> ApiRequest {
        let mut query = Vec::with_capacity(4);
        query.push((DIGEST_PARAM.to_string(), self.digest.as_str().to_string()));
        query.extend(command.params());

        ApiRequest {
            method: Method::Get,
            base_url: self.endpoint.base_url(),
            path: command.path(),
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{QueryCommand, StationCommand};
    use crate::types::{StationIndex, StationName};

    fn builder() -> RequestBuilder {
        RequestBuilder::new(
            Endpoint::new("10.0.0.5", 80, false),
            Digest::from_hex("a6d82bced638de3def1e9bbb4983225c").unwrap(),
        )
    }

    #[test]
    fn base_url_default_ports() {
        assert_eq!(Endpoint::new("os", 80, false).base_url(), "http://os");
        assert_eq!(Endpoint::new("os", 443, true).base_url(), "https://os");
        assert_eq!(Endpoint::new("os", 8080, false).base_url(), "http://os:8080");
        assert_eq!(Endpoint::new("os", 80, true).base_url(), "https://os:80");
    }

    #[test]
    fn digest_is_first_param() {
        let request = builder().build(&StationCommand::off(StationIndex::new(3, 8).unwrap()));
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.method().as_str(), "GET");
        assert_eq!(request.path(), "/cm");
        assert_eq!(request.query()[0].0, "pw");
        assert_eq!(request.param("sid"), Some("3"));
        assert_eq!(request.param("en"), Some("0"));
        assert_eq!(
            request.url(),
            "http://10.0.0.5/cm?pw=a6d82bced638de3def1e9bbb4983225c&sid=3&en=0"
        );
    }

    #[test]
    fn rename_value_is_percent_encoded() {
        let request = builder().build(&StationCommand::Rename {
            index: StationIndex::new(3, 8).unwrap(),
            name: StationName::new("Back Lawn & Roses", 32).unwrap(),
        });
        assert!(request.url().ends_with("&s3=Back%20Lawn%20%26%20Roses"));
        assert_eq!(request.param("s3"), Some("Back Lawn & Roses"));
    }

    #[test]
    fn redacted_url_hides_digest() {
        let request = builder().build(&QueryCommand::StationNames);
        let redacted = request.redacted_url();
        assert_eq!(redacted, "http://10.0.0.5/jn?pw=<redacted>");
        assert!(!format!("{request:?}").contains("a6d8"));
    }
}
