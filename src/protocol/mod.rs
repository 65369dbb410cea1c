// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request building and transport for talking to an `OpenSprinkler`
//! controller.
//!
//! - [`RequestBuilder`]: turns a [`Command`] into an authenticated
//!   [`ApiRequest`]
//! - [`Transport`]: performs the exchange; [`HttpTransport`] is the
//!   `reqwest`-backed implementation
//! - [`Session`]: builds, sends and decodes in one call

mod http;
mod request;

pub use http::HttpConfig;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use request::{ApiRequest, Endpoint, Method, RequestBuilder};

use crate::command::Command;
use crate::error::{Error, ProtocolError, TransportError};
use crate::response::Reply;

/// Raw reply of a transport exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a response with the given HTTP status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The collaborator that moves requests to the controller and back.
///
/// Implementations enforce their own timeouts and report them as
/// [`TransportError::Timeout`]. They must not retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs one request/response exchange.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the exchange cannot be completed.
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// A transport paired with the request builder for one controller.
#[derive(Debug)]
pub struct Session<T> {
    builder: RequestBuilder,
    transport: T,
}

impl<T: Transport> Session<T> {
    /// Creates a session.
    #[must_use]
    pub fn new(builder: RequestBuilder, transport: T) -> Self {
        Self { builder, transport }
    }

    /// Returns the endpoint of the controller.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.builder.endpoint()
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `command` and decodes the reply.
    ///
    /// Authentication rejections and refused commands are turned into
    /// errors; only usable replies are returned.
    ///
    /// # Errors
    ///
    /// - `Error::Transport` if the exchange fails
    /// - `Error::Authentication` on HTTP 401 or result code 2
    /// - `Error::Protocol` for any other non-success status, undecodable
    ///   body or refused command
    pub async fn call<C: Command + ?Sized>(&self, command: &C) -> Result<Reply, Error> {
        let request = self.builder.build(command);

        tracing::debug!(
            command = command.label(),
            method = request.method().as_str(),
            url = %request.redacted_url(),
            "Sending request"
        );

        let response = self.transport.execute(&request).await?;

        tracing::debug!(status = response.status(), body = %response.body(), "Received response");

        if response.status() == 401 {
            tracing::warn!(host = self.endpoint().host(), "Controller rejected credentials");
            return Err(Error::Authentication);
        }
        if !(200..300).contains(&response.status()) {
            return Err(ProtocolError::HttpStatus(response.status()).into());
        }

        match Reply::decode(response.body())? {
            Reply::AuthRejected => {
                tracing::warn!(host = self.endpoint().host(), "Controller rejected credentials");
                Err(Error::Authentication)
            }
            Reply::Rejected(code) => Err(ProtocolError::Rejected {
                code: code.code(),
                reason: code.reason(),
            }
            .into()),
            reply => Ok(reply),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted in-memory transport for unit tests.

    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use super::{ApiRequest, ApiResponse, Transport};
    use crate::error::TransportError;

    /// Replays queued outcomes in order and records every request.
    #[derive(Debug, Default)]
    pub struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&self, body: &str) -> &Self {
            self.replies.lock().push_back(Ok(ApiResponse::ok(body)));
            self
        }

        pub fn respond(&self, response: ApiResponse) -> &Self {
            self.replies.lock().push_back(Ok(response));
            self
        }

        pub fn fail(&self, error: TransportError) -> &Self {
            self.replies.lock().push_back(Err(error));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().len()
        }
    }

    impl Transport for ScriptedTransport {
        async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
            self.requests.lock().push(request.clone());
            self.replies.lock().pop_front().unwrap_or_else(|| {
                Err(TransportError::ConnectionFailed(
                    "no scripted reply left".to_string(),
                ))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use crate::command::QueryCommand;
    use crate::types::Digest;

    fn session() -> Session<ScriptedTransport> {
        Session::new(
            RequestBuilder::new(
                Endpoint::new("os.local", 80, false),
                Digest::from_password("opendoor").unwrap(),
            ),
            ScriptedTransport::new(),
        )
    }

    #[tokio::test]
    async fn call_returns_decoded_reply() {
        let session = session();
        session.transport().reply(r#"{"sn":[0,1],"nstations":2}"#);

        let reply = session.call(&QueryCommand::StationStatus).await.unwrap();
        assert_eq!(reply.into_station_states().unwrap().count(), 2);

        let requests = session.transport().requests();
        assert_eq!(requests[0].path(), "/js");
        assert_eq!(
            requests[0].param("pw"),
            Some("a6d82bced638de3def1e9bbb4983225c")
        );
    }

    #[tokio::test]
    async fn result_two_is_authentication_error() {
        let session = session();
        session.transport().reply(r#"{"result":2}"#);

        let err = session.call(&QueryCommand::StationNames).await.unwrap_err();
        assert!(matches!(err, Error::Authentication));
    }

    #[tokio::test]
    async fn http_401_is_authentication_error() {
        let session = session();
        session.transport().respond(ApiResponse::new(401, ""));

        let err = session.call(&QueryCommand::StationNames).await.unwrap_err();
        assert!(matches!(err, Error::Authentication));
    }

    #[tokio::test]
    async fn http_500_is_protocol_error() {
        let session = session();
        session.transport().respond(ApiResponse::new(500, "oops"));

        let err = session.call(&QueryCommand::StationNames).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::HttpStatus(500))
        ));
    }

    #[tokio::test]
    async fn refused_command_is_protocol_error() {
        let session = session();
        session.transport().reply(r#"{"result":48}"#);

        let err = session.call(&QueryCommand::StationNames).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Rejected { code: 48, .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_is() {
        let session = session();
        session.transport().fail(TransportError::Timeout(10_000));

        let err = session.call(&QueryCommand::StationNames).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::Timeout(10_000))
        ));
    }
}
