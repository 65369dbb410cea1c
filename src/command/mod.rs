// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `OpenSprinkler` command definitions.
//!
//! Typed representations of the controller endpoints used by this library.
//!
//! | Command | Endpoint | Purpose |
//! |---------|----------|---------|
//! | [`QueryCommand::StationNames`] | `/jn` | Station names and name buffer size |
//! | [`QueryCommand::StationStatus`] | `/js` | Station count and on/off bits |
//! | [`StationCommand::Switch`] | `/cm` | Open or close one station |
//! | [`StationCommand::Rename`] | `/cs` | Change one station name |
//!
//! Commands only describe the endpoint and its parameters; the credential
//! digest is appended by [`RequestBuilder`](crate::protocol::RequestBuilder).
//!
//! # Examples
//!
//! ```
//! use opensprinkler_lib::command::{Command, StationCommand};
//! use opensprinkler_lib::types::{RunDuration, StationIndex, StationState};
//!
//! let cmd = StationCommand::Switch {
//!     index: StationIndex::new(2, 8).unwrap(),
//!     state: StationState::On,
//!     duration: RunDuration::new(300).unwrap(),
//! };
//!
//! assert_eq!(cmd.path(), "/cm");
//! assert_eq!(
//!     cmd.params(),
//!     vec![
//!         ("sid".to_string(), "2".to_string()),
//!         ("en".to_string(), "1".to_string()),
//!         ("t".to_string(), "300".to_string()),
//!     ]
//! );
//! ```

mod query;
mod station;

pub use query::QueryCommand;
pub use station::StationCommand;

/// A command that can be sent to an `OpenSprinkler` controller.
pub trait Command {
    /// Returns the endpoint path, e.g. `"/js"`.
    fn path(&self) -> &'static str;

    /// Returns the command-specific query parameters, in wire order.
    ///
    /// The `pw` parameter is not included.
    fn params(&self) -> Vec<(String, String)>;

    /// Returns a short label used in logs.
    fn label(&self) -> &'static str;
}
