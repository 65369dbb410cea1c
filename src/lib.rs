// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `OpenSprinkler` Lib - A Rust library to control `OpenSprinkler`
//! irrigation controllers.
//!
//! This library keeps a local snapshot of the controller's stations (index,
//! name, on/off state) and reconciles it with the device over the
//! controller's HTTP API.
//!
//! # Supported Features
//!
//! - **Station snapshot**: fetch names and states, query them offline
//! - **Station control**: turn stations on or off, cycle them
//! - **Renaming**: change station names, validated against the device limit
//! - **Authentication**: plaintext password or pre-hashed digest
//!
//! # Quick Start
//!
//! ```no_run
//! use opensprinkler_lib::OpenSprinkler;
//!
//! #[tokio::main]
//! async fn main() -> opensprinkler_lib::Result<()> {
//!     // Fetches the station list before returning
//!     let mut controller = OpenSprinkler::http("192.168.1.20")
//!         .with_password("opendoor")
//!         .build()
//!         .await?;
//!
//!     for (index, name, state) in controller.statuslist() {
//!         println!("{index}: {name} is {state}");
//!     }
//!
//!     // Returns the state the station had before
//!     let was = controller.off(3).await?;
//!     println!("station 3 was {was}");
//!
//!     controller.set_station_name(3, "Back Lawn").await?;
//!     print!("{controller}");
//!     Ok(())
//! }
//! ```
//!
//! # Consistency
//!
//! Every network operation either fully succeeds and updates the snapshot,
//! or fails and leaves it exactly as it was. Nothing is retried; errors are
//! returned to the caller as [`Error`].

pub mod client;
pub mod command;
pub mod error;
pub mod protocol;
pub mod response;
pub mod station;
pub mod types;

#[cfg(feature = "http")]
pub use client::HttpClientBuilder;
pub use client::{DEFAULT_CYCLE_PAUSE, OpenSprinkler};
pub use command::{Command, QueryCommand, StationCommand};
pub use error::{Error, ProtocolError, Result, TransportError, ValidationError};
#[cfg(feature = "http")]
pub use protocol::HttpTransport;
pub use protocol::{ApiRequest, ApiResponse, HttpConfig, RequestBuilder, Transport};
pub use response::{Reply, ResultCode};
pub use station::{Station, StationRegistry, Stations};
pub use types::{Credential, Digest, RunDuration, StationIndex, StationName, StationState};
