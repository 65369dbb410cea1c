// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for `OpenSprinkler` JSON replies.
//!
//! Every body is decoded into a [`Reply`] first. Malformed payloads fail
//! here, at one boundary, instead of surfacing as missing fields deep in
//! the station logic.

mod reply;
mod result_code;

pub use reply::{Reply, StationNames, StationStates, assemble, placeholder_name};
pub use result_code::ResultCode;
