// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared across the library.
//!
//! - [`StationState`]: on/off state of a station
//! - [`StationIndex`], [`StationName`]: arguments validated against the
//!   current station snapshot
//! - [`RunDuration`]: how long a manually started station waters
//! - [`Digest`] and [`Credential`]: the authentication credential in its
//!   plaintext and hashed forms

mod digest;
mod run_duration;
mod station_ref;
mod station_state;

pub use digest::{Credential, Digest};
pub use run_duration::RunDuration;
pub use station_ref::{StationIndex, StationName};
pub use station_state::StationState;
