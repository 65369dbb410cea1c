// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The station registry: the local snapshot and the operations that keep
//! it reconciled with the controller.

use std::fmt;
use std::sync::Arc;

use crate::command::{Command, QueryCommand, StationCommand};
use crate::error::{Error, Result};
use crate::protocol::{Endpoint, Session, Transport};
use crate::response::{self, Reply};
use crate::station::{Station, Stations};
use crate::types::{RunDuration, StationIndex, StationName, StationState};

/// Ordered collection of stations mirrored from one controller.
///
/// The registry holds a single snapshot. It changes only when the
/// controller confirms something: a fully decoded refresh replaces it
/// wholesale, an acknowledged command updates one station. Any failure
/// leaves it untouched.
///
/// Once the controller rejects the credential, every further network
/// operation fails with [`Error::Authentication`] without sending anything.
#[derive(Debug)]
pub struct StationRegistry<T> {
    session: Session<T>,
    snapshot: Arc<Vec<Station>>,
    max_name_len: usize,
    run_duration: RunDuration,
    auth_rejected: bool,
}

impl<T: Transport> StationRegistry<T> {
    /// Creates an empty registry. Call [`refresh`](Self::refresh) to fill it.
    #[must_use]
    pub fn new(session: Session<T>, run_duration: RunDuration) -> Self {
        Self {
            session,
            snapshot: Arc::new(Vec::new()),
            max_name_len: StationName::DEFAULT_MAX_LEN,
            run_duration,
            auth_rejected: false,
        }
    }

    /// Returns the controller endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.session.endpoint()
    }

    /// Returns the session used to reach the controller.
    #[must_use]
    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Returns the number of stations in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Returns `true` if the snapshot holds no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Returns the longest name, in bytes, the controller accepts.
    #[must_use]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Returns how long stations run when switched on.
    #[must_use]
    pub fn run_duration(&self) -> RunDuration {
        self.run_duration
    }

    /// Returns `true` once the controller has rejected the credential.
    #[must_use]
    pub fn is_auth_rejected(&self) -> bool {
        self.auth_rejected
    }

    /// Returns the stations of the current snapshot.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.snapshot
    }

    /// Returns the station at `index`. No network access.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&Station> {
        self.snapshot
            .get(index)
            .ok_or(Error::InvalidStationIndex {
                index,
                count: self.len(),
            })
    }

    /// Returns an iterator over the current snapshot.
    #[must_use]
    pub fn iter(&self) -> Stations {
        Stations::new(Arc::clone(&self.snapshot))
    }

    /// Replaces the snapshot with the controller's current stations.
    ///
    /// Names and states are fetched with two requests; the snapshot is only
    /// replaced once both replies have been decoded.
    ///
    /// # Errors
    ///
    /// Surfaces any transport, authentication or protocol error. The
    /// previous snapshot is kept.
    pub async fn refresh(&mut self) -> Result<()> {
        let names = self
            .call(&QueryCommand::StationNames)
            .await?
            .into_station_names()?;
        let states = self
            .call(&QueryCommand::StationStatus)
            .await?
            .into_station_states()?;

        let max_name_len = names.max_len.unwrap_or(StationName::DEFAULT_MAX_LEN);
        let stations = response::assemble(names, &states);

        tracing::info!(
            host = self.endpoint().host(),
            stations = stations.len(),
            "Refreshed station snapshot"
        );

        self.snapshot = Arc::new(stations);
        self.max_name_len = max_name_len;
        Ok(())
    }

    /// Switches a station and records the acknowledged state.
    ///
    /// Returns the state the station had before the call. Switching a
    /// station to the state it already has is sent anyway and is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` without sending anything when
    /// `index` is out of range, or the error of the exchange. The local
    /// state is unchanged on error.
    pub async fn set_state(&mut self, index: usize, desired: StationState) -> Result<StationState> {
        let index = StationIndex::new(index, self.len())?;
        let prior = self.snapshot[index.value()].state();

        let command = match desired {
            StationState::On => StationCommand::on(index, self.run_duration),
            StationState::Off => StationCommand::off(index),
        };
        self.call(&command).await?.expect_ack()?;

        Arc::make_mut(&mut self.snapshot)[index.value()].set_state(desired);
        tracing::debug!(station = %index, from = %prior, to = %desired, "Station switched");
        Ok(prior)
    }

    /// Renames a station and records the acknowledged name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` or `Error::Validation` without
    /// sending anything when the index or name is not acceptable, or the
    /// error of the exchange. The local name is unchanged on error.
    pub async fn rename(&mut self, index: usize, name: &str) -> Result<()> {
        let index = StationIndex::new(index, self.len())?;
        let name = StationName::new(name, self.max_name_len)?;

        self.call(&StationCommand::Rename {
            index,
            name: name.clone(),
        })
        .await?
        .expect_ack()?;

        tracing::debug!(station = %index, name = %name, "Station renamed");
        Arc::make_mut(&mut self.snapshot)[index.value()].set_name(name.into_inner());
        Ok(())
    }

    /// Checks that the controller answers a status query with this
    /// credential. The snapshot is not modified; a credential rejection
    /// latches like any other call.
    ///
    /// # Errors
    ///
    /// Returns the error of the exchange.
    pub async fn probe(&mut self) -> Result<()> {
        self.call(&QueryCommand::StationStatus)
            .await?
            .into_station_states()?;
        Ok(())
    }

    async fn call<C: Command + ?Sized>(&mut self, command: &C) -> Result<Reply> {
        if self.auth_rejected {
            return Err(Error::Authentication);
        }
        let result = self.session.call(command).await;
        if matches!(result, Err(Error::Authentication)) {
            self.auth_rejected = true;
        }
        result
    }
}

impl<T: Transport> fmt::Display for StationRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.endpoint().host();
        if self.is_empty() {
            return write!(f, "OpenSprinkler at {host} (UNCONNECTED)");
        }
        writeln!(f, "OpenSprinkler at {host}")?;
        writeln!(f, "Station\t{:<15.15}\tState", "Name")?;
        for station in self.snapshot.iter() {
            writeln!(
                f,
                "{}\t{:<15.15}\t{}",
                station.index(),
                station.name(),
                station.state()
            )?;
        }
        Ok(())
    }
}

impl<T: Transport> IntoIterator for &StationRegistry<T> {
    type Item = Station;
    type IntoIter = Stations;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
