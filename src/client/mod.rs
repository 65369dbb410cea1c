// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for one `OpenSprinkler` controller.
//!
//! ```no_run
//! use opensprinkler_lib::OpenSprinkler;
//!
//! # async fn example() -> opensprinkler_lib::Result<()> {
//! let mut controller = OpenSprinkler::http("192.168.1.20")
//!     .with_password("opendoor")
//!     .build()
//!     .await?;
//!
//! let was = controller.on(2).await?;
//! println!("station 2 was {was}, now {}", controller.status(2)?);
//! print!("{controller}");
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;

#[cfg(feature = "http")]
pub use http_builder::HttpClientBuilder;

use std::fmt;
use std::time::Duration;

use crate::error::Result;
use crate::protocol::{Endpoint, HttpConfig, Session, Transport};
#[cfg(feature = "http")]
use crate::protocol::HttpTransport;
use crate::station::{Station, StationRegistry, Stations};
use crate::types::StationState;

/// Pause used by [`OpenSprinkler::cycle`] when callers have no preference.
pub const DEFAULT_CYCLE_PAUSE: Duration = Duration::from_secs(3);

/// A client for one `OpenSprinkler` controller.
///
/// The client owns the connection parameters and exactly one
/// [`StationRegistry`]. Queries (`status`, `statuslist`, `get`, iteration,
/// display) read the last snapshot and never touch the network. `refresh`,
/// `on`, `off`, `cycle` and `set_station_name` perform round trips and
/// take `&mut self`: one logical owner per client.
///
/// # Type Parameter
///
/// `T` is the [`Transport`]; [`HttpTransport`] for real controllers.
#[derive(Debug)]
pub struct OpenSprinkler<T> {
    registry: StationRegistry<T>,
}

#[cfg(feature = "http")]
impl OpenSprinkler<HttpTransport> {
    /// Starts building a client for the controller at `host`.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder::new(HttpConfig::new(host))
    }

    /// Starts building a client from a complete configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpClientBuilder {
        HttpClientBuilder::new(config)
    }
}

impl<T: Transport> OpenSprinkler<T> {
    /// Creates a client over a custom transport without contacting the
    /// controller. The registry starts empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the configuration is invalid.
    pub fn with_transport(config: &HttpConfig, transport: T) -> Result<Self> {
        let session = Session::new(config.request_builder()?, transport);
        Ok(Self {
            registry: StationRegistry::new(session, config.run_duration()),
        })
    }

    /// Creates a client over a custom transport and performs the initial
    /// refresh.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for an invalid configuration or the
    /// error of the initial refresh.
    pub async fn connect_with_transport(config: &HttpConfig, transport: T) -> Result<Self> {
        let mut client = Self::with_transport(config, transport)?;
        client.refresh().await?;
        Ok(client)
    }

    /// Returns the controller hostname.
    #[must_use]
    pub fn hostname(&self) -> &str {
        self.registry.endpoint().host()
    }

    /// Returns the controller endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.registry.endpoint()
    }

    /// Returns the station registry.
    #[must_use]
    pub fn registry(&self) -> &StationRegistry<T> {
        &self.registry
    }

    /// Re-reads all stations from the controller.
    ///
    /// # Errors
    ///
    /// Returns the error of the exchange; the previous snapshot is kept.
    pub async fn refresh(&mut self) -> Result<()> {
        self.registry.refresh().await
    }

    /// Returns the number of stations in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if the snapshot holds no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns the station at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&Station> {
        self.registry.get(index)
    }

    /// Returns the state of one station; displays as `"ON"` or `"OFF"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` if `index` is out of range.
    pub fn status(&self, index: usize) -> Result<StationState> {
        Ok(self.registry.get(index)?.state())
    }

    /// Returns the name of one station.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` if `index` is out of range.
    pub fn station_name(&self, index: usize) -> Result<&str> {
        Ok(self.registry.get(index)?.name())
    }

    /// Returns `(index, name, state)` for every station, in index order.
    #[must_use]
    pub fn statuslist(&self) -> Vec<(usize, String, StationState)> {
        self.registry.stations().iter().map(Station::to_status).collect()
    }

    /// Finds the index of the station called `name`.
    ///
    /// Surrounding whitespace is ignored on both sides. The first match
    /// wins.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.registry
            .stations()
            .iter()
            .find(|station| station.name().trim() == name)
            .map(Station::index)
    }

    /// Turns a station on for the configured run duration.
    ///
    /// Returns the state the station had before.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` or the error of the exchange.
    pub async fn on(&mut self, index: usize) -> Result<StationState> {
        self.registry.set_state(index, StationState::On).await
    }

    /// Turns a station off.
    ///
    /// Returns the state the station had before. Turning off a station that
    /// is already off is acknowledged normally.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex` or the error of the exchange.
    pub async fn off(&mut self, index: usize) -> Result<StationState> {
        self.registry.set_state(index, StationState::Off).await
    }

    /// Turns a station off, waits `pause`, and turns it back on.
    ///
    /// Returns the state the station had before the cycle. If turning it
    /// off fails, nothing else is sent.
    ///
    /// # Errors
    ///
    /// Returns the first error of either switch.
    pub async fn cycle(&mut self, index: usize, pause: Duration) -> Result<StationState> {
        let prior = self.off(index).await?;
        tokio::time::sleep(pause).await;
        self.on(index).await?;
        Ok(prior)
    }

    /// Renames a station.
    ///
    /// Returns `true` once the controller has acknowledged the new name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStationIndex`, `Error::Validation` for an
    /// empty or overlong name, or the error of the exchange.
    pub async fn set_station_name(&mut self, index: usize, name: &str) -> Result<bool> {
        self.registry.rename(index, name).await?;
        Ok(true)
    }

    /// Returns `true` if the controller answers with this credential.
    ///
    /// A credential rejection seen here is fatal for the client, exactly
    /// as for any other network operation.
    pub async fn verify(&mut self) -> bool {
        match self.registry.probe().await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(host = self.hostname(), error = %e, "Controller verification failed");
                false
            }
        }
    }

    /// Returns an iterator over the current snapshot.
    #[must_use]
    pub fn iter(&self) -> Stations {
        self.registry.iter()
    }
}

impl<T: Transport> fmt::Display for OpenSprinkler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.registry, f)
    }
}

impl<T: Transport> IntoIterator for &OpenSprinkler<T> {
    type Item = Station;
    type IntoIter = Stations;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
