// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a real `OpenSprinkler` controller.
//!
//! These tests require a controller on the network and are ignored by default.
//! Run with: `cargo test --test real_device -- --ignored --test-threads=1`
//!
//! # Environment Variables
//!
//! - `OPENSPRINKLER_HOST` - Controller hostname or IP address
//! - `OPENSPRINKLER_PORT` - HTTP port (default: 80)
//! - `OPENSPRINKLER_PASSWORD` - Plaintext device password
//! - `OPENSPRINKLER_STATION` - Station index the tests may switch and rename
//!   (default: 0)
//!
//! # Example
//!
//! ```bash
//! export OPENSPRINKLER_HOST=192.168.1.20
//! export OPENSPRINKLER_PASSWORD=opendoor
//! export OPENSPRINKLER_STATION=7
//! cargo test --test real_device -- --ignored --test-threads=1
//! ```

#![cfg(feature = "http")]

use std::env;
use std::time::Duration;

use opensprinkler_lib::types::StationState;
use opensprinkler_lib::{Error, HttpTransport, OpenSprinkler, RunDuration};

/// Controller configuration loaded from environment variables.
struct ControllerConfig {
    host: String,
    port: u16,
    password: String,
    station: usize,
}

impl ControllerConfig {
    fn from_env() -> Self {
        Self {
            host: env::var("OPENSPRINKLER_HOST").expect("OPENSPRINKLER_HOST not set"),
            port: env::var("OPENSPRINKLER_PORT")
                .unwrap_or_else(|_| "80".to_string())
                .parse()
                .expect("Invalid OPENSPRINKLER_PORT"),
            password: env::var("OPENSPRINKLER_PASSWORD").expect("OPENSPRINKLER_PASSWORD not set"),
            station: env::var("OPENSPRINKLER_STATION")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .expect("Invalid OPENSPRINKLER_STATION"),
        }
    }
}

async fn connect(config: &ControllerConfig) -> OpenSprinkler<HttpTransport> {
    OpenSprinkler::http(&config.host)
        .with_port(config.port)
        .with_password(&config.password)
        .with_run_duration(RunDuration::new(60).expect("valid duration"))
        .build()
        .await
        .expect("Failed to connect to controller")
}

// =============================================================================
// Snapshot
// =============================================================================

#[tokio::test]
#[ignore]
async fn fetch_station_list() {
    let config = ControllerConfig::from_env();
    let controller = connect(&config).await;

    println!("{controller}");
    assert!(!controller.is_empty());
    for (position, (index, name, _)) in controller.statuslist().into_iter().enumerate() {
        assert_eq!(index, position);
        assert!(!name.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn wrong_password_is_rejected() {
    let config = ControllerConfig::from_env();
    let result = OpenSprinkler::http(&config.host)
        .with_port(config.port)
        .with_password(format!("{}-wrong", config.password))
        .build()
        .await;

    assert!(matches!(result, Err(Error::Authentication)));
}

// =============================================================================
// Station control
// =============================================================================

#[tokio::test]
#[ignore]
async fn switch_station_on_and_off() {
    let config = ControllerConfig::from_env();
    let mut controller = connect(&config).await;

    controller.off(config.station).await.expect("off failed");
    let prior = controller.on(config.station).await.expect("on failed");
    assert_eq!(prior, StationState::Off);

    tokio::time::sleep(Duration::from_secs(2)).await;
    controller.refresh().await.expect("refresh failed");
    assert_eq!(controller.status(config.station).unwrap(), StationState::On);

    let prior = controller.off(config.station).await.expect("off failed");
    assert_eq!(prior, StationState::On);
}

#[tokio::test]
#[ignore]
async fn rename_station_and_restore() {
    let config = ControllerConfig::from_env();
    let mut controller = connect(&config).await;
    let original = controller
        .station_name(config.station)
        .expect("station exists")
        .to_string();

    assert!(
        controller
            .set_station_name(config.station, "Test Zone")
            .await
            .expect("rename failed")
    );
    controller.refresh().await.expect("refresh failed");
    assert_eq!(controller.station_name(config.station).unwrap(), "Test Zone");

    controller
        .set_station_name(config.station, &original)
        .await
        .expect("restore failed");
}

#[tokio::test]
#[ignore]
async fn verify_reachable_controller() {
    let config = ControllerConfig::from_env();
    let mut controller = connect(&config).await;
    assert!(controller.verify().await);
}
