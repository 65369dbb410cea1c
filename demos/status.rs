// SPDX-License-Identifier: MPL-2.0

//! Station status example.
//!
//! Connects to a controller, prints its station table, and optionally
//! switches one station.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example status -- <host> <password> [on|off|cycle <station>]
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Print all stations
//! cargo run --example status -- 192.168.1.20 opendoor
//!
//! # Turn station 3 on for the default run time, then print again
//! cargo run --example status -- 192.168.1.20 opendoor on 3
//! ```

use std::env;

use opensprinkler_lib::{DEFAULT_CYCLE_PAUSE, OpenSprinkler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 && args.len() != 5 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let host = &args[1];
    let mut controller = OpenSprinkler::http(host)
        .with_password(&args[2])
        .build_without_refresh()?;

    if let Err(e) = controller.refresh().await {
        eprintln!("Refresh failed: {e}");
        println!("{controller}");
        std::process::exit(1);
    }

    print!("{controller}");

    if args.len() == 5 {
        let station: usize = args[4].parse()?;
        let name = controller.station_name(station)?.to_string();
        let prior = match args[3].as_str() {
            "on" => controller.on(station).await?,
            "off" => controller.off(station).await?,
            "cycle" => controller.cycle(station, DEFAULT_CYCLE_PAUSE).await?,
            other => {
                eprintln!("Unknown action: {other}");
                print_usage(&args[0]);
                std::process::exit(1);
            }
        };

        println!();
        println!(
            "{name}: {prior} -> {}",
            controller.status(station)?
        );
        println!();
        print!("{controller}");
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} <host> <password>");
    eprintln!("  {program} <host> <password> on|off|cycle <station>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} 192.168.1.20 opendoor");
    eprintln!("  {program} 192.168.1.20 opendoor off 3");
}
