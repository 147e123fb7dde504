use alke_parking::config::{load_fleet, resolve_data_path, LotConfig};
use alke_parking::{Clock, ParkingLot, SystemClock};
use anyhow::Context;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOT_CONFIG_FILE: &str = "lot.json";
const FLEET_FILE: &str = "fleet.json";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg_path = std::env::var("LOT_CONFIG")
        .ok()
        .map(PathBuf::from)
        .or_else(|| resolve_data_path(LOT_CONFIG_FILE));
    let cfg = match cfg_path {
        Some(path) => {
            tracing::info!("loading lot config from {}", path.display());
            LotConfig::load(&path)?
        }
        None => {
            tracing::warn!("no lot config found; using defaults");
            LotConfig::default()
        }
    };

    let fleet_path = std::env::var("FLEET_PATH")
        .ok()
        .map(PathBuf::from)
        .or_else(|| resolve_data_path(FLEET_FILE))
        .context("fleet file not found; set FLEET_PATH")?;
    let fleet = load_fleet(&fleet_path)?;
    tracing::info!("loaded {} vehicles from {}", fleet.len(), fleet_path.display());

    let mut lot = ParkingLot::with_clock(cfg.capacity, SystemClock);
    tracing::info!("lot open with capacity {}", lot.capacity());

    // Arrivals beyond capacity and repeated plates are expected to bounce.
    let now = lot.clock().now();
    for entry in &fleet {
        if lot.check_in(entry.arriving(now)) {
            println!("Welcome to AlkeParking, {}!", entry.plate);
        } else {
            println!("Sorry, the check-in of {} failed.", entry.plate);
        }
    }

    // The second AC333WF has already left.
    for plate in ["AC333WF", "BC833FF", "AC333WF"] {
        match lot.check_out(plate) {
            Ok(fee) => println!("{plate}: your fee is ${fee}. Come back soon"),
            Err(e) => println!("Sorry, the check-out failed: {e}"),
        }
    }

    println!("Parked vehicles ({}/{}):", lot.occupancy(), lot.capacity());
    for plate in lot.list_vehicles() {
        println!("  {plate}");
    }

    let stats = lot.daily_stats();
    println!(
        "{} vehicles have checked out and we earned ${}",
        stats.vehicles, stats.earnings
    );
    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}
