//! In-memory parking lot: admission control, time-based fees and a running
//! tally of the day's checkouts.

pub mod clock;
pub mod config;
pub mod error;
pub mod fee;
pub mod lot;
pub mod shared;
pub mod vehicle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FleetEntry, LotConfig};
pub use error::CheckOutError;
pub use fee::{compute_fee, VehicleClass};
pub use lot::{DailyStats, LotEvent, ParkingLot, DEFAULT_CAPACITY};
pub use shared::SharedParkingLot;
pub use vehicle::Vehicle;
