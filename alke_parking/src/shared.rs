use crate::clock::Clock;
use crate::error::CheckOutError;
use crate::lot::{DailyStats, ParkingLot};
use crate::vehicle::Vehicle;
use parking_lot::Mutex;
use std::sync::Arc;

/// A `ParkingLot` behind a lock, for use from several threads.
///
/// Each call holds the lock for the whole operation, so a check-out's
/// lookup, removal and stats update are never observed half done.
pub struct SharedParkingLot<C: Clock> {
    inner: Arc<Mutex<ParkingLot<C>>>,
}

impl<C: Clock> Clone for SharedParkingLot<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<C: Clock> SharedParkingLot<C> {
    pub fn new(lot: ParkingLot<C>) -> Self {
        Self { inner: Arc::new(Mutex::new(lot)) }
    }

    pub fn check_in(&self, vehicle: Vehicle) -> bool {
        self.inner.lock().check_in(vehicle)
    }

    pub fn check_out(&self, plate: &str) -> Result<u64, CheckOutError> {
        self.inner.lock().check_out(plate)
    }

    pub fn list_vehicles(&self) -> Vec<String> {
        self.inner.lock().list_vehicles().into_iter().map(str::to_owned).collect()
    }

    pub fn daily_stats(&self) -> DailyStats {
        self.inner.lock().daily_stats()
    }

    pub fn occupancy(&self) -> usize {
        self.inner.lock().occupancy()
    }

    /// Run `f` with exclusive access to the lot.
    pub fn with_lot<R>(&self, f: impl FnOnce(&mut ParkingLot<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
