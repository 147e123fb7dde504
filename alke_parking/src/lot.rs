use crate::clock::{Clock, SystemClock};
use crate::error::CheckOutError;
use crate::fee::compute_fee;
use crate::vehicle::Vehicle;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

pub const DEFAULT_CAPACITY: usize = 20;

/// Running totals since the lot opened. Never reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub earnings: u64,
    pub vehicles: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LotEvent {
    CheckedIn { plate: String },
    CheckInRejected { plate: String },
    CheckedOut { plate: String, fee: u64 },
    CheckOutFailed { plate: String },
}

type Listener = Box<dyn FnMut(&LotEvent) + Send>;

pub struct ParkingLot<C: Clock = SystemClock> {
    parked: HashMap<String, Vehicle>,
    // plates in check-in order, for listing
    arrivals: Vec<String>,
    capacity: usize,
    stats: DailyStats,
    clock: C,
    listeners: Vec<Listener>,
}

impl ParkingLot<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_CAPACITY, SystemClock)
    }
}

impl Default for ParkingLot<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ParkingLot<C> {
    pub fn with_clock(capacity: usize, clock: C) -> Self {
        Self {
            parked: HashMap::with_capacity(capacity),
            arrivals: Vec::with_capacity(capacity),
            capacity,
            stats: DailyStats::default(),
            clock,
            listeners: Vec::new(),
        }
    }

    /// Register a callback fired for every check-in and check-out outcome.
    pub fn subscribe(&mut self, listener: impl FnMut(&LotEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Admit `vehicle` if there is room and its plate is not already parked.
    /// A full lot and a duplicate plate are reported the same way.
    pub fn check_in(&mut self, vehicle: Vehicle) -> bool {
        if self.is_full() || self.parked.contains_key(&vehicle.plate) {
            warn!(
                plate = %vehicle.plate,
                occupancy = self.parked.len(),
                capacity = self.capacity,
                "check-in rejected"
            );
            self.notify(LotEvent::CheckInRejected { plate: vehicle.plate });
            return false;
        }

        info!(plate = %vehicle.plate, class = %vehicle.class, "vehicle checked in");
        let plate = vehicle.plate.clone();
        self.arrivals.push(plate.clone());
        self.parked.insert(plate.clone(), vehicle);
        self.notify(LotEvent::CheckedIn { plate });
        true
    }

    /// Release the vehicle with exactly this plate and bill it.
    pub fn check_out(&mut self, plate: &str) -> Result<u64, CheckOutError> {
        let Some(vehicle) = self.parked.remove(plate) else {
            warn!(plate, "check-out failed: not parked");
            self.notify(LotEvent::CheckOutFailed { plate: plate.to_string() });
            return Err(CheckOutError::NotParked { plate: plate.to_string() });
        };
        self.arrivals.retain(|p| p != plate);

        let minutes = vehicle.parked_minutes(self.clock.now());
        let fee = compute_fee(vehicle.class, minutes, vehicle.has_discount());
        self.stats.earnings += fee;
        self.stats.vehicles += 1;

        info!(
            plate,
            class = %vehicle.class,
            minutes,
            discount = vehicle.has_discount(),
            fee,
            "vehicle checked out"
        );
        self.notify(LotEvent::CheckedOut { plate: vehicle.plate, fee });
        Ok(fee)
    }

    /// Plates currently parked, in check-in order.
    pub fn list_vehicles(&self) -> Vec<&str> {
        self.arrivals.iter().map(String::as_str).collect()
    }

    pub fn daily_stats(&self) -> DailyStats {
        self.stats
    }

    pub fn vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.parked.get(plate)
    }

    pub fn is_parked(&self, plate: &str) -> bool {
        self.parked.contains_key(plate)
    }

    pub fn occupancy(&self) -> usize {
        self.parked.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.parked.len() >= self.capacity
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn notify(&mut self, event: LotEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
