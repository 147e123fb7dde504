use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes covered by the flat base rate.
pub const BASE_PERIOD_MIN: u32 = 120;
/// Length of each extra billing block after the base period.
pub const BLOCK_MIN: u32 = 15;
/// Discounted fee is this percentage of the full fee.
pub const DISCOUNT_PERCENT: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Motorcycle,
    Car,
    MiniBus,
    Bus,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::Motorcycle,
        VehicleClass::Car,
        VehicleClass::MiniBus,
        VehicleClass::Bus,
    ];

    /// Base rate charged for the first two hours.
    pub const fn rate(self) -> u32 {
        match self {
            VehicleClass::Motorcycle => 15,
            VehicleClass::Car => 20,
            VehicleClass::MiniBus => 25,
            VehicleClass::Bus => 30,
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleClass::Motorcycle => "motorcycle",
            VehicleClass::Car => "car",
            VehicleClass::MiniBus => "mini bus",
            VehicleClass::Bus => "bus",
        };
        f.write_str(name)
    }
}

/// Checkout fee for a stay of `parked_minutes`.
///
/// Past the base period every 15 minutes adds a quarter of the base rate
/// (integer division). Partial blocks round half away from zero, so 7 extra
/// minutes bill nothing and 8 bill a full block. A discount keeps 85% of the
/// fee, truncated.
pub fn compute_fee(class: VehicleClass, parked_minutes: u32, has_discount: bool) -> u64 {
    // u64 so that stays up to u32::MAX minutes cannot overflow
    let rate = u64::from(class.rate());
    let total = if parked_minutes <= BASE_PERIOD_MIN {
        rate
    } else {
        let extra = (parked_minutes - BASE_PERIOD_MIN) as f64;
        let blocks = (extra / BLOCK_MIN as f64).round() as u64;
        rate + blocks * (rate / 4)
    };

    if has_discount {
        // floor(total * 0.85) without float drift
        total * u64::from(DISCOUNT_PERCENT) / 100
    } else {
        total
    }
}
