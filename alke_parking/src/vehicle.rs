use crate::fee::VehicleClass;
use chrono::{DateTime, Utc};
use std::hash::{Hash, Hasher};

/// A vehicle as presented at the gate. Identity is the plate alone.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub plate: String,
    pub class: VehicleClass,
    pub check_in_time: DateTime<Utc>,
    pub discount_code: Option<String>,
}

impl Vehicle {
    pub fn new(
        plate: impl Into<String>,
        class: VehicleClass,
        check_in_time: DateTime<Utc>,
    ) -> Self {
        Self {
            plate: plate.into(),
            class,
            check_in_time,
            discount_code: None,
        }
    }

    pub fn with_discount_code(mut self, code: impl Into<String>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    /// Only presence matters; the code itself is not validated.
    pub fn has_discount(&self) -> bool {
        self.discount_code.is_some()
    }

    /// Whole minutes parked as of `now`. Zero if `now` is before check-in.
    pub fn parked_minutes(&self, now: DateTime<Utc>) -> u32 {
        let minutes = (now - self.check_in_time).num_minutes().max(0);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}
