use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckOutError {
    /// Covers plates that never parked and plates that already left.
    #[error("no vehicle with plate {plate} is parked")]
    NotParked { plate: String },
}
