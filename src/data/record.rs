//! Listing record type.

use serde::{Deserialize, Serialize};

/// One car listing: model year and asking price.
///
/// Any other fields present in the source object (make, mileage, ...) are
/// ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub year: i32,
    pub price: f64,
}

impl ListingRecord {
    pub fn new(year: i32, price: f64) -> Self {
        Self { year, price }
    }
}
