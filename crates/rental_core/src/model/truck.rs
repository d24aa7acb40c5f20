//! Truck (fleet vehicle) entity.

use crate::factory::{build_truck, ValidationRejected};
use crate::model::Entity;
use serde::{Deserialize, Serialize};

/// Vehicle identification number.
pub type Vin = String;

/// Rentable fleet truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TruckFields")]
pub struct Truck {
    pub(crate) vin: Vin,
    pub(crate) make: String,
    pub(crate) model: String,
    pub(crate) year: i64,
    /// Load capacity in kilograms.
    pub(crate) capacity: i64,
    pub(crate) available: bool,
}

impl Truck {
    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Whether the truck can currently be rented out.
    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl Entity for Truck {
    type Id = Vin;
    const KIND: &'static str = "truck";

    fn id(&self) -> Self::Id {
        self.vin.clone()
    }
}

#[derive(Deserialize)]
struct TruckFields {
    vin: String,
    make: String,
    model: String,
    year: i64,
    capacity: i64,
    available: bool,
}

impl TryFrom<TruckFields> for Truck {
    type Error = ValidationRejected;

    fn try_from(value: TruckFields) -> Result<Self, Self::Error> {
        build_truck(
            &value.vin,
            &value.make,
            &value.model,
            value.year,
            value.capacity,
            value.available,
        )
        .ok_or(ValidationRejected::new(Self::KIND))
    }
}
