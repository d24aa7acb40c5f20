//! Truck use-case service.

use crate::factory::{build_truck, ValidationRejected};
use crate::model::truck::{Truck, Vin};
use crate::model::Entity;
use crate::repo::truck_repo::TruckRepository;
use crate::service::{CrudService, ServiceResult};

/// Service wrapper for the truck fleet.
pub struct TruckService<R: TruckRepository> {
    repo: R,
}

impl<R: TruckRepository> TruckService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists trucks that can currently be rented.
    pub fn list_available(&self) -> ServiceResult<Vec<Truck>> {
        Ok(self.repo.find_available()?)
    }

    /// Marks a truck as rented out (`false`) or returned (`true`).
    pub fn set_availability(&self, vin: &Vin, available: bool) -> ServiceResult<Truck> {
        let current = self.require(vin)?;
        let updated = build_truck(
            current.vin(),
            current.make(),
            current.model(),
            current.year(),
            current.capacity(),
            available,
        )
        .ok_or(ValidationRejected::new(Truck::KIND))?;

        self.update(&updated)
    }
}

impl<R: TruckRepository> CrudService for TruckService<R> {
    type Repo = R;

    fn repository(&self) -> &R {
        &self.repo
    }
}
