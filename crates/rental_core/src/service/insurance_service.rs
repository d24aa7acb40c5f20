//! Insurance use-case service.

use crate::model::insurance::Insurance;
use crate::model::truck::Vin;
use crate::repo::insurance_repo::InsuranceRepository;
use crate::service::{CrudService, ServiceResult};

/// Service wrapper for insurance policies.
pub struct InsuranceService<R: InsuranceRepository> {
    repo: R,
}

impl<R: InsuranceRepository> InsuranceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_by_truck(&self, vin: &Vin) -> ServiceResult<Vec<Insurance>> {
        Ok(self.repo.find_by_truck(vin)?)
    }
}

impl<R: InsuranceRepository> CrudService for InsuranceService<R> {
    type Repo = R;

    fn repository(&self) -> &R {
        &self.repo
    }
}
