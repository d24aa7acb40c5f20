//! Service record use-case service.

use crate::model::rental_agent::RentalAgentId;
use crate::model::service_record::ServiceRecord;
use crate::repo::service_record_repo::ServiceRecordRepository;
use crate::service::{CrudService, ServiceError, ServiceResult};
use log::warn;

/// Service wrapper for truck maintenance records.
pub struct ServiceRecordService<R: ServiceRecordRepository> {
    repo: R,
}

impl<R: ServiceRecordRepository> ServiceRecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_by_rental_agent(
        &self,
        agent_id: &RentalAgentId,
    ) -> ServiceResult<Vec<ServiceRecord>> {
        Ok(self.repo.find_by_rental_agent(agent_id)?)
    }

    /// Total cost in cents across all records logged by one agent.
    ///
    /// Returns `ServiceError::Overflow` when the sum exceeds `i64::MAX`.
    pub fn total_cost_for_agent(&self, agent_id: &RentalAgentId) -> ServiceResult<i64> {
        let records = self.repo.find_by_rental_agent(agent_id)?;
        records
            .iter()
            .map(ServiceRecord::cost)
            .try_fold(0i64, i64::checked_add)
            .ok_or_else(|| {
                warn!(
                    "event=service_cost_total module=service status=overflow agent_id={agent_id}"
                );
                ServiceError::Overflow {
                    operation: "total_cost_for_agent",
                    key: agent_id.clone(),
                }
            })
    }
}

impl<R: ServiceRecordRepository> CrudService for ServiceRecordService<R> {
    type Repo = R;

    fn repository(&self) -> &R {
        &self.repo
    }
}
