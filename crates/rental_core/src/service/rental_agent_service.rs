//! Rental agent use-case service.

use crate::model::rental_agent::RentalAgent;
use crate::model::role::Role;
use crate::repo::rental_agent_repo::RentalAgentRepository;
use crate::service::{CrudService, ServiceResult};

/// Service wrapper for rental agent accounts.
pub struct RentalAgentService<R: RentalAgentRepository> {
    repo: R,
}

impl<R: RentalAgentRepository> RentalAgentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_by_email(&self, email: &str) -> ServiceResult<Option<RentalAgent>> {
        Ok(self.repo.find_by_email(email)?)
    }

    /// Lists agents holding `role`, ordered by id.
    pub fn list_by_role(&self, role: Role) -> ServiceResult<Vec<RentalAgent>> {
        Ok(self.repo.find_by_role(role)?)
    }
}

impl<R: RentalAgentRepository> CrudService for RentalAgentService<R> {
    type Repo = R;

    fn repository(&self) -> &R {
        &self.repo
    }
}
