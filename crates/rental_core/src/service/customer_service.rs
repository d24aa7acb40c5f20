//! Customer use-case service.
//!
//! # Invariants
//! - Contact changes rebuild the customer through `build_customer`, so an
//!   update can never persist values the factory would reject.

use crate::factory::{build_customer, ValidationRejected};
use crate::model::customer::{Customer, CustomerId};
use crate::model::rental_agent::RentalAgentId;
use crate::model::Entity;
use crate::repo::customer_repo::CustomerRepository;
use crate::service::{CrudService, ServiceResult};

/// Service wrapper for customer accounts.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_by_email(&self, email: &str) -> ServiceResult<Option<Customer>> {
        Ok(self.repo.find_by_email(email)?)
    }

    /// Lists customers registered by one rental agent.
    pub fn list_by_rental_agent(&self, agent_id: &RentalAgentId) -> ServiceResult<Vec<Customer>> {
        Ok(self.repo.find_by_rental_agent(agent_id)?)
    }

    /// Replaces email and cell number, keeping every other field.
    ///
    /// Returns `ServiceError::Rejected` when the new values fail validation
    /// and `ServiceError::NotFound` when the customer does not exist.
    pub fn update_contact(
        &self,
        customer_id: CustomerId,
        email: &str,
        cell_no: &str,
    ) -> ServiceResult<Customer> {
        let current = self.require(&customer_id)?;
        let updated = build_customer(
            current.customer_id(),
            current.first_name(),
            current.last_name(),
            email,
            current.password(),
            current.license(),
            cell_no,
            Some(current.rental_agent()),
        )
        .ok_or(ValidationRejected::new(Customer::KIND))?;

        self.update(&updated)
    }
}

impl<R: CustomerRepository> CrudService for CustomerService<R> {
    type Repo = R;

    fn repository(&self) -> &R {
        &self.repo
    }
}
