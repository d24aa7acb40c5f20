//! Truck service (maintenance) record entity.

use crate::factory::{build_service_record, ValidationRejected};
use crate::model::insurance::Insurance;
use crate::model::rental_agent::RentalAgent;
use crate::model::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ServiceRecordId = i64;

/// One maintenance job, logged by a rental agent against an insured truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ServiceRecordFields")]
pub struct ServiceRecord {
    pub(crate) service_id: ServiceRecordId,
    pub(crate) service_date: NaiveDate,
    pub(crate) service_type: String,
    pub(crate) description: String,
    /// Cost in cents. Zero for warranty work.
    pub(crate) cost: i64,
    pub(crate) rental_agent: RentalAgent,
    pub(crate) insurance: Insurance,
}

impl ServiceRecord {
    pub fn service_id(&self) -> ServiceRecordId {
        self.service_id
    }

    pub fn service_date(&self) -> NaiveDate {
        self.service_date
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    pub fn rental_agent(&self) -> &RentalAgent {
        &self.rental_agent
    }

    pub fn insurance(&self) -> &Insurance {
        &self.insurance
    }
}

impl Entity for ServiceRecord {
    type Id = ServiceRecordId;
    const KIND: &'static str = "service_record";

    fn id(&self) -> Self::Id {
        self.service_id
    }
}

#[derive(Deserialize)]
struct ServiceRecordFields {
    service_id: ServiceRecordId,
    service_date: Option<NaiveDate>,
    service_type: String,
    description: String,
    cost: i64,
    rental_agent: Option<RentalAgent>,
    insurance: Option<Insurance>,
}

impl TryFrom<ServiceRecordFields> for ServiceRecord {
    type Error = ValidationRejected;

    fn try_from(value: ServiceRecordFields) -> Result<Self, Self::Error> {
        build_service_record(
            value.service_id,
            value.service_date,
            &value.service_type,
            &value.description,
            value.cost,
            value.rental_agent.as_ref(),
            value.insurance.as_ref(),
        )
        .ok_or(ValidationRejected::new(Self::KIND))
    }
}
