//! Customer entity.

use crate::factory::{build_customer, ValidationRejected};
use crate::model::rental_agent::RentalAgent;
use crate::model::Entity;
use serde::{Deserialize, Serialize};

pub type CustomerId = i64;

/// Renting customer, registered by exactly one rental agent.
///
/// The agent is held as a snapshot; storage keeps only its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerFields")]
pub struct Customer {
    pub(crate) customer_id: CustomerId,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) license: String,
    pub(crate) cell_no: String,
    pub(crate) rental_agent: RentalAgent,
}

impl Customer {
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn cell_no(&self) -> &str {
        &self.cell_no
    }

    pub fn rental_agent(&self) -> &RentalAgent {
        &self.rental_agent
    }
}

impl Entity for Customer {
    type Id = CustomerId;
    const KIND: &'static str = "customer";

    fn id(&self) -> Self::Id {
        self.customer_id
    }
}

#[derive(Deserialize)]
struct CustomerFields {
    customer_id: CustomerId,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    license: String,
    cell_no: String,
    rental_agent: Option<RentalAgent>,
}

impl TryFrom<CustomerFields> for Customer {
    type Error = ValidationRejected;

    fn try_from(value: CustomerFields) -> Result<Self, Self::Error> {
        build_customer(
            value.customer_id,
            &value.first_name,
            &value.last_name,
            &value.email,
            &value.password,
            &value.license,
            &value.cell_no,
            value.rental_agent.as_ref(),
        )
        .ok_or(ValidationRejected::new(Self::KIND))
    }
}
