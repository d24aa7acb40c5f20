//! Rental agent (staff account) entity.

use crate::factory::{build_rental_agent, ValidationRejected};
use crate::model::role::Role;
use crate::model::Entity;
use serde::{Deserialize, Serialize};

/// Text identifier for rental agents.
pub type RentalAgentId = String;

/// Staff member who manages customers and service records.
///
/// Built only through `factory::build_rental_agent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RentalAgentFields")]
pub struct RentalAgent {
    pub(crate) agent_id: RentalAgentId,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) role: Role,
}

impl RentalAgent {
    pub fn agent_id(&self) -> &str {
        &self.agent_id
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

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Entity for RentalAgent {
    type Id = RentalAgentId;
    const KIND: &'static str = "rental_agent";

    fn id(&self) -> Self::Id {
        self.agent_id.clone()
    }
}

#[derive(Deserialize)]
struct RentalAgentFields {
    agent_id: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: Role,
}

impl TryFrom<RentalAgentFields> for RentalAgent {
    type Error = ValidationRejected;

    fn try_from(value: RentalAgentFields) -> Result<Self, Self::Error> {
        build_rental_agent(
            &value.agent_id,
            &value.first_name,
            &value.last_name,
            &value.email,
            &value.password,
            value.role,
        )
        .ok_or(ValidationRejected::new(Self::KIND))
    }
}
