//! Insurance policy entity.

use crate::factory::{build_insurance, ValidationRejected};
use crate::model::truck::Truck;
use crate::model::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type InsuranceId = i64;

/// Insurance policy covering one truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InsuranceFields")]
pub struct Insurance {
    pub(crate) insurance_id: InsuranceId,
    pub(crate) insurance_type: String,
    pub(crate) insurance_date: NaiveDate,
    pub(crate) provider: String,
    pub(crate) policy_number: i64,
    pub(crate) truck: Truck,
}

impl Insurance {
    pub fn insurance_id(&self) -> InsuranceId {
        self.insurance_id
    }

    pub fn insurance_type(&self) -> &str {
        &self.insurance_type
    }

    pub fn insurance_date(&self) -> NaiveDate {
        self.insurance_date
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn policy_number(&self) -> i64 {
        self.policy_number
    }

    pub fn truck(&self) -> &Truck {
        &self.truck
    }
}

impl Entity for Insurance {
    type Id = InsuranceId;
    const KIND: &'static str = "insurance";

    fn id(&self) -> Self::Id {
        self.insurance_id
    }
}

#[derive(Deserialize)]
struct InsuranceFields {
    insurance_id: InsuranceId,
    insurance_type: String,
    insurance_date: Option<NaiveDate>,
    provider: String,
    policy_number: i64,
    truck: Option<Truck>,
}

impl TryFrom<InsuranceFields> for Insurance {
    type Error = ValidationRejected;

    fn try_from(value: InsuranceFields) -> Result<Self, Self::Error> {
        build_insurance(
            value.insurance_id,
            &value.insurance_type,
            value.insurance_date,
            &value.provider,
            value.policy_number,
            value.truck.as_ref(),
        )
        .ok_or(ValidationRejected::new(Self::KIND))
    }
}
