//! Accident report entity.

use crate::factory::{build_accident_report, ValidationRejected};
use crate::model::customer::Customer;
use crate::model::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type AccidentReportId = i64;

/// Accident filed by (or on behalf of) a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccidentReportFields")]
pub struct AccidentReport {
    pub(crate) report_id: AccidentReportId,
    pub(crate) accident_date: NaiveDate,
    pub(crate) description: String,
    pub(crate) location: String,
    /// Company response recorded against the report.
    pub(crate) response: String,
    pub(crate) status: String,
    pub(crate) customer: Customer,
}

impl AccidentReport {
    pub fn report_id(&self) -> AccidentReportId {
        self.report_id
    }

    pub fn accident_date(&self) -> NaiveDate {
        self.accident_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }
}

impl Entity for AccidentReport {
    type Id = AccidentReportId;
    const KIND: &'static str = "accident_report";

    fn id(&self) -> Self::Id {
        self.report_id
    }
}

#[derive(Deserialize)]
struct AccidentReportFields {
    report_id: AccidentReportId,
    accident_date: Option<NaiveDate>,
    description: String,
    location: String,
    response: String,
    status: String,
    customer: Option<Customer>,
}

impl TryFrom<AccidentReportFields> for AccidentReport {
    type Error = ValidationRejected;

    fn try_from(value: AccidentReportFields) -> Result<Self, Self::Error> {
        build_accident_report(
            value.report_id,
            value.accident_date,
            &value.description,
            &value.location,
            &value.response,
            &value.status,
            value.customer.as_ref(),
        )
        .ok_or(ValidationRejected::new(Self::KIND))
    }
}
