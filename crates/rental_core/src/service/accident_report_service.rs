//! Accident report use-case service.

use crate::factory::{build_accident_report, ValidationRejected};
use crate::model::accident_report::{AccidentReport, AccidentReportId};
use crate::model::customer::CustomerId;
use crate::model::Entity;
use crate::repo::accident_report_repo::AccidentReportRepository;
use crate::service::{CrudService, ServiceResult};

/// Service wrapper for accident reports.
pub struct AccidentReportService<R: AccidentReportRepository> {
    repo: R,
}

impl<R: AccidentReportRepository> AccidentReportService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists a customer's reports, most recent accident first.
    pub fn list_by_customer(&self, customer_id: CustomerId) -> ServiceResult<Vec<AccidentReport>> {
        Ok(self.repo.find_by_customer(customer_id)?)
    }

    /// Records the company response and moves the report to `status`.
    pub fn record_response(
        &self,
        report_id: AccidentReportId,
        response: &str,
        status: &str,
    ) -> ServiceResult<AccidentReport> {
        let current = self.require(&report_id)?;
        let updated = build_accident_report(
            current.report_id(),
            Some(current.accident_date()),
            current.description(),
            current.location(),
            response,
            status,
            Some(current.customer()),
        )
        .ok_or(ValidationRejected::new(AccidentReport::KIND))?;

        self.update(&updated)
    }
}

impl<R: AccidentReportRepository> CrudService for AccidentReportService<R> {
    type Repo = R;

    fn repository(&self) -> &R {
        &self.repo
    }
}
