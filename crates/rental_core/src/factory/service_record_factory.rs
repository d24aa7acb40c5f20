use crate::helper::{is_blank, is_int_not_valid};
use crate::model::insurance::Insurance;
use crate::model::rental_agent::RentalAgent;
use crate::model::service_record::{ServiceRecord, ServiceRecordId};
use chrono::NaiveDate;

/// Builds a service record when every field passes validation.
///
/// `cost` is in cents and may be zero; it must not be negative.
pub fn build_service_record(
    service_id: ServiceRecordId,
    service_date: Option<NaiveDate>,
    service_type: &str,
    description: &str,
    cost: i64,
    rental_agent: Option<&RentalAgent>,
    insurance: Option<&Insurance>,
) -> Option<ServiceRecord> {
    if is_int_not_valid(service_id) || is_blank(service_type) || is_blank(description) || cost < 0
    {
        return None;
    }
    let service_date = service_date?;
    let rental_agent = rental_agent?;
    let insurance = insurance?;

    Some(ServiceRecord {
        service_id,
        service_date,
        service_type: service_type.to_owned(),
        description: description.to_owned(),
        cost,
        rental_agent: rental_agent.clone(),
        insurance: insurance.clone(),
    })
}
