use crate::helper::{is_blank, is_int_not_valid};
use crate::model::accident_report::{AccidentReport, AccidentReportId};
use crate::model::customer::Customer;
use chrono::NaiveDate;

/// Builds an accident report when every field passes validation.
///
/// Rejects a non-positive id, a missing date, any blank text field, or a
/// missing customer.
pub fn build_accident_report(
    report_id: AccidentReportId,
    accident_date: Option<NaiveDate>,
    description: &str,
    location: &str,
    response: &str,
    status: &str,
    customer: Option<&Customer>,
) -> Option<AccidentReport> {
    if is_int_not_valid(report_id)
        || is_blank(description)
        || is_blank(location)
        || is_blank(response)
        || is_blank(status)
    {
        return None;
    }
    let accident_date = accident_date?;
    let customer = customer?;

    Some(AccidentReport {
        report_id,
        accident_date,
        description: description.to_owned(),
        location: location.to_owned(),
        response: response.to_owned(),
        status: status.to_owned(),
        customer: customer.clone(),
    })
}
