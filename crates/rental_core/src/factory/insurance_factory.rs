use crate::helper::{is_blank, is_int_not_valid};
use crate::model::insurance::{Insurance, InsuranceId};
use crate::model::truck::Truck;
use chrono::NaiveDate;

/// Builds an insurance policy when every field passes validation.
pub fn build_insurance(
    insurance_id: InsuranceId,
    insurance_type: &str,
    insurance_date: Option<NaiveDate>,
    provider: &str,
    policy_number: i64,
    truck: Option<&Truck>,
) -> Option<Insurance> {
    if is_int_not_valid(insurance_id)
        || is_blank(insurance_type)
        || is_blank(provider)
        || is_int_not_valid(policy_number)
    {
        return None;
    }
    let insurance_date = insurance_date?;
    let truck = truck?;

    Some(Insurance {
        insurance_id,
        insurance_type: insurance_type.to_owned(),
        insurance_date,
        provider: provider.to_owned(),
        policy_number,
        truck: truck.clone(),
    })
}
