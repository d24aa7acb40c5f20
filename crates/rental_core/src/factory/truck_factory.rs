use crate::helper::{is_blank, is_int_not_valid};
use crate::model::truck::Truck;

/// Builds a truck when every field passes validation.
///
/// Rejects a blank VIN, make or model, and a non-positive year or capacity.
pub fn build_truck(
    vin: &str,
    make: &str,
    model: &str,
    year: i64,
    capacity: i64,
    available: bool,
) -> Option<Truck> {
    if is_blank(vin)
        || is_blank(make)
        || is_blank(model)
        || is_int_not_valid(year)
        || is_int_not_valid(capacity)
    {
        return None;
    }

    Some(Truck {
        vin: vin.to_owned(),
        make: make.to_owned(),
        model: model.to_owned(),
        year,
        capacity,
        available,
    })
}
