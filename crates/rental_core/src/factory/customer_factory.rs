use crate::helper::{is_blank, is_int_not_valid, is_valid_email};
use crate::model::customer::{Customer, CustomerId};
use crate::model::rental_agent::RentalAgent;

/// Builds a customer when every field passes validation.
///
/// Rejects a non-positive id, any blank text field, a malformed email, or a
/// missing rental agent.
#[allow(clippy::too_many_arguments)]
pub fn build_customer(
    customer_id: CustomerId,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    license: &str,
    cell_no: &str,
    rental_agent: Option<&RentalAgent>,
) -> Option<Customer> {
    if is_int_not_valid(customer_id)
        || is_blank(first_name)
        || is_blank(last_name)
        || is_blank(password)
        || is_blank(license)
        || !is_valid_email(email)
        || is_blank(cell_no)
    {
        return None;
    }
    let rental_agent = rental_agent?;

    Some(Customer {
        customer_id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        license: license.to_owned(),
        cell_no: cell_no.to_owned(),
        rental_agent: rental_agent.clone(),
    })
}
