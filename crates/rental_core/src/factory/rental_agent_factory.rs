use crate::helper::{generate_id, is_blank, is_valid_email};
use crate::model::rental_agent::RentalAgent;
use crate::model::role::Role;

/// Builds a rental agent when every field passes validation.
///
/// Rejects a blank id or name, a blank password, or a malformed email.
pub fn build_rental_agent(
    agent_id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Option<RentalAgent> {
    if is_blank(agent_id)
        || is_blank(first_name)
        || is_blank(last_name)
        || !is_valid_email(email)
        || is_blank(password)
    {
        return None;
    }

    Some(RentalAgent {
        agent_id: agent_id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
    })
}

/// Same as [`build_rental_agent`], with a freshly generated id.
pub fn build_rental_agent_with_generated_id(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Option<RentalAgent> {
    build_rental_agent(&generate_id(), first_name, last_name, email, password, role)
}
