//! Staff roles.

use serde::{Deserialize, Serialize};

/// Closed set of staff roles a rental agent account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    RentalAgent,
    Mechanic,
    HelpDesk,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::RentalAgent, Role::Mechanic, Role::HelpDesk];

    /// Stable tag used in storage and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::RentalAgent => "RENTAL_AGENT",
            Self::Mechanic => "MECHANIC",
            Self::HelpDesk => "HELP_DESK",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::RentalAgent => "Rental Agent",
            Self::Mechanic => "Mechanic",
            Self::HelpDesk => "Help Desk",
        }
    }

    /// Parses a stored tag back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}
