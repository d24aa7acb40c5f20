//! Smart constructors for every domain entity.
//!
//! # Responsibility
//! - Validate raw field values and relationship presence.
//! - Construct the entity only when every check passes.
//!
//! # Invariants
//! - A factory returns either a fully valid entity or `None`; never a partial
//!   value and never a reason.
//! - Built entities carry the inputs verbatim (no trimming or normalization).
//! - Factories have no side effects: no persistence, no logging.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod accident_report_factory;
mod customer_factory;
mod insurance_factory;
mod rental_agent_factory;
mod service_record_factory;
mod truck_factory;

pub use accident_report_factory::build_accident_report;
pub use customer_factory::build_customer;
pub use insurance_factory::build_insurance;
pub use rental_agent_factory::{build_rental_agent, build_rental_agent_with_generated_id};
pub use service_record_factory::build_service_record;
pub use truck_factory::build_truck;

/// A factory declined to build an entity.
///
/// Only carries which entity kind was rejected. Used where an absent
/// factory result has to cross a `Result` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRejected {
    kind: &'static str,
}

impl ValidationRejected {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }

    /// Entity kind whose construction was rejected.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Display for ValidationRejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fields rejected by validation", self.kind)
    }
}

impl Error for ValidationRejected {}
