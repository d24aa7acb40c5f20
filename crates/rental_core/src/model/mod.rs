//! Truck rental domain model.
//!
//! # Responsibility
//! - Define the canonical entities shared by factories, repositories and
//!   services.
//! - Expose a uniform identity contract (`Entity`) for generic persistence.
//!
//! # Invariants
//! - Entity fields are private; values only come out of `crate::factory`.
//! - Entities are immutable once built. Changes produce a new value.
//! - Related entities are held as snapshots; storage keeps only the key.

use std::fmt::{Debug, Display};

pub mod accident_report;
pub mod customer;
pub mod insurance;
pub mod rental_agent;
pub mod role;
pub mod service_record;
pub mod truck;

/// Identity contract shared by every persisted entity.
pub trait Entity: Clone {
    /// Primary key type.
    type Id: Clone + Debug + Display + PartialEq;

    /// Stable lowercase entity name used in errors and log events.
    const KIND: &'static str;

    /// Returns this entity's primary key.
    fn id(&self) -> Self::Id;
}
