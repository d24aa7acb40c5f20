//! Core domain logic for the truck rental backend.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod factory;
pub mod helper;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use factory::{
    build_accident_report, build_customer, build_insurance, build_rental_agent,
    build_rental_agent_with_generated_id, build_service_record, build_truck, ValidationRejected,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::accident_report::{AccidentReport, AccidentReportId};
pub use model::customer::{Customer, CustomerId};
pub use model::insurance::{Insurance, InsuranceId};
pub use model::rental_agent::{RentalAgent, RentalAgentId};
pub use model::role::Role;
pub use model::service_record::{ServiceRecord, ServiceRecordId};
pub use model::truck::{Truck, Vin};
pub use model::Entity;
pub use repo::accident_report_repo::{AccidentReportRepository, SqliteAccidentReportRepository};
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use repo::insurance_repo::{InsuranceRepository, SqliteInsuranceRepository};
pub use repo::rental_agent_repo::{RentalAgentRepository, SqliteRentalAgentRepository};
pub use repo::service_record_repo::{ServiceRecordRepository, SqliteServiceRecordRepository};
pub use repo::truck_repo::{SqliteTruckRepository, TruckRepository};
pub use repo::{CrudRepository, RepoError, RepoResult};
pub use service::accident_report_service::AccidentReportService;
pub use service::customer_service::CustomerService;
pub use service::insurance_service::InsuranceService;
pub use service::rental_agent_service::RentalAgentService;
pub use service::service_record_service::ServiceRecordService;
pub use service::truck_service::TruckService;
pub use service::{CrudService, ServiceError, ServiceResult};

/// Minimal health-check API for embedding binaries.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
