//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire config, logging, storage and services the way an embedding
//!   backend would.
//! - Run the customer registration scenario and print the results as JSON.

use chrono::NaiveDate;
use log::info;
use rental_core::db::open_db;
use rental_core::{
    build_accident_report, build_customer, build_rental_agent_with_generated_id, init_logging,
    AccidentReportService, CoreConfig, CrudService, CustomerService, RentalAgentService, Role,
    SqliteAccidentReportRepository, SqliteCustomerRepository, SqliteRentalAgentRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rental_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    println!("rental_core ping={}", rental_core::ping());
    println!("rental_core version={}", rental_core::core_version());

    let conn = open_db(&config.db_path)?;
    let agents = RentalAgentService::new(SqliteRentalAgentRepository::try_new(&conn)?);
    let customers = CustomerService::new(SqliteCustomerRepository::try_new(&conn)?);
    let reports = AccidentReportService::new(SqliteAccidentReportRepository::try_new(&conn)?);

    let agent = match agents.find_by_email("desk@swiftwheelz.co.za")? {
        Some(existing) => existing,
        None => {
            let agent = build_rental_agent_with_generated_id(
                "Front",
                "Desk",
                "desk@swiftwheelz.co.za",
                "change-me",
                Role::RentalAgent,
            )
            .ok_or("demo rental agent rejected by validation")?;
            agents.create(&agent)?
        }
    };

    let draft = build_customer(
        1001,
        "Jane",
        "Doe",
        "jane@example.com",
        "secret",
        "LIC123",
        "0711234567",
        Some(&agent),
    )
    .ok_or("demo customer rejected by validation")?;
    let customer = match customers.read(&draft.customer_id())? {
        Some(existing) => existing,
        None => customers.create(&draft)?,
    };
    println!("customer={}", serde_json::to_string(&customer)?);

    let without_agent = build_customer(
        1002,
        "John",
        "Doe",
        "john@example.com",
        "secret",
        "LIC456",
        "0721234567",
        None,
    );
    println!("customer_without_agent_accepted={}", without_agent.is_some());

    let report = build_accident_report(
        1,
        NaiveDate::from_ymd_opt(2024, 5, 3),
        "Side mirror clipped in parking bay",
        "Canal Walk",
        "Logged",
        "OPEN",
        Some(&customer),
    )
    .ok_or("demo accident report rejected by validation")?;
    if reports.read(&1)?.is_none() {
        reports.create(&report)?;
    }
    let reports_for_customer = reports.list_by_customer(customer.customer_id())?;
    println!(
        "accident_reports={}",
        serde_json::to_string(&reports_for_customer)?
    );

    info!(
        "event=cli_run module=cli status=ok customers={} reports={}",
        customers.get_all()?.len(),
        reports_for_customer.len()
    );
    Ok(())
}
