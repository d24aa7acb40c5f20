use chrono::NaiveDate;
use rental_core::db::migrations::latest_version;
use rental_core::db::open_db_in_memory;
use rental_core::{
    build_accident_report, build_customer, build_insurance, build_rental_agent,
    build_service_record, build_truck, AccidentReportRepository, CrudRepository, Customer,
    CustomerRepository, InsuranceRepository, RentalAgent, RentalAgentRepository, RepoError, Role,
    ServiceRecordRepository, SqliteAccidentReportRepository, SqliteCustomerRepository,
    SqliteInsuranceRepository, SqliteRentalAgentRepository, SqliteServiceRecordRepository,
    SqliteTruckRepository, Truck, TruckRepository,
};
use rusqlite::Connection;

fn agent(id: &str, email: &str, role: Role) -> RentalAgent {
    build_rental_agent(id, "Thabo", "Mokoena", email, "agent-pass", role).unwrap()
}

fn customer(id: i64, email: &str, agent: &RentalAgent) -> Customer {
    build_customer(
        id,
        "Jane",
        "Doe",
        email,
        "secret",
        "LIC123",
        "0711234567",
        Some(agent),
    )
    .unwrap()
}

fn truck(vin: &str, available: bool) -> Truck {
    build_truck(vin, "Isuzu", "NPR 400", 2021, 4_500, available).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[test]
fn rental_agent_save_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRentalAgentRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&agent("agent-1", "thabo@swiftwheelz.co.za", Role::RentalAgent))
        .unwrap();
    let loaded = repo.find_by_id(&"agent-1".to_string()).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert!(repo.exists_by_id(&"agent-1".to_string()).unwrap());
    assert!(repo.find_by_id(&"missing".to_string()).unwrap().is_none());
}

#[test]
fn save_overwrites_existing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRentalAgentRepository::try_new(&conn).unwrap();

    repo.save(&agent("agent-1", "old@swiftwheelz.co.za", Role::RentalAgent))
        .unwrap();
    repo.save(&agent("agent-1", "new@swiftwheelz.co.za", Role::Admin))
        .unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].email(), "new@swiftwheelz.co.za");
    assert_eq!(all[0].role(), Role::Admin);
}

#[test]
fn rental_agent_lookups_by_email_and_role() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRentalAgentRepository::try_new(&conn).unwrap();

    repo.save(&agent("b", "b@swiftwheelz.co.za", Role::Mechanic)).unwrap();
    repo.save(&agent("a", "a@swiftwheelz.co.za", Role::Mechanic)).unwrap();
    repo.save(&agent("c", "c@swiftwheelz.co.za", Role::HelpDesk)).unwrap();

    let found = repo.find_by_email("c@swiftwheelz.co.za").unwrap().unwrap();
    assert_eq!(found.agent_id(), "c");
    assert!(repo.find_by_email("nobody@swiftwheelz.co.za").unwrap().is_none());

    let mechanics: Vec<String> = repo
        .find_by_role(Role::Mechanic)
        .unwrap()
        .iter()
        .map(|agent| agent.agent_id().to_string())
        .collect();
    assert_eq!(mechanics, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn customer_roundtrip_reattaches_agent_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let agents = SqliteRentalAgentRepository::try_new(&conn).unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();

    let agent = agents
        .save(&agent("agent-1", "thabo@swiftwheelz.co.za", Role::RentalAgent))
        .unwrap();
    let jane = customers
        .save(&customer(1001, "jane@example.com", &agent))
        .unwrap();

    let loaded = customers.find_by_id(&1001).unwrap().unwrap();
    assert_eq!(loaded, jane);
    assert_eq!(loaded.rental_agent(), &agent);

    let by_email = customers.find_by_email("jane@example.com").unwrap().unwrap();
    assert_eq!(by_email.customer_id(), 1001);
    let by_agent = customers
        .find_by_rental_agent(&"agent-1".to_string())
        .unwrap();
    assert_eq!(by_agent.len(), 1);
}

#[test]
fn find_all_is_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let agents = SqliteRentalAgentRepository::try_new(&conn).unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();
    let agent = agents
        .save(&agent("agent-1", "thabo@swiftwheelz.co.za", Role::RentalAgent))
        .unwrap();

    for id in [30, 10, 20] {
        customers
            .save(&customer(id, &format!("c{id}@example.com"), &agent))
            .unwrap();
    }

    let ids: Vec<i64> = customers
        .find_all()
        .unwrap()
        .iter()
        .map(Customer::customer_id)
        .collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn saving_customer_with_unsaved_agent_violates_constraint() {
    let conn = open_db_in_memory().unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();
    let ghost = agent("ghost", "ghost@swiftwheelz.co.za", Role::RentalAgent);

    let err = customers
        .save(&customer(1001, "jane@example.com", &ghost))
        .unwrap_err();
    assert!(matches!(err, RepoError::ConstraintViolation(_)));
}

#[test]
fn deleting_referenced_agent_violates_constraint() {
    let conn = open_db_in_memory().unwrap();
    let agents = SqliteRentalAgentRepository::try_new(&conn).unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();
    let agent = agents
        .save(&agent("agent-1", "thabo@swiftwheelz.co.za", Role::RentalAgent))
        .unwrap();
    customers
        .save(&customer(1001, "jane@example.com", &agent))
        .unwrap();

    let err = agents.delete_by_id(&"agent-1".to_string()).unwrap_err();
    assert!(matches!(err, RepoError::ConstraintViolation(_)));

    customers.delete_by_id(&1001).unwrap();
    agents.delete_by_id(&"agent-1".to_string()).unwrap();
    assert!(agents.find_all().unwrap().is_empty());
}

#[test]
fn delete_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();

    let err = customers.delete_by_id(&42).unwrap_err();
    match err {
        RepoError::NotFound { entity, id } => {
            assert_eq!(entity, "customer");
            assert_eq!(id, "42");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn truck_availability_filter() {
    let conn = open_db_in_memory().unwrap();
    let trucks = SqliteTruckRepository::try_new(&conn).unwrap();

    trucks.save(&truck("VIN-B", true)).unwrap();
    trucks.save(&truck("VIN-A", false)).unwrap();
    trucks.save(&truck("VIN-C", true)).unwrap();

    let available: Vec<String> = trucks
        .find_available()
        .unwrap()
        .iter()
        .map(|truck| truck.vin().to_string())
        .collect();
    assert_eq!(available, vec!["VIN-B".to_string(), "VIN-C".to_string()]);
}

#[test]
fn insurance_service_record_and_accident_report_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let agents = SqliteRentalAgentRepository::try_new(&conn).unwrap();
    let customers = SqliteCustomerRepository::try_new(&conn).unwrap();
    let trucks = SqliteTruckRepository::try_new(&conn).unwrap();
    let insurances = SqliteInsuranceRepository::try_new(&conn).unwrap();
    let records = SqliteServiceRecordRepository::try_new(&conn).unwrap();
    let reports = SqliteAccidentReportRepository::try_new(&conn).unwrap();

    let agent = agents
        .save(&agent("agent-1", "thabo@swiftwheelz.co.za", Role::Mechanic))
        .unwrap();
    let jane = customers
        .save(&customer(1001, "jane@example.com", &agent))
        .unwrap();
    let truck = trucks.save(&truck("VIN-1", true)).unwrap();

    let insurance = build_insurance(
        5,
        "Comprehensive",
        date(2024, 1, 15),
        "Santam",
        556677,
        Some(&truck),
    )
    .unwrap();
    insurances.save(&insurance).unwrap();
    assert_eq!(insurances.find_by_id(&5).unwrap().unwrap(), insurance);
    assert_eq!(insurances.find_by_truck(&"VIN-1".to_string()).unwrap().len(), 1);

    let record = build_service_record(
        9,
        date(2024, 3, 2),
        "Oil change",
        "15W-40, new filter",
        125_000,
        Some(&agent),
        Some(&insurance),
    )
    .unwrap();
    records.save(&record).unwrap();
    assert_eq!(records.find_by_id(&9).unwrap().unwrap(), record);
    assert_eq!(
        records
            .find_by_rental_agent(&"agent-1".to_string())
            .unwrap(),
        vec![record]
    );

    let older = build_accident_report(
        1,
        date(2023, 11, 20),
        "Scraped mirror",
        "Bellville",
        "Pending",
        "OPEN",
        Some(&jane),
    )
    .unwrap();
    let newer = build_accident_report(
        2,
        date(2024, 4, 1),
        "Cracked windscreen",
        "Stellenbosch",
        "Pending",
        "OPEN",
        Some(&jane),
    )
    .unwrap();
    reports.save(&older).unwrap();
    reports.save(&newer).unwrap();

    let for_jane = reports.find_by_customer(1001).unwrap();
    assert_eq!(for_jane, vec![newer, older]);
}

#[test]
fn invalid_persisted_row_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    let agents = SqliteRentalAgentRepository::try_new(&conn).unwrap();
    agents
        .save(&agent("agent-1", "thabo@swiftwheelz.co.za", Role::RentalAgent))
        .unwrap();

    conn.execute(
        "UPDATE rental_agents SET email = 'broken' WHERE agent_id = 'agent-1';",
        [],
    )
    .unwrap();

    let err = agents.find_by_id(&"agent-1".to_string()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn invalid_persisted_date_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    let trucks = SqliteTruckRepository::try_new(&conn).unwrap();
    let insurances = SqliteInsuranceRepository::try_new(&conn).unwrap();
    let truck = trucks.save(&truck("VIN-1", true)).unwrap();
    let insurance =
        build_insurance(5, "Comprehensive", date(2024, 1, 15), "Santam", 1, Some(&truck)).unwrap();
    insurances.save(&insurance).unwrap();

    conn.execute(
        "UPDATE insurances SET insurance_date = '15/01/2024' WHERE insurance_id = 5;",
        [],
    )
    .unwrap();

    let err = insurances.find_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteCustomerRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteTruckRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("trucks"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE trucks (
            vin TEXT PRIMARY KEY NOT NULL,
            make TEXT NOT NULL,
            model TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteTruckRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "trucks",
            column: "year"
        })
    ));
}
