use chrono::NaiveDate;
use rental_core::{
    build_accident_report, build_customer, build_insurance, build_rental_agent,
    build_service_record, build_truck, Customer, RentalAgent, Role, Truck,
};

fn agent() -> RentalAgent {
    build_rental_agent(
        "agent-001",
        "Thabo",
        "Mokoena",
        "thabo@swiftwheelz.co.za",
        "agent-pass",
        Role::RentalAgent,
    )
    .expect("fixture agent should be valid")
}

fn jane(agent: Option<&RentalAgent>) -> Option<Customer> {
    build_customer(
        1001,
        "Jane",
        "Doe",
        "jane@example.com",
        "secret",
        "LIC123",
        "0711234567",
        agent,
    )
}

fn truck() -> Truck {
    build_truck("1FUJGLDR5CLBP8834", "Freightliner", "Cascadia", 2019, 18_000, true)
        .expect("fixture truck should be valid")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn customer_end_to_end_scenario() {
    let agent = agent();

    let customer = jane(Some(&agent)).expect("valid inputs should build a customer");
    assert_eq!(customer.customer_id(), 1001);
    assert_eq!(customer.first_name(), "Jane");
    assert_eq!(customer.last_name(), "Doe");
    assert_eq!(customer.email(), "jane@example.com");
    assert_eq!(customer.password(), "secret");
    assert_eq!(customer.license(), "LIC123");
    assert_eq!(customer.cell_no(), "0711234567");
    assert_eq!(customer.rental_agent(), &agent);

    assert!(jane(None).is_none());
}

const JANE_FIELDS: [&str; 6] = [
    "Jane",
    "Doe",
    "jane@example.com",
    "secret",
    "LIC123",
    "0711234567",
];

/// Jane's text fields with one position replaced.
fn jane_fields_with(index: usize, value: &'static str) -> [&'static str; 6] {
    let mut fields = JANE_FIELDS;
    fields[index] = value;
    fields
}

#[test]
fn customer_rejects_each_single_field_violation() {
    let agent = agent();
    let build = |id: i64, [first, last, email, password, license, cell]: [&str; 6], with_agent| {
        let agent = if with_agent { Some(&agent) } else { None };
        build_customer(id, first, last, email, password, license, cell, agent)
    };

    let cases = [
        ("id zero", build(0, JANE_FIELDS, true)),
        ("id negative", build(-1, JANE_FIELDS, true)),
        ("first name", build(1001, jane_fields_with(0, ""), true)),
        ("last name", build(1001, jane_fields_with(1, " "), true)),
        ("email", build(1001, jane_fields_with(2, "not-an-email"), true)),
        ("empty email", build(1001, jane_fields_with(2, ""), true)),
        ("password", build(1001, jane_fields_with(3, ""), true)),
        ("license", build(1001, jane_fields_with(4, ""), true)),
        ("cell", build(1001, jane_fields_with(5, "\t"), true)),
        ("agent", build(1001, JANE_FIELDS, false)),
    ];

    assert!(build(1001, JANE_FIELDS, true).is_some());
    for (label, result) in cases {
        assert!(result.is_none(), "case `{label}` should be rejected");
    }
}

#[test]
fn rental_agent_rejects_each_single_field_violation() {
    let build = |id, first, last, email, password| {
        build_rental_agent(id, first, last, email, password, Role::Mechanic)
    };

    let cases = [
        ("id", build(" ", "Lerato", "Khumalo", "lerato@fleet.co.za", "pw")),
        ("first name", build("m-1", "", "Khumalo", "lerato@fleet.co.za", "pw")),
        ("last name", build("m-1", "Lerato", " \t", "lerato@fleet.co.za", "pw")),
        ("email", build("m-1", "Lerato", "Khumalo", "lerato@fleet", "pw")),
        ("password", build("m-1", "Lerato", "Khumalo", "lerato@fleet.co.za", "")),
    ];

    assert!(build("m-1", "Lerato", "Khumalo", "lerato@fleet.co.za", "pw").is_some());
    for (label, result) in cases {
        assert!(result.is_none(), "case `{label}` should be rejected");
    }
}

#[test]
fn insurance_rejects_each_single_field_violation() {
    let truck = truck();
    let when = Some(date(2024, 1, 15));
    let t = Some(&truck);

    let cases = [
        ("id zero", build_insurance(0, "Comprehensive", when, "Santam", 556677, t)),
        ("id negative", build_insurance(-3, "Comprehensive", when, "Santam", 556677, t)),
        ("type", build_insurance(11, " ", when, "Santam", 556677, t)),
        ("date", build_insurance(11, "Comprehensive", None, "Santam", 556677, t)),
        ("provider", build_insurance(11, "Comprehensive", when, "", 556677, t)),
        ("policy number", build_insurance(11, "Comprehensive", when, "Santam", 0, t)),
        ("truck", build_insurance(11, "Comprehensive", when, "Santam", 556677, None)),
    ];

    assert!(build_insurance(11, "Comprehensive", when, "Santam", 556677, t).is_some());
    for (label, result) in cases {
        assert!(result.is_none(), "case `{label}` should be rejected");
    }
}

#[test]
fn service_record_rejects_each_single_field_violation() {
    let agent = agent();
    let truck = truck();
    let when = Some(date(2024, 2, 1));
    let insurance = build_insurance(11, "Comprehensive", when, "Santam", 556677, Some(&truck))
        .expect("fixture insurance should be valid");
    let (a, i) = (Some(&agent), Some(&insurance));

    let cases = [
        ("id zero", build_service_record(0, when, "Brakes", "pads", 100, a, i)),
        ("id negative", build_service_record(-2, when, "Brakes", "pads", 100, a, i)),
        ("date", build_service_record(21, None, "Brakes", "pads", 100, a, i)),
        ("type", build_service_record(21, when, "", "pads", 100, a, i)),
        ("description", build_service_record(21, when, "Brakes", " ", 100, a, i)),
        ("cost", build_service_record(21, when, "Brakes", "pads", -1, a, i)),
        ("agent", build_service_record(21, when, "Brakes", "pads", 100, None, i)),
        ("insurance", build_service_record(21, when, "Brakes", "pads", 100, a, None)),
    ];

    assert!(build_service_record(21, when, "Brakes", "pads", 100, a, i).is_some());
    for (label, result) in cases {
        assert!(result.is_none(), "case `{label}` should be rejected");
    }
}

#[test]
fn customer_id_boundary_is_one() {
    let agent = agent();
    let build = |id| {
        let [first, last, email, password, license, cell] = JANE_FIELDS;
        build_customer(id, first, last, email, password, license, cell, Some(&agent))
    };

    assert!(build(1).is_some());
    assert!(build(0).is_none());
    assert!(build(-1).is_none());
}

#[test]
fn customer_email_rules_follow_helper() {
    let agent = agent();
    let build = |email| {
        let [first, last, _, password, license, cell] = JANE_FIELDS;
        build_customer(1001, first, last, email, password, license, cell, Some(&agent))
    };

    assert!(build("a@b.co").is_some());
    assert!(build("a@b").is_none());
    assert!(build("abc").is_none());
    assert!(build("").is_none());
}

#[test]
fn factories_are_idempotent_for_identical_inputs() {
    let agent = agent();
    let first = jane(Some(&agent)).unwrap();
    let second = jane(Some(&agent)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn accident_report_builds_and_rejects() {
    let agent = agent();
    let customer = jane(Some(&agent)).unwrap();
    let when = date(2024, 5, 3);

    let report = build_accident_report(
        7,
        Some(when),
        "Rear-ended at a red light",
        "N1 Cape Town",
        "Claim opened",
        "OPEN",
        Some(&customer),
    )
    .expect("valid report");
    assert_eq!(report.report_id(), 7);
    assert_eq!(report.accident_date(), when);
    assert_eq!(report.description(), "Rear-ended at a red light");
    assert_eq!(report.location(), "N1 Cape Town");
    assert_eq!(report.response(), "Claim opened");
    assert_eq!(report.status(), "OPEN");
    assert_eq!(report.customer(), &customer);

    let c = Some(&customer);
    assert!(build_accident_report(0, Some(when), "d", "l", "r", "s", c).is_none());
    assert!(build_accident_report(7, None, "d", "l", "r", "s", c).is_none());
    assert!(build_accident_report(7, Some(when), "", "l", "r", "s", c).is_none());
    assert!(build_accident_report(7, Some(when), "d", "", "r", "s", c).is_none());
    assert!(build_accident_report(7, Some(when), "d", "l", "", "s", c).is_none());
    assert!(build_accident_report(7, Some(when), "d", "l", "r", "", c).is_none());
    assert!(build_accident_report(7, Some(when), "d", "l", "r", "s", None).is_none());
}

#[test]
fn truck_requires_positive_year_and_capacity() {
    let truck = truck();
    assert_eq!(truck.vin(), "1FUJGLDR5CLBP8834");
    assert_eq!(truck.year(), 2019);
    assert_eq!(truck.capacity(), 18_000);
    assert!(truck.is_available());

    assert!(build_truck("", "Freightliner", "Cascadia", 2019, 18_000, true).is_none());
    assert!(build_truck("VIN", "", "Cascadia", 2019, 18_000, true).is_none());
    assert!(build_truck("VIN", "Freightliner", "", 2019, 18_000, true).is_none());
    assert!(build_truck("VIN", "Freightliner", "Cascadia", 0, 18_000, true).is_none());
    assert!(build_truck("VIN", "Freightliner", "Cascadia", 2019, -5, true).is_none());
}

#[test]
fn insurance_and_service_record_require_their_references() {
    let agent = agent();
    let truck = truck();
    let when = date(2024, 1, 15);

    let insurance = build_insurance(11, "Comprehensive", Some(when), "Santam", 556677, Some(&truck))
        .expect("valid insurance");
    assert_eq!(insurance.truck(), &truck);
    assert_eq!(insurance.policy_number(), 556677);
    assert!(build_insurance(11, "Comprehensive", None, "Santam", 556677, Some(&truck)).is_none());
    assert!(build_insurance(11, "Comprehensive", Some(when), "Santam", 0, Some(&truck)).is_none());
    assert!(build_insurance(11, "Comprehensive", Some(when), "Santam", 556677, None).is_none());

    let record = build_service_record(
        21,
        Some(when),
        "Brake service",
        "Replaced front pads",
        0,
        Some(&agent),
        Some(&insurance),
    )
    .expect("zero-cost warranty work is valid");
    assert_eq!(record.cost(), 0);
    assert_eq!(record.rental_agent(), &agent);
    assert_eq!(record.insurance(), &insurance);

    let i = Some(&insurance);
    let a = Some(&agent);
    assert!(build_service_record(21, Some(when), "Brake service", "pads", -1, a, i).is_none());
    assert!(build_service_record(21, Some(when), "", "pads", 100, a, i).is_none());
    assert!(build_service_record(21, Some(when), "Brake service", "pads", 100, None, i).is_none());
    assert!(build_service_record(21, Some(when), "Brake service", "pads", 100, a, None).is_none());
}

#[test]
fn factories_keep_inputs_verbatim() {
    let agent = build_rental_agent(" id ", " Ann ", "Lee", "ann@lee.io", " pw ", Role::HelpDesk)
        .expect("padded but non-blank values are valid");
    assert_eq!(agent.agent_id(), " id ");
    assert_eq!(agent.first_name(), " Ann ");
    assert_eq!(agent.password(), " pw ");
    assert_eq!(agent.role().display_name(), "Help Desk");
}
