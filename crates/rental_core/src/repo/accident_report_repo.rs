//! Accident report repository contract and SQLite adapter.

use crate::factory::build_accident_report;
use crate::model::accident_report::{AccidentReport, AccidentReportId};
use crate::model::customer::CustomerId;
use crate::repo::customer_repo::load_customer;
use crate::repo::{
    date_to_db, ensure_connection_ready, parse_date, rejected_row, CrudRepository, RepoError,
    RepoResult,
};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "accident_reports";
const COLUMNS: &[&str] = &[
    "report_id",
    "accident_date",
    "description",
    "location",
    "response",
    "status",
    "customer_id",
    "updated_at",
];

const REPORT_SELECT_SQL: &str = "SELECT
    report_id,
    accident_date,
    description,
    location,
    response,
    status,
    customer_id
FROM accident_reports";

/// Accident report lookups beyond plain CRUD.
pub trait AccidentReportRepository: CrudRepository<Entity = AccidentReport> {
    /// Reports filed for one customer, most recent accident first.
    fn find_by_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<AccidentReport>>;
}

/// SQLite-backed accident report repository.
pub struct SqliteAccidentReportRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccidentReportRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CrudRepository for SqliteAccidentReportRepository<'_> {
    type Entity = AccidentReport;

    fn save(&self, entity: &AccidentReport) -> RepoResult<AccidentReport> {
        self.conn.execute(
            "INSERT INTO accident_reports (
                report_id,
                accident_date,
                description,
                location,
                response,
                status,
                customer_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (report_id) DO UPDATE SET
                accident_date = excluded.accident_date,
                description = excluded.description,
                location = excluded.location,
                response = excluded.response,
                status = excluded.status,
                customer_id = excluded.customer_id,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                entity.report_id(),
                date_to_db(entity.accident_date()),
                entity.description(),
                entity.location(),
                entity.response(),
                entity.status(),
                entity.customer().customer_id(),
            ],
        )?;

        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &AccidentReportId) -> RepoResult<Option<AccidentReport>> {
        let reports = query_reports(
            self.conn,
            &format!("{REPORT_SELECT_SQL} WHERE report_id = ?1;"),
            [id],
        )?;
        Ok(reports.into_iter().next())
    }

    fn find_all(&self) -> RepoResult<Vec<AccidentReport>> {
        query_reports(
            self.conn,
            &format!("{REPORT_SELECT_SQL} ORDER BY report_id ASC;"),
            [],
        )
    }

    fn delete_by_id(&self, id: &AccidentReportId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM accident_reports WHERE report_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<AccidentReport>(id));
        }
        Ok(())
    }
}

impl AccidentReportRepository for SqliteAccidentReportRepository<'_> {
    fn find_by_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<AccidentReport>> {
        query_reports(
            self.conn,
            &format!(
                "{REPORT_SELECT_SQL} WHERE customer_id = ?1 ORDER BY accident_date DESC, report_id ASC;"
            ),
            [customer_id],
        )
    }
}

fn query_reports<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<AccidentReport>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut reports = Vec::new();
    while let Some(row) = rows.next()? {
        reports.push(parse_report_row(conn, row)?);
    }
    Ok(reports)
}

fn parse_report_row(conn: &Connection, row: &Row<'_>) -> RepoResult<AccidentReport> {
    let report_id: AccidentReportId = row.get("report_id")?;
    let date_text: String = row.get("accident_date")?;
    let accident_date = parse_date(&date_text, "accident_reports.accident_date")?;
    let customer_id: CustomerId = row.get("customer_id")?;
    let customer = load_customer(conn, customer_id)?.ok_or_else(|| {
        RepoError::InvalidData(format!(
            "dangling customer `{customer_id}` in accident_reports.customer_id"
        ))
    })?;

    build_accident_report(
        report_id,
        Some(accident_date),
        &row.get::<_, String>("description")?,
        &row.get::<_, String>("location")?,
        &row.get::<_, String>("response")?,
        &row.get::<_, String>("status")?,
        Some(&customer),
    )
    .ok_or_else(|| rejected_row::<AccidentReport>(&report_id))
}
