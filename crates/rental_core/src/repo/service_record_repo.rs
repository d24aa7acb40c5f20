//! Service record repository contract and SQLite adapter.

use crate::factory::build_service_record;
use crate::model::rental_agent::RentalAgentId;
use crate::model::service_record::{ServiceRecord, ServiceRecordId};
use crate::repo::insurance_repo::load_insurance;
use crate::repo::rental_agent_repo::require_rental_agent;
use crate::repo::{
    date_to_db, ensure_connection_ready, parse_date, rejected_row, CrudRepository, RepoError,
    RepoResult,
};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "service_records";
const COLUMNS: &[&str] = &[
    "service_id",
    "service_date",
    "service_type",
    "description",
    "cost",
    "rental_agent_id",
    "insurance_id",
    "updated_at",
];

const SERVICE_RECORD_SELECT_SQL: &str = "SELECT
    service_id,
    service_date,
    service_type,
    description,
    cost,
    rental_agent_id,
    insurance_id
FROM service_records";

/// Service record lookups beyond plain CRUD.
pub trait ServiceRecordRepository: CrudRepository<Entity = ServiceRecord> {
    fn find_by_rental_agent(&self, agent_id: &RentalAgentId) -> RepoResult<Vec<ServiceRecord>>;
}

/// SQLite-backed service record repository.
pub struct SqliteServiceRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteServiceRecordRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CrudRepository for SqliteServiceRecordRepository<'_> {
    type Entity = ServiceRecord;

    fn save(&self, entity: &ServiceRecord) -> RepoResult<ServiceRecord> {
        self.conn.execute(
            "INSERT INTO service_records (
                service_id,
                service_date,
                service_type,
                description,
                cost,
                rental_agent_id,
                insurance_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (service_id) DO UPDATE SET
                service_date = excluded.service_date,
                service_type = excluded.service_type,
                description = excluded.description,
                cost = excluded.cost,
                rental_agent_id = excluded.rental_agent_id,
                insurance_id = excluded.insurance_id,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                entity.service_id(),
                date_to_db(entity.service_date()),
                entity.service_type(),
                entity.description(),
                entity.cost(),
                entity.rental_agent().agent_id(),
                entity.insurance().insurance_id(),
            ],
        )?;

        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &ServiceRecordId) -> RepoResult<Option<ServiceRecord>> {
        let records = query_service_records(
            self.conn,
            &format!("{SERVICE_RECORD_SELECT_SQL} WHERE service_id = ?1;"),
            [id],
        )?;
        Ok(records.into_iter().next())
    }

    fn find_all(&self) -> RepoResult<Vec<ServiceRecord>> {
        query_service_records(
            self.conn,
            &format!("{SERVICE_RECORD_SELECT_SQL} ORDER BY service_id ASC;"),
            [],
        )
    }

    fn delete_by_id(&self, id: &ServiceRecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM service_records WHERE service_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<ServiceRecord>(id));
        }
        Ok(())
    }
}

impl ServiceRecordRepository for SqliteServiceRecordRepository<'_> {
    fn find_by_rental_agent(&self, agent_id: &RentalAgentId) -> RepoResult<Vec<ServiceRecord>> {
        query_service_records(
            self.conn,
            &format!(
                "{SERVICE_RECORD_SELECT_SQL} WHERE rental_agent_id = ?1 ORDER BY service_id ASC;"
            ),
            [agent_id],
        )
    }
}

fn query_service_records<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<ServiceRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(parse_service_record_row(conn, row)?);
    }
    Ok(records)
}

fn parse_service_record_row(conn: &Connection, row: &Row<'_>) -> RepoResult<ServiceRecord> {
    let service_id: ServiceRecordId = row.get("service_id")?;
    let date_text: String = row.get("service_date")?;
    let service_date = parse_date(&date_text, "service_records.service_date")?;
    let agent_id: String = row.get("rental_agent_id")?;
    let rental_agent = require_rental_agent(conn, &agent_id, "service_records.rental_agent_id")?;
    let insurance_id: i64 = row.get("insurance_id")?;
    let insurance = load_insurance(conn, insurance_id)?.ok_or_else(|| {
        RepoError::InvalidData(format!(
            "dangling insurance `{insurance_id}` in service_records.insurance_id"
        ))
    })?;

    build_service_record(
        service_id,
        Some(service_date),
        &row.get::<_, String>("service_type")?,
        &row.get::<_, String>("description")?,
        row.get("cost")?,
        Some(&rental_agent),
        Some(&insurance),
    )
    .ok_or_else(|| rejected_row::<ServiceRecord>(&service_id))
}
