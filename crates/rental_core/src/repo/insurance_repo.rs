//! Insurance repository contract and SQLite adapter.

use crate::factory::build_insurance;
use crate::model::insurance::{Insurance, InsuranceId};
use crate::model::truck::Vin;
use crate::repo::truck_repo::load_truck;
use crate::repo::{
    date_to_db, ensure_connection_ready, parse_date, rejected_row, CrudRepository, RepoError,
    RepoResult,
};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "insurances";
const COLUMNS: &[&str] = &[
    "insurance_id",
    "insurance_type",
    "insurance_date",
    "provider",
    "policy_number",
    "truck_vin",
    "updated_at",
];

const INSURANCE_SELECT_SQL: &str = "SELECT
    insurance_id,
    insurance_type,
    insurance_date,
    provider,
    policy_number,
    truck_vin
FROM insurances";

/// Insurance lookups beyond plain CRUD.
pub trait InsuranceRepository: CrudRepository<Entity = Insurance> {
    fn find_by_truck(&self, vin: &Vin) -> RepoResult<Vec<Insurance>>;
}

/// SQLite-backed insurance repository.
pub struct SqliteInsuranceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteInsuranceRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CrudRepository for SqliteInsuranceRepository<'_> {
    type Entity = Insurance;

    fn save(&self, entity: &Insurance) -> RepoResult<Insurance> {
        self.conn.execute(
            "INSERT INTO insurances (
                insurance_id,
                insurance_type,
                insurance_date,
                provider,
                policy_number,
                truck_vin
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (insurance_id) DO UPDATE SET
                insurance_type = excluded.insurance_type,
                insurance_date = excluded.insurance_date,
                provider = excluded.provider,
                policy_number = excluded.policy_number,
                truck_vin = excluded.truck_vin,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                entity.insurance_id(),
                entity.insurance_type(),
                date_to_db(entity.insurance_date()),
                entity.provider(),
                entity.policy_number(),
                entity.truck().vin(),
            ],
        )?;

        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &InsuranceId) -> RepoResult<Option<Insurance>> {
        load_insurance(self.conn, *id)
    }

    fn find_all(&self) -> RepoResult<Vec<Insurance>> {
        query_insurances(
            self.conn,
            &format!("{INSURANCE_SELECT_SQL} ORDER BY insurance_id ASC;"),
            [],
        )
    }

    fn delete_by_id(&self, id: &InsuranceId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM insurances WHERE insurance_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<Insurance>(id));
        }
        Ok(())
    }
}

impl InsuranceRepository for SqliteInsuranceRepository<'_> {
    fn find_by_truck(&self, vin: &Vin) -> RepoResult<Vec<Insurance>> {
        query_insurances(
            self.conn,
            &format!("{INSURANCE_SELECT_SQL} WHERE truck_vin = ?1 ORDER BY insurance_id ASC;"),
            [vin],
        )
    }
}

pub(crate) fn load_insurance(conn: &Connection, id: InsuranceId) -> RepoResult<Option<Insurance>> {
    let insurances = query_insurances(
        conn,
        &format!("{INSURANCE_SELECT_SQL} WHERE insurance_id = ?1;"),
        [id],
    )?;
    Ok(insurances.into_iter().next())
}

fn query_insurances<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<Insurance>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut insurances = Vec::new();
    while let Some(row) = rows.next()? {
        insurances.push(parse_insurance_row(conn, row)?);
    }
    Ok(insurances)
}

fn parse_insurance_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Insurance> {
    let insurance_id: InsuranceId = row.get("insurance_id")?;
    let date_text: String = row.get("insurance_date")?;
    let insurance_date = parse_date(&date_text, "insurances.insurance_date")?;
    let vin: String = row.get("truck_vin")?;
    let truck = load_truck(conn, &vin)?.ok_or_else(|| {
        RepoError::InvalidData(format!("dangling truck `{vin}` in insurances.truck_vin"))
    })?;

    build_insurance(
        insurance_id,
        &row.get::<_, String>("insurance_type")?,
        Some(insurance_date),
        &row.get::<_, String>("provider")?,
        row.get("policy_number")?,
        Some(&truck),
    )
    .ok_or_else(|| rejected_row::<Insurance>(&insurance_id))
}
