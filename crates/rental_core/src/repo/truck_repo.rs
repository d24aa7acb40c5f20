//! Truck repository contract and SQLite adapter.

use crate::factory::build_truck;
use crate::model::truck::{Truck, Vin};
use crate::repo::{
    bool_to_int, ensure_connection_ready, parse_bool, rejected_row, CrudRepository, RepoError,
    RepoResult,
};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "trucks";
const COLUMNS: &[&str] = &[
    "vin",
    "make",
    "model",
    "year",
    "capacity",
    "available",
    "updated_at",
];

const TRUCK_SELECT_SQL: &str = "SELECT
    vin,
    make,
    model,
    year,
    capacity,
    available
FROM trucks";

/// Truck lookups beyond plain CRUD.
pub trait TruckRepository: CrudRepository<Entity = Truck> {
    /// Trucks currently free to rent, ordered by VIN.
    fn find_available(&self) -> RepoResult<Vec<Truck>>;
}

/// SQLite-backed truck repository.
pub struct SqliteTruckRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTruckRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CrudRepository for SqliteTruckRepository<'_> {
    type Entity = Truck;

    fn save(&self, entity: &Truck) -> RepoResult<Truck> {
        self.conn.execute(
            "INSERT INTO trucks (
                vin,
                make,
                model,
                year,
                capacity,
                available
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (vin) DO UPDATE SET
                make = excluded.make,
                model = excluded.model,
                year = excluded.year,
                capacity = excluded.capacity,
                available = excluded.available,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                entity.vin(),
                entity.make(),
                entity.model(),
                entity.year(),
                entity.capacity(),
                bool_to_int(entity.is_available()),
            ],
        )?;

        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &Vin) -> RepoResult<Option<Truck>> {
        load_truck(self.conn, id)
    }

    fn find_all(&self) -> RepoResult<Vec<Truck>> {
        query_trucks(
            self.conn,
            &format!("{TRUCK_SELECT_SQL} ORDER BY vin ASC;"),
            [],
        )
    }

    fn delete_by_id(&self, id: &Vin) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM trucks WHERE vin = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<Truck>(id));
        }
        Ok(())
    }
}

impl TruckRepository for SqliteTruckRepository<'_> {
    fn find_available(&self) -> RepoResult<Vec<Truck>> {
        query_trucks(
            self.conn,
            &format!("{TRUCK_SELECT_SQL} WHERE available = 1 ORDER BY vin ASC;"),
            [],
        )
    }
}

pub(crate) fn load_truck(conn: &Connection, vin: &str) -> RepoResult<Option<Truck>> {
    let trucks = query_trucks(conn, &format!("{TRUCK_SELECT_SQL} WHERE vin = ?1;"), [vin])?;
    Ok(trucks.into_iter().next())
}

fn query_trucks<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<Truck>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut trucks = Vec::new();
    while let Some(row) = rows.next()? {
        trucks.push(parse_truck_row(row)?);
    }
    Ok(trucks)
}

fn parse_truck_row(row: &Row<'_>) -> RepoResult<Truck> {
    let vin: String = row.get("vin")?;
    let available = parse_bool(row.get("available")?, "trucks.available")?;

    build_truck(
        &vin,
        &row.get::<_, String>("make")?,
        &row.get::<_, String>("model")?,
        row.get("year")?,
        row.get("capacity")?,
        available,
    )
    .ok_or_else(|| rejected_row::<Truck>(&vin))
}
