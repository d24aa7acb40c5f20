//! Customer repository contract and SQLite adapter.
//!
//! Customers store only `rental_agent_id`; reads re-attach the agent
//! snapshot from `rental_agents`.

use crate::factory::build_customer;
use crate::model::customer::{Customer, CustomerId};
use crate::model::rental_agent::RentalAgentId;
use crate::repo::rental_agent_repo::require_rental_agent;
use crate::repo::{ensure_connection_ready, rejected_row, CrudRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "customers";
const COLUMNS: &[&str] = &[
    "customer_id",
    "first_name",
    "last_name",
    "email",
    "password",
    "license",
    "cell_no",
    "rental_agent_id",
    "updated_at",
];

const CUSTOMER_SELECT_SQL: &str = "SELECT
    customer_id,
    first_name,
    last_name,
    email,
    password,
    license,
    cell_no,
    rental_agent_id
FROM customers";

/// Customer lookups beyond plain CRUD.
pub trait CustomerRepository: CrudRepository<Entity = Customer> {
    /// Returns the customer with this email, lowest id first on duplicates.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>>;
    fn find_by_rental_agent(&self, agent_id: &RentalAgentId) -> RepoResult<Vec<Customer>>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CrudRepository for SqliteCustomerRepository<'_> {
    type Entity = Customer;

    fn save(&self, entity: &Customer) -> RepoResult<Customer> {
        self.conn.execute(
            "INSERT INTO customers (
                customer_id,
                first_name,
                last_name,
                email,
                password,
                license,
                cell_no,
                rental_agent_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT (customer_id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                password = excluded.password,
                license = excluded.license,
                cell_no = excluded.cell_no,
                rental_agent_id = excluded.rental_agent_id,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                entity.customer_id(),
                entity.first_name(),
                entity.last_name(),
                entity.email(),
                entity.password(),
                entity.license(),
                entity.cell_no(),
                entity.rental_agent().agent_id(),
            ],
        )?;

        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &CustomerId) -> RepoResult<Option<Customer>> {
        load_customer(self.conn, *id)
    }

    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        query_customers(
            self.conn,
            &format!("{CUSTOMER_SELECT_SQL} ORDER BY customer_id ASC;"),
            [],
        )
    }

    fn delete_by_id(&self, id: &CustomerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM customers WHERE customer_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<Customer>(id));
        }
        Ok(())
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let customers = query_customers(
            self.conn,
            &format!("{CUSTOMER_SELECT_SQL} WHERE email = ?1 ORDER BY customer_id ASC LIMIT 1;"),
            [email],
        )?;
        Ok(customers.into_iter().next())
    }

    fn find_by_rental_agent(&self, agent_id: &RentalAgentId) -> RepoResult<Vec<Customer>> {
        query_customers(
            self.conn,
            &format!("{CUSTOMER_SELECT_SQL} WHERE rental_agent_id = ?1 ORDER BY customer_id ASC;"),
            [agent_id],
        )
    }
}

pub(crate) fn load_customer(conn: &Connection, id: CustomerId) -> RepoResult<Option<Customer>> {
    let customers = query_customers(
        conn,
        &format!("{CUSTOMER_SELECT_SQL} WHERE customer_id = ?1;"),
        [id],
    )?;
    Ok(customers.into_iter().next())
}

fn query_customers<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<Customer>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut customers = Vec::new();
    while let Some(row) = rows.next()? {
        customers.push(parse_customer_row(conn, row)?);
    }
    Ok(customers)
}

fn parse_customer_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Customer> {
    let customer_id: CustomerId = row.get("customer_id")?;
    let agent_id: String = row.get("rental_agent_id")?;
    let rental_agent = require_rental_agent(conn, &agent_id, "customers.rental_agent_id")?;

    build_customer(
        customer_id,
        &row.get::<_, String>("first_name")?,
        &row.get::<_, String>("last_name")?,
        &row.get::<_, String>("email")?,
        &row.get::<_, String>("password")?,
        &row.get::<_, String>("license")?,
        &row.get::<_, String>("cell_no")?,
        Some(&rental_agent),
    )
    .ok_or_else(|| rejected_row::<Customer>(&customer_id))
}
