//! Rental agent repository contract and SQLite adapter.

use crate::factory::build_rental_agent;
use crate::model::rental_agent::{RentalAgent, RentalAgentId};
use crate::model::role::Role;
use crate::repo::{ensure_connection_ready, rejected_row, CrudRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const TABLE: &str = "rental_agents";
const COLUMNS: &[&str] = &[
    "agent_id",
    "first_name",
    "last_name",
    "email",
    "password",
    "role",
    "updated_at",
];

const AGENT_SELECT_SQL: &str = "SELECT
    agent_id,
    first_name,
    last_name,
    email,
    password,
    role
FROM rental_agents";

/// Rental agent lookups beyond plain CRUD.
pub trait RentalAgentRepository: CrudRepository<Entity = RentalAgent> {
    /// Returns the agent with this email, lowest id first on duplicates.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<RentalAgent>>;
    fn find_by_role(&self, role: Role) -> RepoResult<Vec<RentalAgent>>;
}

/// SQLite-backed rental agent repository.
pub struct SqliteRentalAgentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRentalAgentRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TABLE, COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CrudRepository for SqliteRentalAgentRepository<'_> {
    type Entity = RentalAgent;

    fn save(&self, entity: &RentalAgent) -> RepoResult<RentalAgent> {
        self.conn.execute(
            "INSERT INTO rental_agents (
                agent_id,
                first_name,
                last_name,
                email,
                password,
                role
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (agent_id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                password = excluded.password,
                role = excluded.role,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                entity.agent_id(),
                entity.first_name(),
                entity.last_name(),
                entity.email(),
                entity.password(),
                entity.role().as_str(),
            ],
        )?;

        Ok(entity.clone())
    }

    fn find_by_id(&self, id: &RentalAgentId) -> RepoResult<Option<RentalAgent>> {
        load_rental_agent(self.conn, id)
    }

    fn find_all(&self) -> RepoResult<Vec<RentalAgent>> {
        query_agents(
            self.conn,
            &format!("{AGENT_SELECT_SQL} ORDER BY agent_id ASC;"),
            [],
        )
    }

    fn delete_by_id(&self, id: &RentalAgentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM rental_agents WHERE agent_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::not_found::<RentalAgent>(id));
        }
        Ok(())
    }
}

impl RentalAgentRepository for SqliteRentalAgentRepository<'_> {
    fn find_by_email(&self, email: &str) -> RepoResult<Option<RentalAgent>> {
        let agents = query_agents(
            self.conn,
            &format!("{AGENT_SELECT_SQL} WHERE email = ?1 ORDER BY agent_id ASC LIMIT 1;"),
            [email],
        )?;
        Ok(agents.into_iter().next())
    }

    fn find_by_role(&self, role: Role) -> RepoResult<Vec<RentalAgent>> {
        query_agents(
            self.conn,
            &format!("{AGENT_SELECT_SQL} WHERE role = ?1 ORDER BY agent_id ASC;"),
            [role.as_str()],
        )
    }
}

/// Loads one agent by id; shared with repositories that reference agents.
pub(crate) fn load_rental_agent(conn: &Connection, id: &str) -> RepoResult<Option<RentalAgent>> {
    let agents = query_agents(
        conn,
        &format!("{AGENT_SELECT_SQL} WHERE agent_id = ?1;"),
        [id],
    )?;
    Ok(agents.into_iter().next())
}

/// Loads a referenced agent, treating a dangling key as corrupt data.
pub(crate) fn require_rental_agent(
    conn: &Connection,
    id: &str,
    column: &'static str,
) -> RepoResult<RentalAgent> {
    load_rental_agent(conn, id)?.ok_or_else(|| {
        RepoError::InvalidData(format!("dangling rental agent `{id}` in {column}"))
    })
}

fn query_agents<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<RentalAgent>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut agents = Vec::new();
    while let Some(row) = rows.next()? {
        agents.push(parse_agent_row(row)?);
    }
    Ok(agents)
}

fn parse_agent_row(row: &Row<'_>) -> RepoResult<RentalAgent> {
    let agent_id: String = row.get("agent_id")?;
    let role_text: String = row.get("role")?;
    let role = Role::parse(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role `{role_text}` in rental_agents.role"))
    })?;

    build_rental_agent(
        &agent_id,
        &row.get::<_, String>("first_name")?,
        &row.get::<_, String>("last_name")?,
        &row.get::<_, String>("email")?,
        &row.get::<_, String>("password")?,
        role,
    )
    .ok_or_else(|| rejected_row::<RentalAgent>(&agent_id))
}
