//! Core use-case services.
//!
//! # Responsibility
//! - Layer CRUD use-cases over repository contracts.
//! - Route field-level updates back through entity factories.
//!
//! # Invariants
//! - Services never bypass repository persistence contracts.
//! - Services stay storage-agnostic; they only see repository traits.
//! - `create` never overwrites, `update` never inserts.

use crate::factory::ValidationRejected;
use crate::model::Entity;
use crate::repo::{CrudRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod accident_report_service;
pub mod customer_service;
pub mod insurance_service;
pub mod rental_agent_service;
pub mod service_record_service;
pub mod truck_service;

/// Entity type managed by repository `R`.
pub type EntityOf<R> = <R as CrudRepository>::Entity;
/// Key type of the entity managed by repository `R`.
pub type IdOf<R> = <EntityOf<R> as Entity>::Id;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for CRUD use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Target entity does not exist.
    NotFound { entity: &'static str, id: String },
    /// `create` called with a key that is already stored.
    AlreadyExists { entity: &'static str, id: String },
    /// Rebuilding the entity with the new values failed validation.
    Rejected(ValidationRejected),
    /// An aggregate over stored values does not fit its result type.
    Overflow { operation: &'static str, key: String },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::AlreadyExists { entity, id } => write!(f, "{entity} already exists: {id}"),
            Self::Rejected(err) => write!(f, "{err}"),
            Self::Overflow { operation, key } => {
                write!(f, "{operation} overflowed for {key}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationRejected> for ServiceError {
    fn from(value: ValidationRejected) -> Self {
        Self::Rejected(value)
    }
}

fn not_found<E: Entity>(id: &E::Id) -> ServiceError {
    ServiceError::NotFound {
        entity: E::KIND,
        id: id.to_string(),
    }
}

/// CRUD use-case contract shared by every entity service.
///
/// Implementors only provide `repository()`; the operations are defaulted.
pub trait CrudService {
    type Repo: CrudRepository;

    fn repository(&self) -> &Self::Repo;

    /// Persists a new entity. Fails with `AlreadyExists` when the key is taken.
    fn create(&self, entity: &EntityOf<Self::Repo>) -> ServiceResult<EntityOf<Self::Repo>> {
        let kind = <EntityOf<Self::Repo> as Entity>::KIND;
        let id = entity.id();
        if self.repository().exists_by_id(&id)? {
            warn!("event=entity_create module=service status=conflict entity={kind} id={id}");
            return Err(ServiceError::AlreadyExists {
                entity: kind,
                id: id.to_string(),
            });
        }

        let saved = self.repository().save(entity)?;
        info!("event=entity_create module=service status=ok entity={kind} id={id}");
        Ok(saved)
    }

    fn read(&self, id: &IdOf<Self::Repo>) -> ServiceResult<Option<EntityOf<Self::Repo>>> {
        Ok(self.repository().find_by_id(id)?)
    }

    /// Overwrites an existing entity. Fails with `NotFound` for unknown keys.
    fn update(&self, entity: &EntityOf<Self::Repo>) -> ServiceResult<EntityOf<Self::Repo>> {
        let kind = <EntityOf<Self::Repo> as Entity>::KIND;
        let id = entity.id();
        if !self.repository().exists_by_id(&id)? {
            warn!("event=entity_update module=service status=not_found entity={kind} id={id}");
            return Err(not_found::<EntityOf<Self::Repo>>(&id));
        }

        let saved = self.repository().save(entity)?;
        info!("event=entity_update module=service status=ok entity={kind} id={id}");
        Ok(saved)
    }

    fn delete(&self, id: &IdOf<Self::Repo>) -> ServiceResult<()> {
        let kind = <EntityOf<Self::Repo> as Entity>::KIND;
        self.repository().delete_by_id(id)?;
        info!("event=entity_delete module=service status=ok entity={kind} id={id}");
        Ok(())
    }

    fn get_all(&self) -> ServiceResult<Vec<EntityOf<Self::Repo>>> {
        Ok(self.repository().find_all()?)
    }

    /// Loads an entity that must exist.
    fn require(&self, id: &IdOf<Self::Repo>) -> ServiceResult<EntityOf<Self::Repo>> {
        self.read(id)?
            .ok_or_else(|| not_found::<EntityOf<Self::Repo>>(id))
    }
}
