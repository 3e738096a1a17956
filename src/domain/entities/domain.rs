//! Domain entity and repository trait.
//!
//! Maps to the `domains` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::page::Page;
use crate::shared::error::AppError;

/// Sentinel creator id used while the service has no real authentication.
///
/// Both the create and the update mapping force this value; on update it
/// overwrites whatever creator the row originally had.
pub const SENTINEL_CREATOR_ID: i64 = -1;

/// Represents a named configuration domain.
///
/// Maps to the `domains` table:
/// - id: BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL UNIQUE
/// - description: TEXT NULL
/// - created_by_user_id: BIGINT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// Storage-assigned identifier (primary key, immutable)
    pub id: i64,

    /// Domain name (unique across all domains)
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Id of the creating principal
    pub created_by_user_id: i64,

    /// Creation timestamp, set once by storage
    pub created_at: DateTime<Utc>,
}

/// Field values written on create and update.
///
/// `id` and `created_at` are always storage-controlled and therefore absent
/// here. The update path writes `created_by_user_id` too, so the sentinel
/// replaces the original creator on every update.
/// TODO: carry the authenticated principal instead of the sentinel once
/// authentication lands.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDomain {
    pub name: String,
    pub description: Option<String>,
    pub created_by_user_id: i64,
}

/// Repository trait for Domain data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
///
/// Not-found is not signalled by `get_by_id`; callers probe `exists_by_id`
/// first and treat a missing row here as a storage fault.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Fetch exactly one domain by primary key.
    async fn get_by_id(&self, id: i64) -> Result<Domain, AppError>;

    /// Delete zero or one row by primary key. Absent rows are not an error;
    /// existence is checked by the caller.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Insert a new row, letting storage assign id and created_at.
    async fn create(&self, domain: &NewDomain) -> Result<Domain, AppError>;

    /// Update the row identified by `id` with the given field values.
    async fn update(&self, id: i64, domain: &NewDomain) -> Result<Domain, AppError>;

    /// Fetch one page of domains ordered ascending by id, together with the
    /// full-table row count.
    async fn get_page(&self, page: i64, size: i64) -> Result<Page<Domain>, AppError>;

    /// Check if a domain with the given name exists.
    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError>;

    /// Check if a domain with the given id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
}
