//! Domain Service
//!
//! Business-rule layer enforcing existence and uniqueness invariants around
//! the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Domain, DomainRepository, NewDomain, Page};
use crate::shared::error::AppError;

/// Domain service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainService: Send + Sync {
    /// Get one page of domains. Pass-through, no validation.
    async fn get_page(&self, page: i64, size: i64) -> Result<Page<Domain>, AppError>;

    /// Get a domain by id, failing with `NotFound` if it does not exist.
    async fn get_by_id(&self, id: i64) -> Result<Domain, AppError>;

    /// Delete a domain by id, failing with `NotFound` if it does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Create a domain, failing with `Conflict` if the name is taken.
    async fn create(&self, domain: NewDomain) -> Result<Domain, AppError>;

    /// Update a domain, failing with `NotFound` if the id is absent and
    /// `Conflict` if the name is taken.
    async fn update(&self, id: i64, domain: NewDomain) -> Result<Domain, AppError>;
}

/// DomainService implementation over a repository.
///
/// The existence and uniqueness probes here are fast-path checks for better
/// error messages; the database unique constraint on `domains.name` remains
/// the authoritative arbiter under concurrent writes and is surfaced by the
/// repository as `Conflict`.
pub struct DomainServiceImpl {
    repository: Arc<dyn DomainRepository>,
}

impl DomainServiceImpl {
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self { repository }
    }

    async fn validate_existence_by_id(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Domain with id {} not found", id)));
        }
        Ok(())
    }

    async fn validate_name_is_free(&self, name: &str) -> Result<(), AppError> {
        if self.repository.exists_by_name(name).await? {
            return Err(AppError::Conflict(format!(
                "Domain with name {} already exists",
                name
            )));
        }
        Ok(())
    }

    /// Check that no components reference the domain before deletion.
    /// TODO: implement once the components entity exists (con1-36).
    fn validate_domain_without_components(&self, _id: i64) {}
}

#[async_trait]
impl DomainService for DomainServiceImpl {
    async fn get_page(&self, page: i64, size: i64) -> Result<Page<Domain>, AppError> {
        tracing::debug!("get domains page {} with page size {}", page, size);
        self.repository.get_page(page, size).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Domain, AppError> {
        tracing::debug!("get domain by id {}", id);
        self.validate_existence_by_id(id).await?;

        self.repository.get_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!("delete domain by id {}", id);
        self.validate_existence_by_id(id).await?;
        self.validate_domain_without_components(id);

        self.repository.delete_by_id(id).await
    }

    async fn create(&self, domain: NewDomain) -> Result<Domain, AppError> {
        tracing::debug!("create domain {:?}", domain);
        self.validate_name_is_free(&domain.name).await?;

        self.repository.create(&domain).await
    }

    async fn update(&self, id: i64, domain: NewDomain) -> Result<Domain, AppError> {
        tracing::debug!("update domain {:?} with id {}", domain, id);
        self.validate_existence_by_id(id).await?;
        // Note: the probe does not exclude the row being updated, so
        // renaming a domain to its own current name conflicts.
        self.validate_name_is_free(&domain.name).await?;

        self.repository.update(id, &domain).await
    }
}
