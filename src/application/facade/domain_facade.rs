//! Domain Facade
//!
//! Wire-shape translation plus input validation in front of the service
//! layer. Handlers talk to this trait only.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{
    CreateDomainRequest, DomainPageResponse, DomainResponse, UpdateDomainRequest,
};
use crate::application::mapper;
use crate::application::services::DomainService;
use crate::shared::error::AppError;
use crate::shared::validation::require_text;

/// Domain facade trait
#[async_trait]
pub trait DomainFacade: Send + Sync {
    /// Create a domain from the request, validating that a name is present.
    async fn create_domain(
        &self,
        request: CreateDomainRequest,
    ) -> Result<DomainResponse, AppError>;

    /// Get a domain by id.
    async fn get_domain_by_id(&self, id: i64) -> Result<DomainResponse, AppError>;

    /// Delete a domain by id.
    async fn delete_domain_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Update a domain from the request, validating that a name is present.
    async fn update_domain(
        &self,
        id: i64,
        request: UpdateDomainRequest,
    ) -> Result<DomainResponse, AppError>;

    /// Get one page of domains.
    async fn get_domains(&self, page: i64, size: i64) -> Result<DomainPageResponse, AppError>;
}

/// DomainFacade implementation
pub struct DomainFacadeImpl {
    service: Arc<dyn DomainService>,
}

impl DomainFacadeImpl {
    pub fn new(service: Arc<dyn DomainService>) -> Self {
        Self { service }
    }

    fn validate_page_bounds(page: i64, size: i64) -> Result<(), AppError> {
        if page < 0 {
            return Err(AppError::Validation("Page must not be negative".into()));
        }
        if size < 1 {
            return Err(AppError::Validation("Page size must be positive".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DomainFacade for DomainFacadeImpl {
    async fn create_domain(
        &self,
        request: CreateDomainRequest,
    ) -> Result<DomainResponse, AppError> {
        tracing::info!("Start create domain");
        let name = require_text(request.name, "Name")?;

        let created = self
            .service
            .create(mapper::to_new_domain(name, request.description))
            .await?;

        Ok(mapper::to_domain_response(created))
    }

    async fn get_domain_by_id(&self, id: i64) -> Result<DomainResponse, AppError> {
        let domain = self.service.get_by_id(id).await?;
        Ok(mapper::to_domain_response(domain))
    }

    async fn delete_domain_by_id(&self, id: i64) -> Result<(), AppError> {
        tracing::info!("Start delete domain by id: {}", id);
        self.service.delete_by_id(id).await
    }

    async fn update_domain(
        &self,
        id: i64,
        request: UpdateDomainRequest,
    ) -> Result<DomainResponse, AppError> {
        tracing::info!("Start update domain by id: {}", id);
        let name = require_text(request.name, "Name")?;

        let updated = self
            .service
            .update(id, mapper::to_new_domain(name, request.description))
            .await?;

        Ok(mapper::to_domain_response(updated))
    }

    async fn get_domains(&self, page: i64, size: i64) -> Result<DomainPageResponse, AppError> {
        tracing::info!("Start get domains");
        Self::validate_page_bounds(page, size)?;

        let domains = self.service.get_page(page, size).await?;
        Ok(mapper::to_page_response(domains))
    }
}
