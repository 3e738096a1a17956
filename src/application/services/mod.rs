//! Application services.

pub mod domain_service;

pub use domain_service::{DomainService, DomainServiceImpl};

#[cfg(test)]
pub use domain_service::MockDomainService;
