//! Facade layer between HTTP handlers and application services.

pub mod domain_facade;

pub use domain_facade::{DomainFacade, DomainFacadeImpl};
