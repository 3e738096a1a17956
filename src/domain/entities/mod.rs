//! Core domain entities and data access contracts.

pub mod domain;
pub mod page;

pub use domain::{Domain, DomainRepository, NewDomain, SENTINEL_CREATOR_ID};
pub use page::Page;

#[cfg(test)]
pub use domain::MockDomainRepository;
