//! Repository implementations backed by PostgreSQL.

pub mod domain_repository;

pub use domain_repository::PgDomainRepository;
