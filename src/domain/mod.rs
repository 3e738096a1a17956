//! # Domain Layer
//!
//! Core business entities of the configurator service, independent of any
//! framework or infrastructure concern.
//!
//! - **entities**: the `Domain` entity, the `Page` container, and the
//!   `DomainRepository` data access contract

pub mod entities;

pub use entities::*;
