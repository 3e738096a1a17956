//! # Configurator Library
//!
//! This crate provides a configuration domain registry service with:
//! - RESTful CRUD API for domain entities
//! - Pagination with full-table counts
//! - Name-uniqueness enforcement backed by a database constraint
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Domain Layer**: Core entities and the repository trait
//! - **Application Layer**: Facade, services, DTOs, and mapping functions
//! - **Infrastructure Layer**: Database pool and repository implementations
//! - **Presentation Layer**: HTTP handlers and routing
//!
//! ## Module Structure
//!
//! ```text
//! configurator/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and traits
//! +-- application/    Facade, services, DTOs, mappers
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes and handlers
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core entities
pub mod domain;

// Application layer - Facade and services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
