//! # Infrastructure Layer
//!
//! Database connectivity and repository implementations.

pub mod database;
pub mod repositories;
