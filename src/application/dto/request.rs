//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;

/// Create domain request
///
/// `name` is optional at the deserialization level so that an absent name
/// surfaces as a validation failure instead of a body-parse rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDomainRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Update domain request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDomainRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}
