//! Response DTOs
//!
//! Data structures for API response bodies. Field names are camelCase on the
//! wire per the API contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Domain response shape.
///
/// `created_by_user_id` is intentionally not exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Paginated domain listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPageResponse {
    pub items: Vec<DomainResponse>,
    pub page: i64,
    pub size: i64,
    pub total_items: i64,
}
