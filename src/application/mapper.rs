//! Request/entity/response mapping.
//!
//! Explicit pure functions instead of derived mapping so the field-by-field
//! defaulting is visible and testable.

use crate::application::dto::{DomainPageResponse, DomainResponse};
use crate::domain::{Domain, NewDomain, Page, SENTINEL_CREATOR_ID};

/// Build the insert/update shape from a validated name and description.
///
/// The creator id is always forced to the sentinel; id and created_at stay
/// storage-controlled. The same mapping backs the update path, where the
/// sentinel overwrites the row's original creator.
pub fn to_new_domain(name: String, description: Option<String>) -> NewDomain {
    NewDomain {
        name,
        description,
        created_by_user_id: SENTINEL_CREATOR_ID,
    }
}

/// Map the entity to its wire shape, withholding the creator id.
pub fn to_domain_response(domain: Domain) -> DomainResponse {
    DomainResponse {
        id: domain.id,
        name: domain.name,
        description: domain.description,
        created_at: domain.created_at,
    }
}

/// Map a page of entities to the wire page shape.
pub fn to_page_response(page: Page<Domain>) -> DomainPageResponse {
    let page = page.map(to_domain_response);
    DomainPageResponse {
        items: page.items,
        page: page.page,
        size: page.size,
        total_items: page.total_items,
    }
}
