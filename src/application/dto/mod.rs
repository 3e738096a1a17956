//! Data transfer objects for the HTTP API.

pub mod request;
pub mod response;

pub use request::{CreateDomainRequest, UpdateDomainRequest};
pub use response::{DomainPageResponse, DomainResponse};
