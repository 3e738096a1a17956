//! Domain Handlers
//!
//! CRUD endpoints for the domain registry. Each handler assembles the
//! facade over the state's repository and translates HTTP inputs.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::application::dto::{
    CreateDomainRequest, DomainPageResponse, DomainResponse, UpdateDomainRequest,
};
use crate::application::facade::{DomainFacade, DomainFacadeImpl};
use crate::application::services::DomainServiceImpl;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: i64,

    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    20
}

fn build_facade(state: &AppState) -> DomainFacadeImpl {
    let service = Arc::new(DomainServiceImpl::new(state.domain_repository.clone()));
    DomainFacadeImpl::new(service)
}

/// List domains page by page
pub async fn get_domains(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<DomainPageResponse>, AppError> {
    let page = build_facade(&state).get_domains(query.page, query.size).await?;

    Ok(Json(page))
}

/// Get domain by id
pub async fn get_domain(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DomainResponse>, AppError> {
    let domain = build_facade(&state).get_domain_by_id(id).await?;

    Ok(Json(domain))
}

/// Create a new domain
pub async fn create_domain(
    State(state): State<AppState>,
    Json(body): Json<CreateDomainRequest>,
) -> Result<(StatusCode, Json<DomainResponse>), AppError> {
    let created = build_facade(&state).create_domain(body).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing domain
pub async fn update_domain(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateDomainRequest>,
) -> Result<Json<DomainResponse>, AppError> {
    let updated = build_facade(&state).update_domain(id, body).await?;

    Ok(Json(updated))
}

/// Delete a domain
pub async fn delete_domain(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    build_facade(&state).delete_domain_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
