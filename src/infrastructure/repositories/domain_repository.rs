//! Domain Repository Implementation
//!
//! PostgreSQL implementation of the DomainRepository trait.
//! Maps between the database schema and the Domain entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Domain, DomainRepository, NewDomain, Page};
use crate::shared::error::AppError;

/// Database row representation matching the `domains` table schema.
#[derive(Debug, sqlx::FromRow)]
struct DomainRow {
    id: i64,
    name: String,
    description: Option<String>,
    created_by_user_id: i64,
    created_at: DateTime<Utc>,
}

impl DomainRow {
    /// Convert database row to the Domain entity.
    fn into_domain(self) -> Domain {
        Domain {
            id: self.id,
            name: self.name,
            description: self.description,
            created_by_user_id: self.created_by_user_id,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL domain repository implementation.
///
/// Missing rows are not reported as not-found here; the service layer
/// recomputes that via the existence probes before mutating or fetching.
#[derive(Clone)]
pub struct PgDomainRepository {
    pool: PgPool,
}

impl PgDomainRepository {
    /// Create a new PgDomainRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation on `domains.name` to a conflict.
///
/// The constraint is the authoritative uniqueness signal; the service-level
/// probe is only a fast path for a friendlier error message.
fn map_unique_violation(e: sqlx::Error, name: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("Domain with name {} already exists", name))
        }
        _ => AppError::Database(e),
    }
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn get_by_id(&self, id: i64) -> Result<Domain, AppError> {
        let row = sqlx::query_as::<_, DomainRow>(
            r#"
            SELECT id, name, description, created_by_user_id, created_at
            FROM domains
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Internal("Error while getting domain by id".to_string()))?;

        Ok(row.into_domain())
    }

    /// Idempotent delete; zero affected rows is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM domains WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn create(&self, domain: &NewDomain) -> Result<Domain, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, DomainRow>(
            r#"
            INSERT INTO domains (name, description, created_by_user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_by_user_id, created_at
            "#,
        )
        .bind(&domain.name)
        .bind(&domain.description)
        .bind(domain.created_by_user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, &domain.name))?;

        tx.commit().await?;

        Ok(row.into_domain())
    }

    /// Writes every mapped column, including created_by_user_id.
    async fn update(&self, id: i64, domain: &NewDomain) -> Result<Domain, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, DomainRow>(
            r#"
            UPDATE domains
            SET name = $2,
                description = $3,
                created_by_user_id = $4
            WHERE id = $1
            RETURNING id, name, description, created_by_user_id, created_at
            "#,
        )
        .bind(id)
        .bind(&domain.name)
        .bind(&domain.description)
        .bind(domain.created_by_user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, &domain.name))?
        .ok_or_else(|| AppError::Internal("Error while updating domain".to_string()))?;

        tx.commit().await?;

        Ok(row.into_domain())
    }

    async fn get_page(&self, page: i64, size: i64) -> Result<Page<Domain>, AppError> {
        let offset = page.saturating_mul(size);

        let rows = sqlx::query_as::<_, DomainRow>(
            r#"
            SELECT id, name, description, created_by_user_id, created_at
            FROM domains
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total_items = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM domains")
            .fetch_one(&self.pool)
            .await?;

        Ok(Page {
            items: rows.into_iter().map(DomainRow::into_domain).collect(),
            page,
            size,
            total_items,
        })
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM domains WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM domains WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
