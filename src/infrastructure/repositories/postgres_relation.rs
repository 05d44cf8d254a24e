// src/infrastructure/repositories/postgres_relation.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::relation::{RelationKey, RelationRepository, RelationState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Relations live in one table keyed by `(collection, listing_id, kind, user_id)`.
/// Each change is a single conditional statement; membership is never read first.
#[derive(Clone)]
pub struct PostgresRelationRepository {
    pool: PgPool,
}

impl PostgresRelationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn remove(&self, key: &RelationKey) -> DomainResult<bool> {
        let result = sqlx::query(
            "DELETE FROM listing_relations
             WHERE collection = $1 AND listing_id = $2 AND kind = $3 AND user_id = $4",
        )
        .bind(key.collection.as_str())
        .bind(i64::from(key.listing_id))
        .bind(key.kind.as_str())
        .bind(i64::from(key.user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert guarded by the listing still existing. Returns whether a row was added.
    async fn add(&self, key: &RelationKey, now: DateTime<Utc>) -> DomainResult<bool> {
        let sql = format!(
            "INSERT INTO listing_relations (collection, listing_id, kind, user_id, created_at)
             SELECT $1, $2, $3, $4, $5
             WHERE EXISTS (SELECT 1 FROM {} WHERE id = $2)
             ON CONFLICT (collection, listing_id, kind, user_id) DO NOTHING",
            key.collection.table()
        );
        let result = sqlx::query(&sql)
            .bind(key.collection.as_str())
            .bind(i64::from(key.listing_id))
            .bind(key.kind.as_str())
            .bind(i64::from(key.user_id))
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_active(&self, key: &RelationKey) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM listing_relations
                 WHERE collection = $1 AND listing_id = $2 AND kind = $3 AND user_id = $4
             )",
        )
        .bind(key.collection.as_str())
        .bind(i64::from(key.listing_id))
        .bind(key.kind.as_str())
        .bind(i64::from(key.user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count(&self, key: &RelationKey) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM listing_relations
             WHERE collection = $1 AND listing_id = $2 AND kind = $3",
        )
        .bind(key.collection.as_str())
        .bind(i64::from(key.listing_id))
        .bind(key.kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn state(
        &self,
        key: &RelationKey,
        active: bool,
        changed: bool,
    ) -> DomainResult<RelationState> {
        Ok(RelationState {
            active,
            changed,
            count: self.count(key).await?,
        })
    }

    async fn add_or_report(
        &self,
        key: &RelationKey,
        now: DateTime<Utc>,
    ) -> DomainResult<RelationState> {
        if self.add(key, now).await? {
            return self.state(key, true, true).await;
        }
        // Nothing inserted: either the row is already there (possibly from a concurrent
        // writer) or the listing is gone.
        if self.is_active(key).await? {
            self.state(key, true, false).await
        } else {
            Err(DomainError::NotFound(format!(
                "{} {} not found",
                key.collection, key.listing_id
            )))
        }
    }
}

#[async_trait]
impl RelationRepository for PostgresRelationRepository {
    async fn toggle(&self, key: RelationKey, now: DateTime<Utc>) -> DomainResult<RelationState> {
        if self.remove(&key).await? {
            return self.state(&key, false, true).await;
        }
        self.add_or_report(&key, now).await
    }

    async fn set(&self, key: RelationKey, now: DateTime<Utc>) -> DomainResult<RelationState> {
        self.add_or_report(&key, now).await
    }

    async fn unset(&self, key: RelationKey) -> DomainResult<RelationState> {
        let removed = self.remove(&key).await?;
        self.state(&key, false, removed).await
    }
}
