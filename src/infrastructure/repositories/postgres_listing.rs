// src/infrastructure/repositories/postgres_listing.rs
use super::{error::with_slug, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{
    Collection, Listing, ListingId, ListingReadRepository, ListingSummary, ListingTitle,
    ListingUpdate, ListingWriteRepository, NewListing,
};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LISTING_COLUMNS: &str = "id, title, slug, summary, owner_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresListingWriteRepository {
    pool: PgPool,
}

impl PostgresListingWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresListingReadRepository {
    pool: PgPool,
}

impl PostgresListingReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ListingRow {
    id: i64,
    title: String,
    slug: String,
    summary: String,
    owner_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ListingRow {
    fn into_listing(self, collection: Collection) -> DomainResult<Listing> {
        Ok(Listing {
            id: ListingId::new(self.id)?,
            collection,
            title: ListingTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            summary: ListingSummary::new(self.summary)?,
            owner_id: UserId::new(self.owner_id)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl ListingWriteRepository for PostgresListingWriteRepository {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing> {
        let NewListing {
            collection,
            title,
            slug,
            summary,
            owner_id,
            created_at,
            updated_at,
        } = listing;

        let sql = format!(
            "INSERT INTO {} (title, slug, summary, owner_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {LISTING_COLUMNS}",
            collection.table()
        );
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(summary.as_str())
            .bind(i64::from(owner_id))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| with_slug(map_sqlx(err), slug.as_str()))?;

        row.into_listing(collection)
    }

    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing> {
        let ListingUpdate {
            collection,
            id,
            title,
            slug,
            summary,
            original_updated_at,
            updated_at,
        } = update;
        let slug_value = slug.as_ref().map(|s| s.as_str().to_string());

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE ");
        builder.push(collection.table());
        builder.push(" SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(summary.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(LISTING_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ListingRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                let mapped = map_sqlx(err);
                match slug_value.as_deref() {
                    Some(slug) => with_slug(mapped, slug),
                    None => mapped,
                }
            })?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("listing update conflict, please retry".into()))?;

        row.into_listing(collection)
    }

    async fn delete(&self, collection: Collection, id: ListingId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM listing_relations WHERE collection = $1 AND listing_id = $2")
            .bind(collection.as_str())
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let sql = format!("DELETE FROM {} WHERE id = $1", collection.table());
        let result = sqlx::query(&sql)
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("{collection} {id} not found")));
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl ListingReadRepository for PostgresListingReadRepository {
    async fn find_by_id(
        &self,
        collection: Collection,
        id: ListingId,
    ) -> DomainResult<Option<Listing>> {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM {} WHERE id = $1",
            collection.table()
        );
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| row.into_listing(collection)).transpose()
    }

    async fn find_by_slug(
        &self,
        collection: Collection,
        slug: &Slug,
    ) -> DomainResult<Option<Listing>> {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM {} WHERE slug = $1",
            collection.table()
        );
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| row.into_listing(collection)).transpose()
    }

    async fn list(
        &self,
        collection: Collection,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<Listing>> {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM {}
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2",
            collection.table()
        );
        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| row.into_listing(collection))
            .collect()
    }
}
